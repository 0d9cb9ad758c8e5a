//! # tablepipe
//!
//! A small CSV table-processing library: load a delimited file into a
//! header-plus-rows table, query it by column name, reshape rows into keyed
//! maps, and merge two meeting-minutes files into one date-sorted output.
//!
//! Everything is synchronous and single-pass; a table lives in memory for
//! the duration of a run.
//!
//! ## Example
//!
//! ```no_run
//! use tablepipe::Table;
//!
//! # fn main() -> tablepipe::Result<()> {
//! let mut roster = Table::load("employees.csv")?;
//!
//! // Positional access and key search go through column names.
//! let name = roster.cell(0, "first_name")?.to_string();
//! let matches = roster.find_by_key("employee_id", 1)?.len();
//!
//! roster.sort_by_column("last_name")?;
//! let by_id = roster.keyed_maps("employee_id")?;
//! # let _ = (name, matches, by_id);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod minutes;
pub mod pipeline;
pub mod secret;
pub mod table;

mod query;
mod reshape;

pub use error::{Result, TableError};
pub use minutes::{DATE_FORMAT, Minute, format_date, normalize_dates, union_minutes};
pub use pipeline::merge_minutes;
pub use secret::{SecretStore, THIS_VALUE_VAR, this_value};
pub use table::Table;
