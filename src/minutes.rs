//! Meeting-minutes records and date normalization.
//!
//! A minutes file has two columns: a meeting title and a date written in
//! the fixed format `"Month DD, YYYY"` (for example "March 04, 2024").
//! Records from two files are deduplicated by full-tuple equality — two
//! records differ if either the title or the raw date string differs, so
//! set membership compares dates as strings, not as calendar dates.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{Result, TableError};
use crate::table::Table;

/// Date format used by minutes files, e.g. "March 04, 2024".
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// One meeting-minutes entry: title plus raw date string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Minute {
    pub title: String,
    pub date: String,
}

impl Minute {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
        }
    }
}

/// Union of both tables' rows as minutes records, deduplicated by value.
///
/// Only the first two cells of each row are significant: title and date.
/// Both tables must have at least two columns.
pub fn union_minutes(a: &Table, b: &Table) -> HashSet<Minute> {
    a.rows()
        .iter()
        .chain(b.rows())
        .map(|row| Minute::new(row[0].clone(), row[1].clone()))
        .collect()
}

/// Parse each record's date with [`DATE_FORMAT`].
///
/// The whole conversion aborts with [`TableError::DateParse`] at the first
/// record whose date does not match the format; no records are skipped.
pub fn normalize_dates(
    minutes: impl IntoIterator<Item = Minute>,
) -> Result<Vec<(String, NaiveDate)>> {
    minutes
        .into_iter()
        .map(|m| {
            let date =
                NaiveDate::parse_from_str(&m.date, DATE_FORMAT).map_err(|_| {
                    TableError::DateParse {
                        value: m.date.clone(),
                        format: DATE_FORMAT,
                    }
                })?;
            Ok((m.title, date))
        })
        .collect()
}

/// Format a parsed date back into the fixed minutes format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
