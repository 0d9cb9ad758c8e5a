//! CLI tool to inspect a roster CSV: cell lookup, key search, sorting,
//! and per-row field maps.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tablepipe::{Result, Table, TableError};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

/// Query a CSV roster by column name.
#[derive(Parser)]
#[command(name = "roster-query")]
struct Cli {
    /// Roster CSV file with a header line
    roster: PathBuf,

    /// Column used as the unique row key
    #[arg(short, long, default_value = "employee_id")]
    key: String,

    /// Print the cell at ROW,COLUMN (row numbers start at 0)
    #[arg(long, value_name = "ROW,COLUMN")]
    cell: Option<String>,

    /// Print rows whose key column equals this id
    #[arg(long, value_name = "ID")]
    find: Option<i64>,

    /// Sort rows by this column before printing
    #[arg(long, value_name = "COLUMN")]
    sort_by: Option<String>,

    /// Print one field map per row, keyed by the key column
    #[arg(long)]
    group: bool,
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("query failed: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut table = Table::load(&cli.roster)?;

    if let Some(column) = &cli.sort_by {
        table.sort_by_column(column)?;
    }

    if let Some(spec) = &cli.cell {
        let (row, column) = parse_cell_spec(spec)?;
        println!("{}", table.cell(row, column)?);
        return Ok(());
    }

    if let Some(id) = cli.find {
        for row in table.find_by_key(&cli.key, id)? {
            println!("{}", row.join(","));
        }
        return Ok(());
    }

    if cli.group {
        for (key, map) in table.keyed_maps(&cli.key)? {
            let pairs: Vec<String> = map.iter().map(|(f, v)| format!("{f}={v}")).collect();
            println!("{key}: {}", pairs.join(", "));
        }
        return Ok(());
    }

    // Default: print the (possibly sorted) table.
    println!("{}", table.fields().join(","));
    for row in table.rows() {
        println!("{}", row.join(","));
    }
    Ok(())
}

/// Split "ROW,COLUMN" into a row number and a column name.
fn parse_cell_spec(spec: &str) -> Result<(usize, &str)> {
    let (row, column) = spec.split_once(',').ok_or_else(|| TableError::ValueParse {
        value: spec.to_string(),
    })?;
    let row: usize = row.trim().parse().map_err(|_| TableError::ValueParse {
        value: spec.to_string(),
    })?;
    Ok((row, column.trim()))
}
