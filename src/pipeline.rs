//! End-to-end minutes merge pipeline.
//!
//! Linear stages, no branching beyond error paths:
//!
//! ```text
//! LOAD(a) -> LOAD(b) -> UNION -> PARSE DATES -> SORT -> FORMAT -> WRITE
//! ```
//!
//! Dates are parsed before the output file is created, so a record with a
//! malformed date aborts the run without leaving a partial file behind.
//! Rows sharing the same date keep no particular relative order: the union
//! set iterates in unspecified order and the sort only compares dates.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TableError};
use crate::minutes::{Minute, format_date, normalize_dates, union_minutes};
use crate::table::Table;

/// Merge two minutes files into one sorted output file.
///
/// Loads both inputs, set-unions their rows, parses the date column with
/// the fixed minutes format, sorts ascending by date, formats the dates
/// back, and writes a CSV whose header is file A's header. Returns the
/// sorted records as written.
pub fn merge_minutes(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
) -> Result<Vec<Minute>> {
    let a = load_minutes_table(path_a.as_ref())?;
    let b = load_minutes_table(path_b.as_ref())?;

    let merged = union_minutes(&a, &b);
    debug!(
        a = a.len(),
        b = b.len(),
        merged = merged.len(),
        "unioned minutes rows"
    );

    let mut dated = normalize_dates(merged)?;
    dated.sort_by(|x, y| x.1.cmp(&y.1));

    let sorted: Vec<Minute> = dated
        .into_iter()
        .map(|(title, date)| Minute::new(title, format_date(date)))
        .collect();

    write_minutes(out_path.as_ref(), a.fields(), &sorted)?;
    Ok(sorted)
}

/// Load one minutes file and check it has at least title and date columns.
fn load_minutes_table(path: &Path) -> Result<Table> {
    let table = Table::load(path)?;
    if table.fields().len() < 2 {
        return Err(TableError::MalformedInput {
            path: path.to_path_buf(),
        });
    }
    Ok(table)
}

fn write_minutes(path: &Path, fields: &[String], minutes: &[Minute]) -> Result<()> {
    let file = File::create(path).map_err(|source| TableError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(fields)?;
    for m in minutes {
        writer.write_record([m.title.as_str(), m.date.as_str()])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = minutes.len(), "wrote merged minutes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_merge_sorts_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("minutes1.csv");
        let b = dir.path().join("minutes2.csv");
        let out = dir.path().join("minutes.csv");

        fs::write(
            &a,
            "meeting,date\nMar Meeting,\"March 15, 2024\"\nJan Meeting,\"January 10, 2024\"\n",
        )
        .unwrap();
        fs::write(
            &b,
            "meeting,date\nJan Meeting,\"January 10, 2024\"\nFeb Meeting,\"February 01, 2024\"\n",
        )
        .unwrap();

        let merged = merge_minutes(&a, &b, &out).unwrap();

        let titles: Vec<&str> = merged.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Jan Meeting", "Feb Meeting", "Mar Meeting"]);
    }

    #[test]
    fn test_merge_output_reloads_with_input_header() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("minutes1.csv");
        let b = dir.path().join("minutes2.csv");
        let out = dir.path().join("minutes.csv");

        fs::write(
            &a,
            "meeting,date\nJan Meeting,\"January 10, 2024\"\n",
        )
        .unwrap();
        fs::write(
            &b,
            "meeting,date\nJan Meeting,\"January 10, 2024\"\nFeb Meeting,\"February 01, 2024\"\n",
        )
        .unwrap();

        merge_minutes(&a, &b, &out).unwrap();
        let written = Table::load(&out).unwrap();

        // Header comes from file A; the duplicate row collapsed to one.
        assert_eq!(written.fields(), ["meeting", "date"]);
        assert_eq!(written.len(), 2);
        assert_eq!(written.rows()[0], ["Jan Meeting", "January 10, 2024"]);
        assert_eq!(written.rows()[1], ["Feb Meeting", "February 01, 2024"]);
    }

    #[test]
    fn test_merge_bad_date_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("minutes1.csv");
        let b = dir.path().join("minutes2.csv");
        let out = dir.path().join("minutes.csv");

        fs::write(&a, "meeting,date\nStandup,\"March 04, 2024\"\n").unwrap();
        fs::write(&b, "meeting,date\nRetro,2024-01-10\n").unwrap();

        let err = merge_minutes(&a, &b, &out).unwrap_err();
        assert!(matches!(err, TableError::DateParse { value, .. } if value == "2024-01-10"));
        assert!(!out.exists());
    }

    #[test]
    fn test_merge_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("gone.csv");
        let b = dir.path().join("also-gone.csv");
        let out = dir.path().join("minutes.csv");

        let err = merge_minutes(&a, &b, &out).unwrap_err();
        assert!(matches!(err, TableError::FileAccess { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_merge_single_column_input_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("minutes1.csv");
        let b = dir.path().join("minutes2.csv");
        let out = dir.path().join("minutes.csv");

        fs::write(&a, "meeting\nStandup\n").unwrap();
        fs::write(&b, "meeting,date\nRetro,\"March 04, 2024\"\n").unwrap();

        let err = merge_minutes(&a, &b, &out).unwrap_err();
        assert!(matches!(err, TableError::MalformedInput { .. }));
    }
}
