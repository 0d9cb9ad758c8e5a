//! Delimited table loading and writing.
//!
//! A [`Table`] holds the header fields and data rows of one CSV file.
//! The first line of the file is the header; every following line is one
//! row. Every row has exactly as many cells as there are fields — the CSV
//! reader rejects ragged rows, so the invariant holds for any loaded table.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TableError};

/// Header fields plus data rows loaded from one delimited file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    fields: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from parts. Row lengths must match the field count.
    pub fn from_parts(fields: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == fields.len()));
        Self { fields, rows }
    }

    /// Load a table from a CSV file.
    ///
    /// Fails with [`TableError::FileAccess`] when the path cannot be opened
    /// and [`TableError::MalformedInput`] when the file has no header line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(TableError::MalformedInput {
                path: path.to_path_buf(),
            });
        }

        let fields: Vec<String> = headers.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %path.display(), fields = fields.len(), rows = rows.len(), "loaded table");
        Ok(Self { fields, rows })
    }

    /// Write the table back out as CSV: header line, then one line per row.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| TableError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(&self.fields)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = self.rows.len(), "wrote table");
        Ok(())
    }

    /// The header fields, in file order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// All data rows, in current order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positional offset of the named column within each row.
    ///
    /// Linear scan, exact match. Fails with [`TableError::ColumnNotFound`]
    /// for an absent name. Not cached; field counts are small.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f == name)
            .ok_or_else(|| TableError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<String>> {
        &mut self.rows
    }
}
