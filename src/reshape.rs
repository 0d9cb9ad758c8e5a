//! Reshaping flat rows into keyed maps.
//!
//! One designated key column names each row; `row_map` turns a single row
//! into a field-to-value map without the key column, and `keyed_maps` builds
//! the map of those maps for the whole table, keyed by the key cell's value.

use std::collections::BTreeMap;

use crate::error::{Result, TableError};
use crate::table::Table;

impl Table {
    /// Map every field except `key_column` to the cell value at `row`.
    ///
    /// The result always has exactly `fields().len() - 1` entries.
    pub fn row_map(&self, row: usize, key_column: &str) -> Result<BTreeMap<String, String>> {
        let key_col = self.column_index(key_column)?;
        if row >= self.rows().len() {
            return Err(TableError::RowOutOfRange {
                index: row,
                rows: self.rows().len(),
            });
        }
        Ok(self.row_map_at(row, key_col))
    }

    /// Map each row's key cell value to that row's [`row_map`](Self::row_map).
    ///
    /// Keys are the cell values in string form, exactly as found in the row.
    /// No duplicate detection: a later row with the same key silently
    /// overwrites the earlier entry.
    pub fn keyed_maps(
        &self,
        key_column: &str,
    ) -> Result<BTreeMap<String, BTreeMap<String, String>>> {
        let key_col = self.column_index(key_column)?;
        let mut result = BTreeMap::new();
        for (i, row) in self.rows().iter().enumerate() {
            result.insert(row[key_col].clone(), self.row_map_at(i, key_col));
        }
        Ok(result)
    }

    fn row_map_at(&self, row: usize, key_col: usize) -> BTreeMap<String, String> {
        self.fields()
            .iter()
            .zip(&self.rows()[row])
            .enumerate()
            .filter(|&(i, _)| i != key_col)
            .map(|(_, (field, cell))| (field.clone(), cell.clone()))
            .collect()
    }
}
