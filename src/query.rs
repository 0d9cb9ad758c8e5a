//! Row queries over a loaded [`Table`]: positional cell access, key search,
//! and in-place sorting.

use crate::error::{Result, TableError};
use crate::table::Table;

impl Table {
    /// The cell at `row` in the named column.
    ///
    /// Fails with [`TableError::RowOutOfRange`] when the row number is past
    /// the end of the table, and [`TableError::ColumnNotFound`] for an
    /// unknown column.
    pub fn cell(&self, row: usize, column: &str) -> Result<&str> {
        let col = self.column_index(column)?;
        let rows = self.rows();
        let row = rows.get(row).ok_or(TableError::RowOutOfRange {
            index: row,
            rows: rows.len(),
        })?;
        Ok(&row[col])
    }

    /// All rows whose cell in `key_column`, parsed as an integer, equals `id`.
    ///
    /// Single linear scan; no uniqueness is assumed, so zero, one, or many
    /// rows may come back. The scan aborts with [`TableError::ValueParse`]
    /// at the first non-numeric key cell rather than skipping it.
    pub fn find_by_key(&self, key_column: &str, id: i64) -> Result<Vec<&[String]>> {
        let col = self.column_index(key_column)?;
        let mut matches = Vec::new();
        for row in self.rows() {
            let key: i64 = row[col]
                .trim()
                .parse()
                .map_err(|_| TableError::ValueParse {
                    value: row[col].clone(),
                })?;
            if key == id {
                matches.push(row.as_slice());
            }
        }
        Ok(matches)
    }

    /// Sort rows in place, lexicographically by the named column's cells.
    ///
    /// The sort is stable: rows with equal keys keep their prior relative
    /// order, and sorting twice gives the same sequence as sorting once.
    pub fn sort_by_column(&mut self, column: &str) -> Result<()> {
        let col = self.column_index(column)?;
        self.rows_mut().sort_by(|a, b| a[col].cmp(&b[col]));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Table {
        Table::from_parts(
            vec!["employee_id".into(), "first_name".into(), "last_name".into()],
            vec![
                vec!["3".into(), "Grace".into(), "Hopper".into()],
                vec!["1".into(), "Ada".into(), "Lovelace".into()],
                vec!["2".into(), "Annie".into(), "Easley".into()],
                vec!["4".into(), "Mary".into(), "Hopper".into()],
            ],
        )
    }

    #[test]
    fn test_cell_access() {
        let table = roster();
        assert_eq!(table.cell(1, "first_name").unwrap(), "Ada");
    }

    #[test]
    fn test_cell_row_out_of_range() {
        let err = roster().cell(99, "first_name").unwrap_err();
        assert!(matches!(err, TableError::RowOutOfRange { index: 99, rows: 4 }));
    }

    #[test]
    fn test_cell_unknown_column() {
        let err = roster().cell(0, "salary").unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_find_by_key_single_match() {
        let table = roster();
        let matches = table.find_by_key("employee_id", 2).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0][1], "Annie");
    }

    #[test]
    fn test_find_by_key_no_match_is_empty_not_error() {
        let table = roster();
        let matches = table.find_by_key("employee_id", 42).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_find_by_key_duplicate_ids() {
        let table = Table::from_parts(
            vec!["employee_id".into(), "first_name".into()],
            vec![
                vec!["7".into(), "Ada".into()],
                vec!["7".into(), "Grace".into()],
            ],
        );
        let matches = table.find_by_key("employee_id", 7).unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_find_by_key_non_numeric_aborts() {
        let table = Table::from_parts(
            vec!["employee_id".into(), "first_name".into()],
            vec![
                vec!["1".into(), "Ada".into()],
                vec!["oops".into(), "Grace".into()],
            ],
        );
        let err = table.find_by_key("employee_id", 1).unwrap_err();
        assert!(matches!(err, TableError::ValueParse { value } if value == "oops"));
    }

    #[test]
    fn test_sort_by_column_orders_rows() {
        let mut table = roster();
        table.sort_by_column("last_name").unwrap();
        let last_names: Vec<&str> = table.rows().iter().map(|r| r[2].as_str()).collect();
        assert_eq!(last_names, ["Easley", "Hopper", "Hopper", "Lovelace"]);
    }

    #[test]
    fn test_sort_by_column_stable_for_duplicates() {
        let mut table = roster();
        table.sort_by_column("last_name").unwrap();
        // Grace came before Mary in the input; both are Hopper.
        let hoppers: Vec<&str> = table
            .rows()
            .iter()
            .filter(|r| r[2] == "Hopper")
            .map(|r| r[1].as_str())
            .collect();
        assert_eq!(hoppers, ["Grace", "Mary"]);
    }

    #[test]
    fn test_sort_by_column_idempotent() {
        let mut once = roster();
        once.sort_by_column("last_name").unwrap();
        let mut twice = once.clone();
        twice.sort_by_column("last_name").unwrap();
        assert_eq!(once, twice);
    }
}
