//! Tabular data loading, projection, and output.

mod reader;
mod writer;

pub use reader::{parse_table, read_table};
pub use writer::to_tsv_bytes;

use thiserror::Error;

/// Errors from parsing or writing tabular files.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Column '{0}' not found in table")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered table restricted to one identifier column plus the requested
/// text columns. Row order is preserved from input to output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (excluding the header).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Inserts a new column immediately after the column at `after`.
    ///
    /// `values` must hold exactly one entry per row.
    pub fn insert_column_after(&mut self, after: usize, name: String, values: Vec<String>) {
        assert_eq!(values.len(), self.rows.len());

        self.columns.insert(after + 1, name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(after + 1, value);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec!["id".to_string(), "comment".to_string()],
            vec![
                vec!["1".to_string(), "hola".to_string()],
                vec!["2".to_string(), "adios".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_index() {
        let table = sample_table();
        assert_eq!(table.column_index("id"), Some(0));
        assert_eq!(table.column_index("comment"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_insert_column_after_keeps_order() {
        let mut table = sample_table();
        table.insert_column_after(
            1,
            "comment_translated_EN-US".to_string(),
            vec!["hello".to_string(), "goodbye".to_string()],
        );

        assert_eq!(
            table.columns(),
            &["id", "comment", "comment_translated_EN-US"]
        );
        assert_eq!(table.cell(0, 2), Some("hello"));
        assert_eq!(table.cell(1, 2), Some("goodbye"));
        assert_eq!(table.cell(0, 0), Some("1"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_column_in_the_middle() {
        let mut table = sample_table();
        table.insert_column_after(
            0,
            "id_copy".to_string(),
            vec!["1".to_string(), "2".to_string()],
        );

        assert_eq!(table.columns(), &["id", "id_copy", "comment"]);
        assert_eq!(table.cell(0, 2), Some("hola"));
    }
}
