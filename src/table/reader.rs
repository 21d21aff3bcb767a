//! Delimited file parsing with comma-to-tab fallback.

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::path::Path;

use super::{Table, TableError};
use crate::encoding;

/// Loads a delimited file, projecting to the identifier column plus the
/// requested text columns.
///
/// The file is decoded with the detected encoding, which is returned so the
/// output can be written the same way.
pub fn read_table(
    path: &Path,
    id_col: &str,
    text_cols: &[String],
) -> Result<(Table, &'static Encoding)> {
    let (text, detected) = encoding::read_to_string(path)?;
    let table = parse_table(&text, id_col, text_cols)
        .with_context(|| format!("Failed to load table: {}", path.display()))?;
    Ok((table, detected))
}

/// Parses delimited text, attempting comma first and retrying with tab.
///
/// The comma attempt is abandoned when it fails structurally or when the
/// identifier column is absent from the parsed header, which is how a
/// tab-separated file read with a comma delimiter shows up. Once a delimiter
/// yields the identifier column, a missing text column is a hard
/// [`TableError::MissingColumn`] failure.
pub fn parse_table(
    text: &str,
    id_col: &str,
    text_cols: &[String],
) -> Result<Table, TableError> {
    match parse_with_delimiter(text, b',', id_col, text_cols) {
        Ok(table) => Ok(table),
        Err(err) if should_retry_with_tab(&err, id_col) => {
            parse_with_delimiter(text, b'\t', id_col, text_cols)
        }
        Err(err) => Err(err),
    }
}

fn should_retry_with_tab(err: &TableError, id_col: &str) -> bool {
    match err {
        TableError::Csv(_) => true,
        TableError::MissingColumn(column) => column == id_col,
        TableError::Io(_) => false,
    }
}

fn parse_with_delimiter(
    text: &str,
    delimiter: u8,
    id_col: &str,
    text_cols: &[String],
) -> Result<Table, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    // Identifier column first, then the text columns in the given order.
    let mut wanted = Vec::with_capacity(text_cols.len() + 1);
    for name in std::iter::once(id_col).chain(text_cols.iter().map(String::as_str)) {
        let index = headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))?;
        wanted.push(index);
    }

    let columns = wanted
        .iter()
        .map(|&index| headers[index].to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            wanted
                .iter()
                .map(|&index| record.get(index).unwrap_or("").to_string())
                .collect(),
        );
    }

    Ok(Table::new(columns, rows))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_comma_delimited() {
        let table =
            parse_table("id,comment\n1,hola\n2,adios\n", "id", &cols(&["comment"])).unwrap();

        assert_eq!(table.columns(), &["id", "comment"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 1), Some("hola"));
        assert_eq!(table.cell(1, 0), Some("2"));
    }

    #[test]
    fn test_parse_falls_back_to_tab() {
        let table =
            parse_table("id\tcomment\n1\thola\n2\tadios\n", "id", &cols(&["comment"])).unwrap();

        assert_eq!(table.columns(), &["id", "comment"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 1), Some("adios"));
    }

    #[test]
    fn test_parse_drops_unrequested_columns() {
        let table = parse_table(
            "id,score,comment\n1,9,hola\n",
            "id",
            &cols(&["comment"]),
        )
        .unwrap();

        assert_eq!(table.columns(), &["id", "comment"]);
        assert_eq!(table.cell(0, 1), Some("hola"));
    }

    #[test]
    fn test_parse_preserves_text_column_order() {
        let table = parse_table(
            "id,b,a\n1,bee,ay\n",
            "id",
            &cols(&["a", "b"]),
        )
        .unwrap();

        // Requested order wins over the input order.
        assert_eq!(table.columns(), &["id", "a", "b"]);
        assert_eq!(table.cell(0, 1), Some("ay"));
        assert_eq!(table.cell(0, 2), Some("bee"));
    }

    #[test]
    fn test_parse_missing_text_column_is_hard_error() {
        let result = parse_table("id,comment\n1,hola\n", "id", &cols(&["body"]));

        match result {
            Err(TableError::MissingColumn(column)) => assert_eq!(column, "body"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_id_column_reported_after_fallback() {
        let result = parse_table("key,comment\n1,hola\n", "id", &cols(&["comment"]));

        match result {
            Err(TableError::MissingColumn(column)) => assert_eq!(column, "id"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ragged_comma_rows_fall_back_to_tab() {
        // Commas inside free text make the comma parse ragged; the same
        // content is well-formed with a tab delimiter.
        let text = "id\tcomment\n1\thola, que tal\n2\tadios\n";
        let table = parse_table(text, "id", &cols(&["comment"])).unwrap();

        assert_eq!(table.cell(0, 1), Some("hola, que tal"));
    }

    #[test]
    fn test_parse_zero_rows() {
        let table = parse_table("id,comment\n", "id", &cols(&["comment"])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["id", "comment"]);
    }
}
