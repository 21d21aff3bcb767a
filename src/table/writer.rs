//! Tab-delimited table output.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use super::{Table, TableError};

/// Serializes a table as tab-delimited text encoded with the given encoding.
///
/// Output is always tab-separated regardless of the input delimiter, so
/// translated text containing commas never needs quoting.
pub fn to_tsv_bytes(table: &Table, encoding: &'static Encoding) -> Result<Vec<u8>, TableError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    let buffer = writer.into_inner().map_err(|e| e.into_error())?;
    let text = String::from_utf8(buffer)
        .map_err(|e| TableError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    Ok(encode_with(&text, encoding))
}

/// Encodes text as the given encoding.
///
/// `encoding_rs` only offers encoders for encodings the WHATWG standard
/// allows as output, so `Encoding::encode` silently substitutes UTF-8 for
/// UTF-16. Inputs detected as UTF-16 via their byte-order mark are encoded
/// here directly, BOM included, so output matches the input encoding.
fn encode_with(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    if encoding == UTF_16LE || encoding == UTF_16BE {
        let mut bytes = Vec::with_capacity(2 + text.len() * 2);
        let bom: [u8; 2] = if encoding == UTF_16LE {
            [0xFF, 0xFE]
        } else {
            [0xFE, 0xFF]
        };
        bytes.extend_from_slice(&bom);
        for unit in text.encode_utf16() {
            if encoding == UTF_16LE {
                bytes.extend_from_slice(&unit.to_le_bytes());
            } else {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
        }
        return bytes;
    }

    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};

    fn sample_table() -> Table {
        Table::new(
            vec!["id".to_string(), "comment".to_string()],
            vec![
                vec!["1".to_string(), "hola, que tal".to_string()],
                vec!["2".to_string(), "adios".to_string()],
            ],
        )
    }

    #[test]
    fn test_output_is_tab_delimited() {
        let bytes = to_tsv_bytes(&sample_table(), UTF_8).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text, "id\tcomment\n1\thola, que tal\n2\tadios\n");
    }

    #[test]
    fn test_output_uses_given_encoding() {
        let table = Table::new(
            vec!["id".to_string(), "comment".to_string()],
            vec![vec!["1".to_string(), "café".to_string()]],
        );

        let bytes = to_tsv_bytes(&table, WINDOWS_1252).unwrap();
        // 'é' is a single 0xE9 byte in Windows-1252.
        assert!(bytes.contains(&0xE9));
        assert!(!bytes.windows(2).any(|w| w == [0xC3, 0xA9]));
    }

    #[test]
    fn test_utf16le_output_round_trips() {
        let table = Table::new(
            vec!["id".to_string(), "comment".to_string()],
            vec![vec!["1".to_string(), "café".to_string()]],
        );

        let bytes = to_tsv_bytes(&table, UTF_16LE).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);

        let (decoded, _, had_errors) = UTF_16LE.decode(&bytes);
        assert!(!had_errors);
        assert_eq!(decoded, "id\tcomment\n1\tcafé\n");
    }

    #[test]
    fn test_utf16be_output_carries_bom() {
        let bytes = to_tsv_bytes(&sample_table(), UTF_16BE).unwrap();
        assert_eq!(&bytes[..2], &[0xFE, 0xFF]);

        let (decoded, _, had_errors) = UTF_16BE.decode(&bytes);
        assert!(!had_errors);
        assert_eq!(decoded, "id\tcomment\n1\thola, que tal\n2\tadios\n");
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let table = Table::new(vec!["id".to_string(), "comment".to_string()], vec![]);
        let bytes = to_tsv_bytes(&table, UTF_8).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), "id\tcomment\n");
    }
}
