//! Tabular pipeline: translate designated text cells, merge translated
//! columns alongside the originals, write tab-delimited output.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::table;
use crate::translation::{Provenance, TranslationRequest, Translator};
use crate::{fs, paths};

/// Translates every cell of the designated text columns of a table.
///
/// Each cell is translated independently; with no explicit source language
/// the API detects it per cell. The file-level provenance records only the
/// detection result of the first translated cell (first row, first text
/// column), a deliberate approximation carried over from the original
/// naming scheme rather than a per-cell audit trail.
///
/// Translated columns are inserted directly after their source column as
/// `<col>_translated_<target>`. Row order and the identifier column are
/// untouched. Output is tab-delimited and encoded the way the input was.
///
/// Returns the path of the written output file.
pub async fn translate_table<T: Translator>(
    client: &T,
    input_path: &Path,
    id_col: &str,
    text_cols: &[String],
    source_lang: Option<&str>,
    target_lang: &str,
    output_folder: &Path,
) -> Result<PathBuf> {
    let (mut table, detected_encoding) = table::read_table(input_path, id_col, text_cols)?;

    let mut file_provenance: Option<Provenance> = None;

    for col in text_cols {
        let Some(index) = table.column_index(col) else {
            // The reader guarantees requested columns exist.
            continue;
        };

        let mut translated = Vec::with_capacity(table.len());
        for row in 0..table.len() {
            let cell = table.cell(row, index).unwrap_or("");
            let request = TranslationRequest {
                text: cell.to_string(),
                source_lang: source_lang.map(ToString::to_string),
                target_lang: target_lang.to_string(),
            };
            let translation = client.translate(&request).await?;

            if file_provenance.is_none() {
                file_provenance = Some(Provenance::from_parts(
                    source_lang,
                    translation.detected_source_lang.as_deref(),
                ));
            }
            translated.push(translation.text);
        }

        table.insert_column_after(index, format!("{col}_translated_{target_lang}"), translated);
    }

    // A zero-row table never produced a detection result.
    let provenance =
        file_provenance.unwrap_or_else(|| Provenance::from_parts(source_lang, None));

    let output = paths::output_path(output_folder, input_path, &provenance, target_lang);
    let bytes = table::to_tsv_bytes(&table, detected_encoding)?;
    fs::atomic_write(&output, &bytes)?;

    Ok(output)
}
