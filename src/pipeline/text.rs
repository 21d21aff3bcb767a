//! Plain-text pipeline: one file, one translation call, one output file.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::translation::{Provenance, TranslationRequest, Translator};
use crate::{encoding, fs, paths};

/// Translates a whole text file as a single unit.
///
/// The file is decoded through the same encoding-detection contract as
/// tabular input. Output is written as UTF-8; re-running with identical
/// arguments overwrites the prior output.
///
/// Returns the path of the written output file.
pub async fn translate_file<T: Translator>(
    client: &T,
    input_path: &Path,
    output_folder: &Path,
    source_lang: Option<&str>,
    target_lang: &str,
) -> Result<PathBuf> {
    let (text, _) = encoding::read_to_string(input_path)?;

    let request = TranslationRequest {
        text,
        source_lang: source_lang.map(ToString::to_string),
        target_lang: target_lang.to_string(),
    };
    let translation = client.translate(&request).await?;

    let provenance = Provenance::from_parts(source_lang, translation.detected_source_lang.as_deref());
    let output = paths::output_path(output_folder, input_path, &provenance, target_lang);
    fs::atomic_write(&output, translation.text.as_bytes())?;

    Ok(output)
}
