//! Batch driver: applies the right pipeline to a file or a directory of
//! files, with per-item failure isolation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::pipeline;
use crate::translation::Translator;
use crate::ui::{BatchProgress, Style};

/// Which pipeline to run, with its tabular parameters.
#[derive(Debug, Clone)]
pub enum Mode {
    Text,
    Tabular {
        id_col: String,
        text_cols: Vec<String>,
    },
}

impl Mode {
    /// File extension this mode accepts.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Tabular { .. } => "csv",
        }
    }
}

/// Parameters for one batch invocation.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input: PathBuf,
    pub output_folder: PathBuf,
    pub source_lang: Option<String>,
    pub target_lang: String,
    pub mode: Mode,
}

/// Outcome of a batch run.
///
/// A failed item does not abort the batch; it is recorded here instead.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub translated: usize,
    pub failures: Vec<(PathBuf, String)>,
}

/// Runs the batch over a single file or every matching file in a directory.
///
/// A path that is neither a directory nor a file with the expected extension
/// produces a warning and an empty summary, not an error.
pub async fn run<T: Translator>(client: &T, options: &BatchOptions) -> Result<BatchSummary> {
    let input = &options.input;
    let mut summary = BatchSummary::default();

    if input.is_dir() {
        let files = matching_files(input, options.mode.extension())?;

        let progress = BatchProgress::new(files.len() as u64);
        for file in files {
            progress.set_current_file(&file.file_name().unwrap_or_default().to_string_lossy());
            translate_one(client, &file, options, &mut summary).await;
            progress.inc();
        }
        progress.finish();
    } else if input.is_file() && has_extension(input, options.mode.extension()) {
        translate_one(client, input, options, &mut summary).await;
    } else {
        eprintln!(
            "{} {} is not a {} file or a directory, nothing to do",
            Style::warning("Warning:"),
            input.display(),
            options.mode.extension(),
        );
    }

    Ok(summary)
}

async fn translate_one<T: Translator>(
    client: &T,
    file: &Path,
    options: &BatchOptions,
    summary: &mut BatchSummary,
) {
    let result = match &options.mode {
        Mode::Text => {
            pipeline::translate_file(
                client,
                file,
                &options.output_folder,
                options.source_lang.as_deref(),
                &options.target_lang,
            )
            .await
        }
        Mode::Tabular { id_col, text_cols } => {
            pipeline::translate_table(
                client,
                file,
                id_col,
                text_cols,
                options.source_lang.as_deref(),
                &options.target_lang,
                &options.output_folder,
            )
            .await
        }
    };

    match result {
        Ok(_) => summary.translated += 1,
        Err(err) => summary.failures.push((file.to_path_buf(), format!("{err:#}"))),
    }
}

/// Lists the files in `dir` whose extension matches exactly, sorted by name
/// for a reproducible processing order.
fn matching_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Exact extension match, case-insensitive. `report.csv.bak` does not count
/// as a csv file.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
