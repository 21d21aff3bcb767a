use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::batch::{self, BatchOptions, Mode};
use crate::config::{ConfigManager, resolve_credentials};
use crate::translation::{DeepLClient, validate_source_language, validate_target_language};
use crate::ui::Style;

pub struct RunOptions {
    pub input_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub is_csv: bool,
    pub id_col_csv: Option<String>,
    pub text_cols_csv: Vec<String>,
}

pub async fn run_batch(options: RunOptions) -> Result<()> {
    let Some(input) = options.input_folder else {
        bail!(
            "Missing required option: '--input_folder'\n\n\
             Pass the file or folder to translate:\n  \
             dlb --input_folder ./notes --output_folder ./out"
        );
    };

    let Some(output_folder) = options.output_folder else {
        bail!(
            "Missing required option: '--output_folder'\n\n\
             Pass an existing folder for the translated files:\n  \
             dlb --input_folder ./notes --output_folder ./out"
        );
    };

    if !output_folder.is_dir() {
        bail!(
            "Output folder does not exist: {}\n\n\
             Create it first, then re-run.",
            output_folder.display()
        );
    }

    let config = ConfigManager::new().load_or_default();

    // An empty --source_lang means auto-detect, matching the original flag
    // contract.
    let source_lang = options
        .source_lang
        .filter(|lang| !lang.is_empty())
        .map(|lang| validate_source_language(&lang))
        .transpose()?;

    let target_lang = options
        .target_lang
        .or(config.dlb.target_lang.clone())
        .unwrap_or_else(|| "EN-US".to_string());
    let target_lang = validate_target_language(&target_lang)?;

    let mode = if options.is_csv {
        let Some(id_col) = options.id_col_csv else {
            bail!("Missing required option: '--id_col_csv' (required with --is_csv)");
        };
        if options.text_cols_csv.is_empty() {
            bail!("Missing required option: '--text_cols_csv' (required with --is_csv)");
        }
        Mode::Tabular {
            id_col,
            text_cols: options.text_cols_csv,
        }
    } else {
        Mode::Text
    };

    // Credentials are resolved once; the client is reused for every file.
    let credentials = resolve_credentials(&config)?;
    let client = DeepLClient::new(credentials.api_key, credentials.endpoint);

    let batch_options = BatchOptions {
        input,
        output_folder,
        source_lang,
        target_lang,
        mode,
    };
    let summary = batch::run(&client, &batch_options).await?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &batch::BatchSummary) {
    if summary.translated > 0 {
        eprintln!(
            "{} {} file{} translated",
            Style::success("Done!"),
            Style::value(summary.translated),
            if summary.translated == 1 { "" } else { "s" },
        );
    }

    for (path, reason) in &summary.failures {
        eprintln!(
            "{} {}: {reason}",
            Style::error("Failed:"),
            path.display(),
        );
    }
}
