use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dlb")]
#[command(about = "Batch translation CLI for text and CSV files using the DeepL API")]
#[command(version)]
pub struct Args {
    /// File or folder with files to translate
    #[arg(long = "input_folder", value_name = "PATH")]
    pub input_folder: Option<PathBuf>,

    /// Existing folder for the translated output files
    #[arg(long = "output_folder", value_name = "DIR")]
    pub output_folder: Option<PathBuf>,

    /// Source language code (omit to auto-detect per file)
    #[arg(long = "source_lang", value_name = "CODE")]
    pub source_lang: Option<String>,

    /// Target language code [default: EN-US]
    #[arg(long = "target_lang", value_name = "CODE")]
    pub target_lang: Option<String>,

    /// Treat inputs as CSV tables instead of plain text
    #[arg(long = "is_csv")]
    pub is_csv: bool,

    /// Identifier column name (required with --is_csv)
    #[arg(long = "id_col_csv", value_name = "COLUMN")]
    pub id_col_csv: Option<String>,

    /// One or more text column names to translate (required with --is_csv)
    #[arg(long = "text_cols_csv", value_name = "COLUMN", num_args = 1..)]
    pub text_cols_csv: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported target language codes
    Languages,
}
