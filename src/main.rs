use anyhow::Result;
use clap::Parser;

use dlb_cli::cli::commands::run;
use dlb_cli::cli::{Args, Command};
use dlb_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        None => {
            let options = run::RunOptions {
                input_folder: args.input_folder,
                output_folder: args.output_folder,
                source_lang: args.source_lang,
                target_lang: args.target_lang,
                is_csv: args.is_csv,
                id_col_csv: args.id_col_csv,
                text_cols_csv: args.text_cols_csv,
            };
            run::run_batch(options).await?;
        }
    }

    Ok(())
}
