//! # dlb - DeepL Batch Translation CLI
//!
//! `dlb` translates batches of plain-text and CSV files with the DeepL API.
//! It detects (or accepts) a source language, translates each file or table
//! cell, and writes output whose file name records how the source language
//! was determined.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate every .txt file in a folder
//! dlb --input_folder ./notes --output_folder ./out
//!
//! # Translate from German explicitly
//! dlb --input_folder ./notes --output_folder ./out --source_lang DE
//!
//! # Translate the comment column of a CSV survey to French
//! dlb --input_folder survey.csv --output_folder ./out \
//!     --is_csv --id_col_csv id --text_cols_csv comment --target_lang FR
//! ```
//!
//! ## Configuration
//!
//! The API key is read from the `DEEPL_API_KEY` environment variable.
//! Optional settings live in `~/.config/dlb/config.toml`:
//!
//! ```toml
//! [dlb]
//! api_key_env = "DEEPL_API_KEY"
//! target_lang = "EN-US"
//! ```
//!
//! Output files are named `<input>_<provenance>_<target>.<ext>` where
//! provenance is `manual_<code>` for an explicit source language or
//! `auto_<code>` for a detected one.

/// Batch driver over files and directories.
pub mod batch;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and credential resolution.
pub mod config;

/// Character encoding detection and decoding.
pub mod encoding;

/// File system utilities.
pub mod fs;

/// Path utilities for configuration and output naming.
pub mod paths;

/// Per-file translation pipelines.
pub mod pipeline;

/// Tabular data loading and output.
pub mod table;

/// DeepL API client and language codes.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;
