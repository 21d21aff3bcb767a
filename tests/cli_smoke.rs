#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly, validates its
//! options, and responds to basic commands without crashing. None of them
//! reach the network: every scenario fails validation or skips the input
//! before a request would be made.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn dlb() -> Command {
    Command::cargo_bin("dlb").unwrap()
}

#[test]
fn test_help_displays_usage() {
    dlb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input_folder"))
        .stdout(predicate::str::contains("--output_folder"))
        .stdout(predicate::str::contains("--source_lang"))
        .stdout(predicate::str::contains("--target_lang"))
        .stdout(predicate::str::contains("--is_csv"))
        .stdout(predicate::str::contains("--text_cols_csv"));
}

#[test]
fn test_version_displays_version() {
    dlb()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    dlb()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("EN-US"))
        .stdout(predicate::str::contains("FR"))
        .stdout(predicate::str::contains("JA"));
}

#[test]
fn test_missing_input_folder() {
    dlb()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input_folder"));
}

#[test]
fn test_nonexistent_output_folder() {
    let input = TempDir::new().unwrap();

    dlb()
        .args(["--input_folder", input.path().to_str().unwrap()])
        .args(["--output_folder", "/nonexistent/out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output folder does not exist"));
}

#[test]
fn test_invalid_target_language() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    dlb()
        .args(["--input_folder", input.path().to_str().unwrap()])
        .args(["--output_folder", output.path().to_str().unwrap()])
        .args(["--target_lang", "invalid_lang_xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid target language code"));
}

#[test]
fn test_is_csv_requires_id_col() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    dlb()
        .args(["--input_folder", input.path().to_str().unwrap()])
        .args(["--output_folder", output.path().to_str().unwrap()])
        .arg("--is_csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id_col_csv"));
}

#[test]
fn test_is_csv_requires_text_cols() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    dlb()
        .args(["--input_folder", input.path().to_str().unwrap()])
        .args(["--output_folder", output.path().to_str().unwrap()])
        .args(["--is_csv", "--id_col_csv", "id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--text_cols_csv"));
}

#[test]
fn test_missing_api_key_is_reported() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();

    dlb()
        .env_remove("DEEPL_API_KEY")
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["--input_folder", input.path().to_str().unwrap()])
        .args(["--output_folder", output.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing DeepL API key"));
}

#[test]
fn test_unsupported_file_warns_and_exits_zero() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();
    let pdf = input.path().join("report.pdf");
    std::fs::write(&pdf, "not text").unwrap();

    dlb()
        .env("DEEPL_API_KEY", "test-key:fx")
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["--input_folder", pdf.to_str().unwrap()])
        .args(["--output_folder", output.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing to do"));
}
