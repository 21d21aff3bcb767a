//! Path utilities: the configuration directory and output file naming.

use std::path::{Path, PathBuf};

use crate::translation::Provenance;

/// Returns the configuration directory for dlb.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/dlb` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/dlb` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("dlb"),
        |xdg| PathBuf::from(xdg).join("dlb"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

/// Derives the output file path for a translated input.
///
/// The name is `<basename>_<provenance>_<target>.<ext>` with the extension
/// preserved from the input. Pure and deterministic: identical inputs yield
/// the identical path, so reruns overwrite prior output.
pub fn output_path(
    output_folder: &Path,
    input_path: &Path,
    provenance: &Provenance,
    target_lang: &str,
) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());

    let mut name = format!("{stem}_{provenance}_{target_lang}");
    if let Some(ext) = input_path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    output_folder.join(name)
}
