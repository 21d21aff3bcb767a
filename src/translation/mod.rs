mod client;
mod language;

pub use client::{DeepLClient, Translation, TranslationRequest, Translator, endpoint_for_key};
pub use language::{
    TARGET_LANGUAGES, print_languages, validate_source_language, validate_target_language,
};

use std::fmt;

/// How the source language of an output file was determined.
///
/// Rendered into the output file name and immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// The user supplied the source language explicitly.
    Manual(String),
    /// The API detected the source language.
    Auto(String),
}

impl Provenance {
    /// Builds the provenance for a translation result.
    ///
    /// An explicit source language always wins; otherwise the detected
    /// language is recorded, falling back to the ISO 639-3 "undetermined"
    /// code when the API reported nothing.
    pub fn from_parts(source_lang: Option<&str>, detected: Option<&str>) -> Self {
        source_lang.map_or_else(
            || Self::Auto(detected.unwrap_or("und").to_string()),
            |lang| Self::Manual(lang.to_string()),
        )
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual(lang) => write!(f, "manual_{lang}"),
            Self::Auto(lang) => write!(f, "auto_{lang}"),
        }
    }
}
