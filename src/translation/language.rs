//! DeepL language code validation and listing.

use anyhow::Result;

use crate::ui::Style;

/// Target language codes accepted by the DeepL API and their names.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("AR", "Arabic"),
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN", "English"),
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("PT-PT", "Portuguese (European)"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese (Simplified)"),
];

/// Prints all supported target language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target language codes"));
    for (code, name) in TARGET_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates a target language code, returning its canonical uppercase form.
pub fn validate_target_language(lang: &str) -> Result<String> {
    let canonical = lang.to_uppercase();
    if TARGET_LANGUAGES.iter().any(|(code, _)| *code == canonical) {
        Ok(canonical)
    } else {
        anyhow::bail!(
            "Invalid target language code: '{lang}'\n\n\
             Valid codes include: EN-US, EN-GB, DE, FR, ES, JA, ...\n\
             Run 'dlb languages' to see all supported codes."
        )
    }
}

/// Validates a source language code, returning its canonical uppercase form.
///
/// Source codes never carry a regional variant, so `EN` is valid here while
/// `EN-US` is not.
pub fn validate_source_language(lang: &str) -> Result<String> {
    let canonical = lang.to_uppercase();
    let known = TARGET_LANGUAGES
        .iter()
        .any(|(code, _)| *code == canonical && !code.contains('-'));
    if known {
        Ok(canonical)
    } else {
        anyhow::bail!(
            "Invalid source language code: '{lang}'\n\n\
             Source languages use plain codes without a regional variant\n\
             (e.g. EN, DE, FR). Run 'dlb languages' to see all supported codes."
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_target_language_valid() {
        assert_eq!(validate_target_language("EN-US").unwrap(), "EN-US");
        assert_eq!(validate_target_language("fr").unwrap(), "FR");
        assert_eq!(validate_target_language("pt-br").unwrap(), "PT-BR");
    }

    #[test]
    fn test_validate_target_language_invalid() {
        assert!(validate_target_language("klingon").is_err());
        assert!(validate_target_language("").is_err());
    }

    #[test]
    fn test_validate_source_language_rejects_variants() {
        assert_eq!(validate_source_language("en").unwrap(), "EN");
        assert_eq!(validate_source_language("DE").unwrap(), "DE");
        assert!(validate_source_language("EN-US").is_err());
    }
}
