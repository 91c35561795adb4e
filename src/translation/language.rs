//! Language tag validation and the supported-language listing.

use language_tags::LanguageTag;
use serde::Deserialize;

use super::TranslationError;
use crate::ui::Style;

/// One entry of the classical backend's language catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// Language code as understood by the backend (e.g. `ko`, `zh-TW`).
    #[serde(rename = "language")]
    pub code: String,
    /// Display name, localized into the language the catalog was requested in.
    #[serde(default)]
    pub name: String,
}

/// Parses `code` as a BCP 47 language tag.
///
/// Returns the tag in its normalized form, which is what the backends are
/// sent.
pub fn parse_language_tag(code: &str) -> Result<String, TranslationError> {
    LanguageTag::parse(code)
        .map(|tag| tag.to_string())
        .map_err(|_| TranslationError::InvalidLanguageCode(code.to_string()))
}

/// Validates a language code given on the command line.
pub fn validate_language(code: &str) -> anyhow::Result<()> {
    parse_language_tag(code)?;
    Ok(())
}

/// Formats one catalog line: index, code and display name.
pub fn format_language_line(index: usize, language: &Language) -> String {
    format!(
        "{index:3} - {}: {}",
        Style::code(&language.code),
        Style::secondary(&language.name)
    )
}

/// Prints the catalog to stdout, one index-prefixed line per language.
pub fn print_languages(languages: &[Language]) {
    for (index, language) in languages.iter().enumerate() {
        println!("{}", format_language_line(index, language));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_tag_valid() {
        assert_eq!(parse_language_tag("en").unwrap(), "en");
        assert_eq!(parse_language_tag("ko").unwrap(), "ko");
        assert!(parse_language_tag("zh-TW").is_ok());
        assert!(parse_language_tag("fil").is_ok());
    }

    #[test]
    fn test_parse_language_tag_invalid() {
        assert!(parse_language_tag("").is_err());
        assert!(parse_language_tag("not a code").is_err());
        assert!(parse_language_tag("12").is_err());
    }

    #[test]
    fn test_invalid_code_is_reported_verbatim() {
        let err = parse_language_tag("12").unwrap_err();
        assert!(matches!(err, TranslationError::InvalidLanguageCode(ref c) if c == "12"));
    }

    #[test]
    fn test_format_language_line_contains_index_and_name() {
        let line = format_language_line(
            7,
            &Language {
                code: "ko".to_string(),
                name: "Korean".to_string(),
            },
        );
        assert!(line.starts_with("  7 - "));
        assert!(line.contains("ko"));
        assert!(line.contains("Korean"));
    }
}
