// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and metadata.
//!
//! Used to tell a code that is not a language at all apart from a real
//! language we have no catalog for yet, so the CLI can report either case.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// Covers the languages spoken across the East African Community plus the
/// major international languages a translation request is likely to name.
///
/// # Examples
/// ```
/// assert!(meteoconnect::i18n::is_valid_iso639_1("rw"));
/// assert!(meteoconnect::i18n::is_valid_iso639_1("sw"));
/// assert!(!meteoconnect::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "am" | "ar" | "de" | "en" | "es" | "fr" | "hi" | "it" | "ja" | "ko"
            | "lg" | "ln" | "nl" | "om" | "pt" | "rn" | "ru" | "rw" | "sn"
            | "so" | "sw" | "ti" | "zh" | "zu"
    )
}

/// Returns the English name of an ISO 639-1 code.
///
/// Returns `None` for unrecognised codes.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "rw" => Some("Kinyarwanda"),
        "fr" => Some("French"),
        "sw" => Some("Swahili"),
        "rn" => Some("Kirundi"),
        "lg" => Some("Ganda"),
        "ln" => Some("Lingala"),
        "am" => Some("Amharic"),
        "so" => Some("Somali"),
        "ar" => Some("Arabic"),
        "de" => Some("German"),
        "es" => Some("Spanish"),
        "pt" => Some("Portuguese"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}

/// Returns the native name of a supported language code.
///
/// Used in the language picker so users see their language written in its
/// own words.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "rw" => Some("Ikinyarwanda"),
        "fr" => Some("Français"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("rw"));
        assert!(is_valid_iso639_1("fr"));
        assert!(is_valid_iso639_1("sw"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("kin"));
        assert!(!is_valid_iso639_1("RW"));
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("rw"), Some("Kinyarwanda"));
        assert_eq!(language_name("sw"), Some("Swahili"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn native_names_resolve() {
        assert_eq!(native_name("rw"), Some("Ikinyarwanda"));
        assert_eq!(native_name("fr"), Some("Français"));
        assert_eq!(native_name("sw"), None);
    }
}
