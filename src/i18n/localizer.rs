// SPDX-License-Identifier: PMPL-1.0-or-later

//! Explicit language context handed to everything that renders text.

use super::catalog::{t_or, Lang};
use crate::error::{MeteoError, Result};
use tracing::debug;

/// Holds the current display language.
///
/// There is no process-wide language: callers construct one at startup and
/// pass it down to each renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    lang: Lang,
}

impl Localizer {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Switch to the language named by `code`.
    ///
    /// Unknown codes fail with [`MeteoError::InvalidLanguage`] and leave the
    /// current language untouched.
    pub fn set_language(&mut self, code: &str) -> Result<()> {
        let lang =
            Lang::from_code(code).ok_or_else(|| MeteoError::InvalidLanguage(code.to_string()))?;
        debug!(from = %self.lang, to = %lang, "switching display language");
        self.lang = lang;
        Ok(())
    }

    /// Translation for `key` in the current language, or `fallback`.
    pub fn text<'a>(&self, key: &'a str, fallback: &'a str) -> &'a str {
        t_or(self.lang, key, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        let l10n = Localizer::default();
        assert_eq!(l10n.lang(), Lang::En);
        assert_eq!(l10n.text("humidity", "Humidity"), "Humidity");
    }

    #[test]
    fn set_language_switches_lookups() {
        let mut l10n = Localizer::default();
        l10n.set_language("fr").unwrap();
        assert_eq!(l10n.lang(), Lang::Fr);
        assert_eq!(l10n.text("humidity", "Humidity"), "Humidité");
        assert_eq!(l10n.text("no_alerts", ""), "no_alerts");
    }

    #[test]
    fn invalid_language_is_rejected_and_state_kept() {
        let mut l10n = Localizer::new(Lang::Rw);
        let err = l10n.set_language("sw").unwrap_err();
        assert_eq!(err, MeteoError::InvalidLanguage("sw".to_string()));
        assert_eq!(l10n.lang(), Lang::Rw);
    }
}
