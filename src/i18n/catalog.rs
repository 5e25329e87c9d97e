// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for MeteoConnect.
//!
//! Embeds the user-facing strings for every supported language as a
//! compile-time static table. Lookup is a linear scan of the key list, which
//! is fine for the handful of keys we carry.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add a `Lang::Xx => "xx"` arm to `Lang::code()`
//! 3. Add a `"xx" => Some(Lang::Xx)` arm to `Lang::from_code()`
//! 4. Create a `const XX: &[(&str, &str)]` table below
//! 5. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Fallback
//!
//! There is no cross-language fallback. A key missing from the requested
//! language resolves to the caller's fallback text, or to the key itself.

use crate::error::{MeteoError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported display languages.
///
/// Each variant maps to an ISO 639-1 two-letter code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Rw,
    Fr,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Rw => "rw",
            Lang::Fr => "fr",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "rw" => Some(Lang::Rw),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Rw, Lang::Fr]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = MeteoError;

    fn from_str(code: &str) -> Result<Self> {
        Lang::from_code(code).ok_or_else(|| MeteoError::InvalidLanguage(code.to_string()))
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Resolve `key` for a language given by its code.
///
/// Unknown codes are an error rather than a silent default. For a known
/// code the result is the catalog entry, else `fallback`, else `key`. An
/// empty fallback counts as no fallback.
///
/// # Examples
///
/// ```
/// use meteoconnect::i18n::resolve;
/// assert_eq!(resolve("en", "wind_speed", Some("Wind")).unwrap(), "Wind Speed");
/// assert_eq!(resolve("en", "nonexistent_key", Some("Default")).unwrap(), "Default");
/// assert_eq!(resolve("fr", "nonexistent_key", None).unwrap(), "nonexistent_key");
/// assert_eq!(resolve("en", "nonexistent_key", Some("")).unwrap(), "nonexistent_key");
/// assert!(resolve("xx", "wind_speed", None).is_err());
/// ```
pub fn resolve<'a>(code: &str, key: &'a str, fallback: Option<&'a str>) -> Result<&'a str> {
    let lang =
        Lang::from_code(code).ok_or_else(|| MeteoError::UnsupportedLanguage(code.to_string()))?;
    Ok(match fallback.filter(|f| !f.is_empty()) {
        Some(fallback) => t_or(lang, key, fallback),
        None => t_or_key(lang, key),
    })
}

/// Look up a translation key in the specified language.
///
/// Returns `None` when the language's catalog has no entry for `key`.
pub fn t(lang: Lang, key: &str) -> Option<&'static str> {
    catalog_for(lang)
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(_, v)| v)
}

/// Returns the translation, or `fallback` when the key is missing, or the
/// key itself when `fallback` is empty too.
pub fn t_or<'a>(lang: Lang, key: &'a str, fallback: &'a str) -> &'a str {
    match t(lang, key) {
        Some(text) => text,
        None if fallback.is_empty() => key,
        None => fallback,
    }
}

/// Returns the translation, or the key itself when it is missing.
pub fn t_or_key(lang: Lang, key: &str) -> &str {
    t(lang, key).unwrap_or(key)
}

/// Keys defined in the language's catalog, in catalog order.
pub fn keys(lang: Lang) -> impl Iterator<Item = &'static str> {
    catalog_for(lang).iter().map(|&(k, _)| k)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Rw => RW,
        Lang::Fr => FR,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("welcome_title", "MeteoConnect Rwanda"),
    ("welcome_subtitle", "Real-time weather information and alerts for Rwanda"),
    // Navigation
    ("dashboard", "Dashboard"),
    ("forecast", "Forecast"),
    ("alerts", "Alerts"),
    ("map", "Map"),
    ("community", "Community"),
    ("admin", "Admin"),
    // Weather stats
    ("temperature", "Temperature"),
    ("humidity", "Humidity"),
    ("wind_speed", "Wind Speed"),
    ("today_forecast", "Today's Forecast"),
    // Account
    ("settings", "Settings"),
    ("logout", "Logout"),
    ("login", "Login"),
];

// ─── Kinyarwanda ────────────────────────────────────────────────────

const RW: &[(&str, &str)] = &[
    ("welcome_title", "MeteoConnect Rwanda"),
    ("welcome_subtitle", "Amakuru y'ikirere n'amatangazo muri Rwanda"),
    ("dashboard", "Imbonerahamwe"),
    ("forecast", "Iteganyo"),
    ("alerts", "Amatangazo"),
    ("map", "Ikarita"),
    ("community", "Umuryango"),
    ("admin", "Ubuyobozi"),
    ("temperature", "Ubushyuhe"),
    ("humidity", "Ubushuhe"),
    ("wind_speed", "Umuvuduko w'umuyaga"),
    ("today_forecast", "Iteganyo ry'uyumunsi"),
    ("settings", "Amahitamo"),
    ("logout", "Gusohoka"),
    ("login", "Kwinjira"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("welcome_title", "MeteoConnect Rwanda"),
    (
        "welcome_subtitle",
        "Informations météorologiques et alertes en temps réel pour le Rwanda",
    ),
    ("dashboard", "Tableau de bord"),
    ("forecast", "Prévisions"),
    ("alerts", "Alertes"),
    ("map", "Carte"),
    ("community", "Communauté"),
    ("admin", "Administration"),
    ("temperature", "Température"),
    ("humidity", "Humidité"),
    ("wind_speed", "Vitesse du vent"),
    ("today_forecast", "Prévisions d'aujourd'hui"),
    ("settings", "Paramètres"),
    ("logout", "Déconnexion"),
    ("login", "Connexion"),
];
