// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for translation lookup and language switching

use meteoconnect::i18n::{self, Lang, Localizer};
use meteoconnect::MeteoError;

#[test]
fn test_keys_shared_by_every_language_resolve_non_empty() {
    let shared: Vec<&str> = i18n::keys(Lang::En)
        .filter(|key| Lang::all().iter().all(|lang| i18n::t(*lang, key).is_some()))
        .collect();
    assert!(!shared.is_empty());

    for lang in Lang::all() {
        for key in &shared {
            let text = i18n::resolve(lang.code(), key, None).expect("supported language");
            assert!(!text.is_empty(), "{} {} resolved empty", lang, key);
        }
    }
}

#[test]
fn test_missing_key_falls_back_to_caller_text_then_key() {
    for lang in Lang::all() {
        assert_eq!(
            i18n::resolve(lang.code(), "nonexistent_key", Some("Default")).unwrap(),
            "Default"
        );
        assert_eq!(
            i18n::resolve(lang.code(), "nonexistent_key", None).unwrap(),
            "nonexistent_key"
        );
    }
}

#[test]
fn test_wind_speed_examples() {
    assert_eq!(i18n::resolve("en", "wind_speed", Some("Wind")).unwrap(), "Wind Speed");
    assert_eq!(
        i18n::resolve("rw", "wind_speed", Some("Wind")).unwrap(),
        "Umuvuduko w'umuyaga"
    );
}

#[test]
fn test_resolve_is_idempotent() {
    let first = i18n::resolve("fr", "today_forecast", None).unwrap();
    let second = i18n::resolve("fr", "today_forecast", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unsupported_language_is_reported() {
    let err = i18n::resolve("sw", "dashboard", Some("Dashboard")).unwrap_err();
    assert_eq!(err, MeteoError::UnsupportedLanguage("sw".to_string()));
    // Swahili is a real language, just not translated yet.
    assert!(i18n::is_valid_iso639_1("sw"));
}

#[test]
fn test_localizer_set_language_validates() {
    let mut l10n = Localizer::default();
    assert_eq!(l10n.text("dashboard", "Dashboard"), "Dashboard");

    l10n.set_language("rw").unwrap();
    assert_eq!(l10n.text("dashboard", "Dashboard"), "Imbonerahamwe");

    assert_eq!(
        l10n.set_language("english"),
        Err(MeteoError::InvalidLanguage("english".to_string()))
    );
    assert_eq!(l10n.lang(), Lang::Rw);
}

#[test]
fn test_two_localizers_are_independent() {
    let en = Localizer::new(Lang::En);
    let mut fr = Localizer::new(Lang::En);
    fr.set_language("fr").unwrap();
    assert_eq!(en.text("map", "Map"), "Map");
    assert_eq!(fr.text("map", "Map"), "Carte");
}
