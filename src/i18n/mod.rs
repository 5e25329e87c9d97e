// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for MeteoConnect.
//!
//! Provides a data-driven translation system with ISO 639-1 language code
//! validation.
//!
//! ## Supported languages
//!
//! | Code | Language    | Native name  |
//! |------|-------------|--------------|
//! | en   | English     | English      |
//! | rw   | Kinyarwanda | Ikinyarwanda |
//! | fr   | French      | Français     |
//!
//! ## Design
//!
//! Translation keys are flat snake_case identifiers: `"wind_speed"`,
//! `"today_forecast"`. A lookup returns the catalog entry for the requested
//! language, else the caller's fallback text, else the key string itself
//! (fail-open, never panics). Unknown language codes are rejected.
//!
//! The catalog is embedded at compile time as static data. The current
//! language lives in a [`Localizer`] value passed explicitly to renderers.

mod catalog;
mod iso639;
mod localizer;

pub use catalog::{keys, resolve, t, t_or, t_or_key, Lang};
pub use iso639::{is_valid_iso639_1, language_name, native_name};
pub use localizer::Localizer;
