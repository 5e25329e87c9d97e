// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup configuration: initial language and alert data seed.
//!
//! Sources, lowest precedence first: built-in defaults, an optional JSON or
//! YAML file, then environment variables. Command-line flags are applied on
//! top by the binary.
//!
//! | Variable            | Description            | Default    |
//! |---------------------|------------------------|------------|
//! | `METEOCONNECT_LANG` | Initial language code  | `en`       |
//! | `METEOCONNECT_SEED` | Initial alert data set | `standard` |

use crate::fixtures::DataSeed;
use crate::i18n::Lang;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json;
use serde_yaml;
use std::env;
use std::fs;
use std::path::Path;

pub const LANG_ENV: &str = "METEOCONNECT_LANG";
pub const SEED_ENV: &str = "METEOCONNECT_SEED";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Lang,
    pub seed: DataSeed,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display())),
            _ => Err(anyhow!(
                "unsupported config extension for {}",
                path.display()
            )),
        }
    }

    /// Defaults, overlaid with `path` if given, then the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_overrides(env::var(LANG_ENV).ok(), env::var(SEED_ENV).ok())
    }

    /// Apply string overrides, ignoring blank values.
    pub fn with_overrides(mut self, lang: Option<String>, seed: Option<String>) -> Result<Self> {
        if let Some(code) = lang.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            self.language = code
                .parse()
                .with_context(|| format!("{} override", LANG_ENV))?;
        }
        if let Some(value) = seed.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            self.seed = DataSeed::parse(value)
                .ok_or_else(|| anyhow!("{} override: unknown seed {:?}", SEED_ENV, value))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_and_blank_is_ignored() {
        let config = Config::default()
            .with_overrides(Some("rw".to_string()), Some("  ".to_string()))
            .unwrap();
        assert_eq!(config.language, Lang::Rw);
        assert_eq!(config.seed, DataSeed::Standard);
    }

    #[test]
    fn bad_override_is_an_error() {
        assert!(Config::default()
            .with_overrides(Some("xx".to_string()), None)
            .is_err());
        assert!(Config::default()
            .with_overrides(None, Some("huge".to_string()))
            .is_err());
    }
}
