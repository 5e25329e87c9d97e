// SPDX-License-Identifier: PMPL-1.0-or-later

//! MeteoConnect: weather alerts and forecasts for Rwanda.
//!
//! This crate holds the logic behind the MeteoConnect dashboards:
//!
//! 1. **i18n**: static translation catalogs for English, Kinyarwanda and
//!    French, with key → fallback → key resolution and an explicit
//!    [`i18n::Localizer`] context.
//! 2. **alerts**: stable filtering of alert records by search text, region
//!    and category, active counts, and the dismiss transition.
//! 3. **community**: member-submitted observations and the moderation queue
//!    that approves or rejects them.
//! 4. **fixtures**: the sample alert, forecast and community datasets the
//!    service currently runs on.

pub mod alerts;
pub mod community;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod i18n;
pub mod report;
pub mod types;

pub use error::{MeteoError, Result};
