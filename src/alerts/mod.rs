// SPDX-License-Identifier: PMPL-1.0-or-later

//! Alert filtering and derivation
//!
//! Pure functions over slices of [`AlertRecord`]: the visible subset for a
//! set of [`FilterCriteria`], the active count, and the dismiss transition.
//! [`AlertFeed`] wraps the same operations around an owned session
//! collection.

mod draft;
mod feed;

pub(crate) use draft::generate_id;
pub use draft::AlertDraft;
pub use feed::AlertFeed;

use crate::error::{MeteoError, Result};
use crate::types::{AlertCategory, AlertRecord, Region};
use std::str::FromStr;
use tracing::debug;

/// Either every value, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selector::All, Selector::Only)
    }
}

/// Parses exactly `"all"` as [`Selector::All`], anything else as a value.
///
/// Values must name a member of the closed set exactly; a near miss such as
/// `"NORTHERN PROVINCE"` is rejected rather than widened to a match.
impl<T: FromStr<Err = MeteoError>> FromStr for Selector<T> {
    type Err = MeteoError;

    fn from_str(value: &str) -> Result<Self> {
        if value == "all" {
            Ok(Selector::All)
        } else {
            value.parse().map(Selector::Only)
        }
    }
}

/// Search text, region and category used to narrow an alert list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and message
    pub search: String,
    pub region: Selector<Region>,
    pub category: Selector<AlertCategory>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &AlertRecord) -> bool {
        self.matches_search(record)
            && self.region.matches(&record.region)
            && self.category.matches(&record.category)
    }

    fn matches_search(&self, record: &AlertRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.title.to_lowercase().contains(&needle)
            || record.message.to_lowercase().contains(&needle)
    }
}

/// Records matching `criteria`, in their original relative order.
pub fn filter(records: &[AlertRecord], criteria: &FilterCriteria) -> Vec<AlertRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Number of active records in `records`.
///
/// Pass the already-filtered list; the count is recomputed on every call.
pub fn active_count(records: &[AlertRecord]) -> usize {
    records.iter().filter(|record| record.active).count()
}

/// Copy of `records` with the alert `id` marked inactive.
///
/// An unknown id returns the input unchanged.
pub fn dismiss(records: &[AlertRecord], id: &str) -> Vec<AlertRecord> {
    if !records.iter().any(|record| record.id == id) {
        debug!(id, "dismiss ignored: no such alert");
    }
    records
        .iter()
        .map(|record| {
            if record.id == id {
                AlertRecord {
                    active: false,
                    ..record.clone()
                }
            } else {
                record.clone()
            }
        })
        .collect()
}

/// Like [`dismiss`], but an unknown id is reported as [`MeteoError::NotFound`].
pub fn try_dismiss(records: &[AlertRecord], id: &str) -> Result<Vec<AlertRecord>> {
    if records.iter().any(|record| record.id == id) {
        Ok(dismiss(records, id))
    } else {
        Err(MeteoError::NotFound {
            entity: "alert",
            id: id.to_string(),
        })
    }
}
