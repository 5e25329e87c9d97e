// SPDX-License-Identifier: PMPL-1.0-or-later

//! The alert collection a session works against.

use super::{active_count, filter, AlertDraft, FilterCriteria};
use crate::error::{MeteoError, Result};
use crate::fixtures::DataSeed;
use crate::types::AlertRecord;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info};

/// Owned, in-memory list of alerts with unique ids.
///
/// Records are never removed; the only mutation besides publishing is the
/// active → inactive dismiss transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFeed {
    records: Vec<AlertRecord>,
}

impl AlertFeed {
    /// Fails with [`MeteoError::DuplicateId`] if two records share an id.
    pub fn new(records: Vec<AlertRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(MeteoError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn from_seed(seed: DataSeed) -> Self {
        // Fixture ids are unique by construction.
        Self {
            records: seed.alerts(),
        }
    }

    pub fn records(&self) -> &[AlertRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&AlertRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<AlertRecord> {
        filter(&self.records, criteria)
    }

    /// Active alerts among those matching `criteria`.
    pub fn active_count(&self, criteria: &FilterCriteria) -> usize {
        active_count(&self.visible(criteria))
    }

    /// Active alerts, as the dashboard banner lists them.
    pub fn banner(&self) -> Vec<&AlertRecord> {
        self.records.iter().filter(|record| record.active).collect()
    }

    /// Mark `id` inactive. Returns `false` when no such alert exists, in
    /// which case nothing changes.
    pub fn dismiss(&mut self, id: &str) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.active = false;
                debug!(id, "alert dismissed");
                true
            }
            None => {
                debug!(id, "dismiss ignored: no such alert");
                false
            }
        }
    }

    /// Issue `draft` and append it to the feed.
    pub fn publish(&mut self, draft: &AlertDraft, now: DateTime<Utc>) -> Result<&AlertRecord> {
        let record = draft.issue(now)?;
        self.push(record)
    }

    pub fn push(&mut self, record: AlertRecord) -> Result<&AlertRecord> {
        if self.get(&record.id).is_some() {
            return Err(MeteoError::DuplicateId(record.id));
        }
        info!(
            id = %record.id,
            region = %record.region,
            severity = %record.severity,
            "alert published"
        );
        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Selector;
    use crate::fixtures::sample_alerts;
    use crate::types::Region;

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = sample_alerts();
        records[2].id = "1".to_string();
        assert_eq!(
            AlertFeed::new(records),
            Err(MeteoError::DuplicateId("1".to_string()))
        );
    }

    #[test]
    fn dismiss_hides_from_banner_but_keeps_record() {
        let mut feed = AlertFeed::from_seed(DataSeed::Standard);
        assert_eq!(feed.banner().len(), 3);
        assert!(feed.dismiss("1"));
        assert!(feed.dismiss("1"));
        assert!(!feed.dismiss("missing"));
        assert_eq!(feed.banner().len(), 2);
        assert_eq!(feed.records().len(), 3);
        assert_eq!(feed.active_count(&FilterCriteria::default()), 2);
    }

    #[test]
    fn active_count_follows_filter() {
        let feed = AlertFeed::from_seed(DataSeed::Standard);
        let criteria = FilterCriteria {
            region: Selector::Only(Region::Eastern),
            ..FilterCriteria::default()
        };
        assert_eq!(feed.active_count(&criteria), 1);
    }

    #[test]
    fn publish_appends_active_alert() {
        let mut feed = AlertFeed::from_seed(DataSeed::Empty);
        let draft = AlertDraft {
            title: "Hail".to_string(),
            message: "Hail expected in Musanze.".to_string(),
            region: Some(Region::Northern),
            ..AlertDraft::default()
        };
        let id = feed.publish(&draft, Utc::now()).unwrap().id.clone();
        assert_eq!(feed.banner().len(), 1);
        assert_eq!(feed.get(&id).map(|r| r.region), Some(Region::Northern));
    }

    #[test]
    fn push_rejects_existing_id() {
        let mut feed = AlertFeed::from_seed(DataSeed::Standard);
        let copy = feed.records()[0].clone();
        assert_eq!(feed.push(copy), Err(MeteoError::DuplicateId("1".to_string())));
    }
}
