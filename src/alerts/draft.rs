// SPDX-License-Identifier: PMPL-1.0-or-later

//! Drafting new alerts from the admin panel.

use crate::error::{MeteoError, Result};
use crate::types::{AlertCategory, AlertRecord, Channel, Region, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An alert as entered by an operator, before it has an id or timestamp.
///
/// Title, message and region are required. Severity defaults to medium,
/// category to advisory, and an empty channel set to web only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDraft {
    pub title: String,
    pub message: String,
    pub region: Option<Region>,
    pub severity: Option<Severity>,
    pub category: Option<AlertCategory>,
    #[serde(default)]
    pub channels: BTreeSet<Channel>,
}

impl AlertDraft {
    /// Turn the draft into an active alert with a freshly generated id.
    pub fn issue(&self, now: DateTime<Utc>) -> Result<AlertRecord> {
        self.issue_with_id(generate_id()?, now)
    }

    pub fn issue_with_id(&self, id: String, now: DateTime<Utc>) -> Result<AlertRecord> {
        if self.title.trim().is_empty() {
            return Err(MeteoError::IncompleteDraft { field: "title" });
        }
        if self.message.trim().is_empty() {
            return Err(MeteoError::IncompleteDraft { field: "message" });
        }
        let region = self
            .region
            .ok_or(MeteoError::IncompleteDraft { field: "region" })?;

        let channels = if self.channels.is_empty() {
            BTreeSet::from([Channel::Web])
        } else {
            self.channels.clone()
        };

        Ok(AlertRecord {
            id,
            category: self.category.unwrap_or(AlertCategory::Advisory),
            severity: self.severity.unwrap_or(Severity::Medium),
            title: self.title.trim().to_string(),
            message: self.message.trim().to_string(),
            region,
            timestamp: now,
            active: true,
            channels,
        })
    }
}

/// 64 random bits, hex encoded.
pub(crate) fn generate_id() -> Result<String> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).map_err(|e| MeteoError::IdGeneration(e.to_string()))?;
    Ok(hex::encode(bytes))
}
