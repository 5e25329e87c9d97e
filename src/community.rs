// SPDX-License-Identifier: PMPL-1.0-or-later

//! Community weather observations and their moderation queue
//!
//! Members submit a [`ReportDraft`]; it lands in the [`ModerationQueue`] as
//! a pending report until an operator approves or rejects it. Approved
//! reports join the public community feed as verified observations.

use crate::alerts::generate_id;
use crate::error::{MeteoError, Result};
use crate::types::{CommunityReport, Severity};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Observation types offered on the submission form.
pub const REPORT_TYPES: &[&str] = &[
    "Heavy Rain",
    "Drought",
    "Strong Wind",
    "Hail",
    "Temperature Anomaly",
    "Flooding",
    "Other",
];

/// Where a submitted report stands in moderation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// An operator's verdict on a pending report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn outcome(self) -> ReviewStatus {
        match self {
            Decision::Approve => ReviewStatus::Approved,
            Decision::Reject => ReviewStatus::Rejected,
        }
    }
}

/// A weather observation as typed into the submission form.
///
/// Type, location and description are required; the type must be one of
/// [`REPORT_TYPES`]. An unrated observation counts as medium severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub description: String,
    pub severity: Option<Severity>,
}

impl ReportDraft {
    /// Turn the draft into a pending report with a freshly generated id.
    pub fn submit(&self, user: &str, now: DateTime<Utc>) -> Result<PendingReport> {
        self.submit_with_id(generate_id()?, user, now)
    }

    pub fn submit_with_id(
        &self,
        id: String,
        user: &str,
        now: DateTime<Utc>,
    ) -> Result<PendingReport> {
        let kind = self.kind.trim();
        if kind.is_empty() {
            return Err(MeteoError::IncompleteReport { field: "type" });
        }
        if self.location.trim().is_empty() {
            return Err(MeteoError::IncompleteReport { field: "location" });
        }
        if self.description.trim().is_empty() {
            return Err(MeteoError::IncompleteReport {
                field: "description",
            });
        }
        if !REPORT_TYPES.contains(&kind) {
            return Err(MeteoError::UnknownReportType(kind.to_string()));
        }

        Ok(PendingReport {
            id,
            user: user.to_string(),
            kind: kind.to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            severity: self.severity.unwrap_or(Severity::Medium),
            timestamp: now,
            status: ReviewStatus::Pending,
        })
    }
}

/// A submitted observation awaiting, or past, moderation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReport {
    pub id: String,
    pub user: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub description: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub status: ReviewStatus,
}

impl PendingReport {
    /// The report as the community feed shows it once approved.
    pub fn to_community_report(&self) -> CommunityReport {
        CommunityReport {
            id: self.id.clone(),
            user: self.user.clone(),
            location: self.location.clone(),
            kind: self.kind.clone(),
            description: self.description.clone(),
            timestamp: self.timestamp,
            severity: self.severity,
            verified: self.status == ReviewStatus::Approved,
            likes: 0,
        }
    }
}

/// Submitted reports in arrival order. Nothing is ever removed; a decision
/// only moves a report out of [`ReviewStatus::Pending`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModerationQueue {
    reports: Vec<PendingReport>,
}

impl ModerationQueue {
    /// Fails with [`MeteoError::DuplicateId`] if two reports share an id.
    pub fn new(reports: Vec<PendingReport>) -> Result<Self> {
        let mut seen = HashSet::new();
        for report in &reports {
            if !seen.insert(report.id.as_str()) {
                return Err(MeteoError::DuplicateId(report.id.clone()));
            }
        }
        Ok(Self { reports })
    }

    pub fn reports(&self) -> &[PendingReport] {
        &self.reports
    }

    pub fn get(&self, id: &str) -> Option<&PendingReport> {
        self.reports.iter().find(|report| report.id == id)
    }

    /// Reports still waiting for a decision.
    pub fn pending(&self) -> Vec<&PendingReport> {
        self.reports
            .iter()
            .filter(|report| report.status == ReviewStatus::Pending)
            .collect()
    }

    /// Approved reports, ready for the community feed.
    pub fn approved(&self) -> Vec<CommunityReport> {
        self.reports
            .iter()
            .filter(|report| report.status == ReviewStatus::Approved)
            .map(PendingReport::to_community_report)
            .collect()
    }

    /// Validate `draft` and queue it for review.
    pub fn submit(
        &mut self,
        draft: &ReportDraft,
        user: &str,
        now: DateTime<Utc>,
    ) -> Result<&PendingReport> {
        let report = draft.submit(user, now)?;
        if self.get(&report.id).is_some() {
            return Err(MeteoError::DuplicateId(report.id));
        }
        info!(id = %report.id, kind = %report.kind, "community report submitted");
        let index = self.reports.len();
        self.reports.push(report);
        Ok(&self.reports[index])
    }

    /// Approve or reject the pending report `id`.
    ///
    /// A report is decided once; a second decision fails with
    /// [`MeteoError::AlreadyReviewed`].
    pub fn decide(&mut self, id: &str, decision: Decision) -> Result<&PendingReport> {
        let report = self
            .reports
            .iter_mut()
            .find(|report| report.id == id)
            .ok_or_else(|| MeteoError::NotFound {
                entity: "report",
                id: id.to_string(),
            })?;
        if report.status != ReviewStatus::Pending {
            return Err(MeteoError::AlreadyReviewed {
                id: report.id.clone(),
                status: report.status,
            });
        }
        report.status = decision.outcome();
        info!(id, status = %report.status, "community report reviewed");
        Ok(report)
    }
}
