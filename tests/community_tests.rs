// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for community report submission and moderation

use chrono::Utc;
use meteoconnect::community::{
    Decision, ModerationQueue, ReportDraft, ReviewStatus, REPORT_TYPES,
};
use meteoconnect::fixtures;
use meteoconnect::types::Severity;
use meteoconnect::MeteoError;

fn queue() -> ModerationQueue {
    ModerationQueue::new(fixtures::pending_reports()).unwrap()
}

#[test]
fn test_submitted_report_waits_behind_existing_queue() {
    let mut queue = queue();
    let draft = ReportDraft {
        kind: "Flooding".to_string(),
        location: "Nyabugogo, Kigali".to_string(),
        description: "Water over the road near the bus park.".to_string(),
        severity: Some(Severity::High),
    };
    let id = queue
        .submit(&draft, "Claudine", Utc::now())
        .unwrap()
        .id
        .clone();

    let pending: Vec<&str> = queue.pending().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(pending, ["1", "2", id.as_str()]);
    assert_eq!(queue.get(&id).map(|r| r.severity), Some(Severity::High));
}

#[test]
fn test_incomplete_submission_leaves_queue_unchanged() {
    let mut queue = queue();
    let draft = ReportDraft {
        kind: "Drought".to_string(),
        ..ReportDraft::default()
    };
    assert_eq!(
        queue.submit(&draft, "Claudine", Utc::now()).unwrap_err(),
        MeteoError::IncompleteReport { field: "location" }
    );
    assert_eq!(queue.reports().len(), 2);
}

#[test]
fn test_approve_and_reject_split_the_queue() {
    let mut queue = queue();
    queue.decide("1", Decision::Approve).unwrap();
    queue.decide("2", Decision::Reject).unwrap();

    assert!(queue.pending().is_empty());
    let published = queue.approved();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].user, "Marie Uwimana");
    assert!(published[0].verified);
    assert_eq!(
        queue.get("2").map(|r| r.status),
        Some(ReviewStatus::Rejected)
    );
}

#[test]
fn test_second_decision_is_refused() {
    let mut queue = queue();
    queue.decide("2", Decision::Approve).unwrap();
    let err = queue.decide("2", Decision::Reject).unwrap_err();
    assert_eq!(err.to_string(), "report 2 was already approved");
}

#[test]
fn test_duplicate_report_ids_are_rejected() {
    let mut reports = fixtures::pending_reports();
    reports[1].id = "1".to_string();
    assert_eq!(
        ModerationQueue::new(reports),
        Err(MeteoError::DuplicateId("1".to_string()))
    );
}

#[test]
fn test_form_offers_seven_types() {
    assert_eq!(REPORT_TYPES.len(), 7);
    assert!(REPORT_TYPES.contains(&"Other"));
}
