// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for alert filtering, counting and dismissal

use chrono::Utc;
use meteoconnect::alerts::{self, AlertDraft, AlertFeed, FilterCriteria, Selector};
use meteoconnect::fixtures::{self, DataSeed};
use meteoconnect::types::*;
use meteoconnect::MeteoError;

fn region_only(region: Region) -> FilterCriteria {
    FilterCriteria {
        region: Selector::Only(region),
        ..FilterCriteria::default()
    }
}

#[test]
fn test_default_criteria_return_input_unchanged() {
    for seed in [DataSeed::Standard, DataSeed::Banner, DataSeed::Empty] {
        let records = seed.alerts();
        let visible = alerts::filter(&records, &FilterCriteria::default());
        assert_eq!(visible, records, "{:?} changed under default criteria", seed);
    }
}

#[test]
fn test_northern_province_example() {
    let records = fixtures::sample_alerts();
    let visible = alerts::filter(&records, &region_only(Region::Northern));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Heavy Rain Warning");
}

#[test]
fn test_every_region_without_alerts_filters_to_empty() {
    let records = fixtures::sample_alerts();
    for region in Region::all() {
        if records.iter().all(|r| r.region != *region) {
            assert!(alerts::filter(&records, &region_only(*region)).is_empty());
        }
    }
}

#[test]
fn test_region_selector_matches_display_name_exactly() {
    let records = fixtures::sample_alerts();
    let exact: Selector<Region> = "Northern Province".parse().unwrap();
    let visible = alerts::filter(
        &records,
        &FilterCriteria {
            region: exact,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(visible.len(), 1);

    for near_miss in ["NORTHERN PROVINCE", "northern province", "north", "Musanze"] {
        assert_eq!(
            near_miss.parse::<Selector<Region>>(),
            Err(MeteoError::UnknownRegion(near_miss.to_string()))
        );
    }
}

#[test]
fn test_filter_is_idempotent_for_many_criteria() {
    let records = fixtures::sample_alerts();
    let searches = ["", "rain", "STAY", "zzz"];
    let categories = [
        Selector::All,
        Selector::Only(AlertCategory::Warning),
        Selector::Only(AlertCategory::Storm),
    ];
    for search in searches {
        for category in categories {
            let criteria = FilterCriteria {
                search: search.to_string(),
                category,
                ..FilterCriteria::default()
            };
            let once = alerts::filter(&records, &criteria);
            assert_eq!(alerts::filter(&once, &criteria), once);
        }
    }
}

#[test]
fn test_filter_preserves_relative_order() {
    let records = fixtures::sample_alerts();
    let criteria = FilterCriteria {
        search: "stay".to_string(),
        ..FilterCriteria::default()
    };
    let ids: Vec<String> = alerts::filter(&records, &criteria)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, ["2", "3"]);
}

#[test]
fn test_active_count_on_filtered_list() {
    let records = alerts::dismiss(&fixtures::sample_alerts(), "3");
    assert_eq!(alerts::active_count(&records), 2);

    let kigali = alerts::filter(&records, &region_only(Region::KigaliCity));
    assert_eq!(kigali.len(), 1);
    assert_eq!(alerts::active_count(&kigali), 0);
}

#[test]
fn test_dismiss_twice_equals_once() {
    let records = fixtures::sample_alerts();
    let once = alerts::dismiss(&records, "2");
    assert_eq!(alerts::dismiss(&once, "2"), once);
    assert_eq!(once.len(), records.len());
    assert!(once.iter().filter(|r| r.id != "2").all(|r| r.active));
}

#[test]
fn test_dismiss_unknown_is_silent_but_strict_variant_errors() {
    let records = fixtures::sample_alerts();
    assert_eq!(alerts::dismiss(&records, "does-not-exist"), records);
    assert!(matches!(
        alerts::try_dismiss(&records, "does-not-exist"),
        Err(MeteoError::NotFound { entity: "alert", .. })
    ));
}

#[test]
fn test_feed_session_flow() {
    let mut feed = AlertFeed::from_seed(DataSeed::Banner);
    assert_eq!(feed.banner().len(), 2);

    let draft = AlertDraft {
        title: "River Flood Warning".to_string(),
        message: "Nyabarongo river above flood stage.".to_string(),
        region: Some(Region::Southern),
        severity: Some(Severity::High),
        category: Some(AlertCategory::Flood),
        channels: [Channel::Sms, Channel::Ussd].into_iter().collect(),
    };
    let id = feed.publish(&draft, Utc::now()).unwrap().id.clone();

    let floods = feed.visible(&FilterCriteria {
        category: Selector::Only(AlertCategory::Flood),
        ..FilterCriteria::default()
    });
    assert_eq!(floods.len(), 1);
    assert_eq!(floods[0].id, id);

    assert!(feed.dismiss(&id));
    assert_eq!(feed.active_count(&FilterCriteria::default()), 2);
    assert_eq!(feed.records().len(), 3);
}

#[test]
fn test_incomplete_draft_is_rejected() {
    let mut feed = AlertFeed::from_seed(DataSeed::Empty);
    let draft = AlertDraft {
        title: "No region".to_string(),
        message: "Somewhere".to_string(),
        ..AlertDraft::default()
    };
    assert_eq!(
        feed.publish(&draft, Utc::now()).unwrap_err(),
        MeteoError::IncompleteDraft { field: "region" }
    );
    assert!(feed.records().is_empty());
}
