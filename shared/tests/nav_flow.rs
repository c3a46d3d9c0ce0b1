//! Navigation Flow Tests
//!
//! These tests drive the shared derivations the way the UI does: decode API
//! payloads, then derive the navigation lists and the alerts page from them.

use std::rc::Rc;

use chrono::{TimeZone, Utc};
use serde_json::json;

use beacon_shared::alerts::{bucket, rollup, window, HISTORY_ITEMS};
use beacon_shared::alerts::history::SlotEmphasis;
use beacon_shared::{
    AlertRecord, AlertRollup, CollapseState, FetchState, FetchStatus, GroupedSearchIndex,
    ListAffordance, ListResponse, MemoryStore, NavConfig, SavedSearch, SharedStore,
};

// Test utilities
fn saved_searches() -> Vec<SavedSearch> {
    let body = json!({
        "data": [
            { "_id": "s1", "name": "Prod errors", "tags": ["prod"], "alerts": [{ "_id": "a1", "state": "ALERT" }] },
            { "_id": "s2", "name": "Checkout latency", "tags": ["prod", "payments"], "alerts": [{ "state": "OK" }] },
            { "_id": "s3", "name": "Scratch", "tags": [] }
        ]
    });
    let response: ListResponse<SavedSearch> = serde_json::from_value(body).unwrap();
    response.data
}

fn alerts() -> Vec<AlertRecord> {
    let body = json!({
        "data": [
            {
                "_id": "a1",
                "source": "LOG",
                "logView": { "_id": "s1", "name": "Prod errors", "tags": ["prod"] },
                "type": "presence",
                "threshold": 10,
                "channel": { "type": "webhook", "webhookId": "w1" },
                "state": "ALERT",
                "history": [
                    { "createdAt": "2024-04-29T15:04:00Z", "lastValues": [{ "startTime": "2024-04-29T15:00:00Z", "count": 12 }], "state": "ALERT" },
                    { "createdAt": "2024-04-29T14:04:00Z", "lastValues": [], "state": "OK" }
                ]
            },
            {
                "_id": "a2",
                "source": "CHART",
                "chartId": "c1",
                "dashboard": { "_id": "d1", "name": "Checkout", "charts": [{ "id": "c1", "name": "Latency" }] },
                "type": "absence",
                "threshold": 3,
                "state": "OK"
            },
            { "_id": "a3", "source": "LOG", "state": "DISABLED" }
        ]
    });
    let response: ListResponse<AlertRecord> = serde_json::from_value(body).unwrap();
    response.data
}

#[test]
fn test_saved_search_list_groups_and_collapse() {
    let searches = saved_searches();
    let store: SharedStore = Rc::new(MemoryStore::new());
    let config = NavConfig::default();

    let index = GroupedSearchIndex::new(&searches).with_untagged_label(config.labels.saved_searches.clone());
    let mut collapse = CollapseState::load(store.clone(), "saved-searches");
    collapse.toggle("prod").unwrap();

    let view = index.view("", &collapse);
    let names: Vec<_> = view.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["prod", "payments", "Saved Searches"]);
    assert!(!view.groups[0].expanded);
    assert!(view.groups[1].expanded);
    assert_eq!(view.affordance, ListAffordance::Items);

    // A query forces groups open; the stored state is untouched
    let searching = index.view("prod", &collapse);
    assert!(searching.groups.iter().all(|g| g.expanded));
    assert_eq!(searching.groups[0].items[0].id, "s1");
    assert!(CollapseState::load(store, "saved-searches").is_collapsed("prod"));

    let nothing = index.view("zzzzzzzz", &collapse);
    assert_eq!(nothing.affordance, ListAffordance::NoResults("zzzzzzzz".to_string()));
    assert!(nothing.groups.is_empty());
}

#[test]
fn test_per_link_indicator() {
    let searches = saved_searches();

    assert_eq!(rollup(&searches[0].alerts), AlertRollup::Alarming);
    assert_eq!(rollup(&searches[1].alerts), AlertRollup::Ok);
    assert_eq!(rollup(&searches[2].alerts), AlertRollup::None);
}

#[test]
fn test_alerts_page_derivations() {
    let state = FetchState::from_result::<String>(Ok(alerts()));
    assert_eq!(state.status(), FetchStatus::Loaded);

    let alerts = state.items();
    assert_eq!(rollup(alerts), AlertRollup::Alarming);

    let buckets = bucket(alerts);
    let sections = buckets.sections(false);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].alerts[0].id.as_deref(), Some("a1"));
    assert_eq!(sections[1].alerts[0].name().to_string(), "Checkout › Latency");
    assert_eq!(buckets.sections(true)[2].alerts[0].name().to_string(), "–");

    assert_eq!(alerts[0].condition(), "If count is over 10");
    assert_eq!(alerts[1].condition(), "If value is under 3");
    assert_eq!(alerts[0].channel_label(), Some("Notify via Slack Webhook"));
    assert_eq!(alerts[1].href().as_deref(), Some("/dashboards/d1?highlightedChartId=c1"));
}

#[test]
fn test_history_timeline() {
    let alerts = alerts();
    let timeline = window(&alerts[0].history, HISTORY_ITEMS);

    assert_eq!(timeline.slots().len(), HISTORY_ITEMS);
    assert_eq!(timeline.filled(), 2);

    let emphasis: Vec<_> = timeline.slots()[HISTORY_ITEMS - 2..]
        .iter()
        .map(|slot| slot.emphasis())
        .collect();
    assert_eq!(emphasis, vec![SlotEmphasis::Normal, SlotEmphasis::Alarm]);

    let now = Utc.with_ymd_and_hms(2024, 4, 29, 18, 0, 0).unwrap();
    assert_eq!(timeline.slots()[0].label(&now), "No data");
    assert_eq!(timeline.slots()[HISTORY_ITEMS - 1].label(&now), "12 today at 3:04 PM");
    assert_eq!(timeline.slots()[HISTORY_ITEMS - 2].label(&now), "0 today at 2:04 PM");
}
