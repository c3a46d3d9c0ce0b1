//! Navigation entities
//!
//! Saved searches and dashboards as served by the API. Both are listed in the
//! side navigation through the [`NamedEntity`] trait, which is all the search
//! index needs to know about them.

use serde::{Deserialize, Serialize};

use crate::alerts::AlertState;

/// Anything that can be listed, searched and grouped in a navigation panel
pub trait NamedEntity {
    /// Stable, unique identity
    fn id(&self) -> &str;

    /// Display name (not necessarily unique, may be empty)
    fn name(&self) -> &str;

    /// Tags the entity is grouped under
    fn tags(&self) -> &[String];
}

/// Alert attached to a saved search, as embedded in the saved search payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAlert {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub state: AlertState,
}

/// A saved log search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<LinkedAlert>,
}

impl NamedEntity for SavedSearch {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Chart reference inside a dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A saved dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDashboard {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub charts: Vec<ChartRef>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SavedDashboard {
    /// Look up a chart name by chart id
    pub fn chart_name(&self, chart_id: &str) -> Option<&str> {
        self.charts
            .iter()
            .find(|chart| chart.id == chart_id)
            .map(|chart| chart.name.as_str())
    }
}

impl NamedEntity for SavedDashboard {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_search_tolerates_missing_fields() {
        let search: SavedSearch = serde_json::from_str(r#"{"_id": "abc"}"#).unwrap();

        assert_eq!(search.id(), "abc");
        assert_eq!(search.name(), "");
        assert!(search.tags().is_empty());
        assert!(search.alerts.is_empty());
    }

    #[test]
    fn test_saved_search_with_alerts() {
        let json = r#"{
            "_id": "s1",
            "name": "Errors",
            "query": "level:err",
            "tags": ["prod"],
            "alerts": [{"_id": "a1", "state": "ALERT"}, {"state": "OK"}]
        }"#;
        let search: SavedSearch = serde_json::from_str(json).unwrap();

        assert_eq!(search.tags, vec!["prod".to_string()]);
        assert_eq!(search.alerts.len(), 2);
        assert_eq!(search.alerts[0].state, AlertState::Alert);
        assert_eq!(search.alerts[1].id, None);
    }

    #[test]
    fn test_dashboard_chart_name() {
        let json = r#"{
            "_id": "d1",
            "name": "HTTP Server",
            "charts": [{"id": "c1", "name": "P95 Latency"}, {"id": "c2"}]
        }"#;
        let dashboard: SavedDashboard = serde_json::from_str(json).unwrap();

        assert_eq!(dashboard.chart_name("c1"), Some("P95 Latency"));
        assert_eq!(dashboard.chart_name("c2"), Some(""));
        assert_eq!(dashboard.chart_name("missing"), None);
    }
}
