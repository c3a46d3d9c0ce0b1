//! Alert Health
//!
//! Alert records as served by the API plus the derivations the alerts page and
//! the navigation need from them:
//! - [`bucket`] splits alerts into triggered / ok / disabled sections
//! - [`rollup`] reduces all alerts to one navigation status
//! - [`history::window`] lays out recent history as a fixed-width timeline

pub mod history;
pub mod relative_time;

pub use history::{window, HistoryPoint, HistorySlot, HistoryValue, HistoryWindow, HISTORY_ITEMS};
pub use relative_time::format_relative;

use serde::{Deserialize, Serialize};

use crate::entities::{LinkedAlert, SavedDashboard, SavedSearch};

// ============================================================================
// Types
// ============================================================================

/// Evaluation state of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertState {
    Ok,
    Alert,
    Disabled,
    InsufficientData,
}

impl AlertState {
    pub fn all() -> &'static [AlertState] {
        &[
            AlertState::Ok,
            AlertState::Alert,
            AlertState::Disabled,
            AlertState::InsufficientData,
        ]
    }

    /// Triage section this state belongs to
    pub fn bucket(self) -> TriageBucket {
        match self {
            AlertState::Alert => TriageBucket::Triggered,
            AlertState::Ok => TriageBucket::Ok,
            AlertState::Disabled | AlertState::InsufficientData => TriageBucket::Disabled,
        }
    }

    /// Badge text shown next to an alert, if any
    pub fn badge(self) -> Option<&'static str> {
        match self {
            AlertState::Alert => Some("Alert"),
            AlertState::Ok => Some("Ok"),
            AlertState::Disabled => Some("Disabled"),
            AlertState::InsufficientData => None,
        }
    }
}

/// What an alert watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSource {
    Chart,
    Log,
}

/// Comparison direction of the alert condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Fires when the value goes over the threshold
    #[default]
    Presence,
    /// Fires when the value drops under the threshold
    Absence,
}

/// Notification channel of an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AlertChannel {
    Webhook {
        #[serde(rename = "webhookId", default)]
        webhook_id: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl Default for AlertChannel {
    fn default() -> Self {
        AlertChannel::Unknown
    }
}

/// An alert with its recent evaluation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub source: AlertSource,
    #[serde(default)]
    pub chart_id: Option<String>,
    #[serde(default)]
    pub dashboard: Option<SavedDashboard>,
    #[serde(default)]
    pub log_view: Option<SavedSearch>,
    #[serde(rename = "type", default)]
    pub kind: AlertKind,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub channel: AlertChannel,
    pub state: AlertState,
    /// Most recent first
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

/// Anything carrying an alert state
pub trait HasAlertState {
    fn alert_state(&self) -> AlertState;
}

impl HasAlertState for AlertRecord {
    fn alert_state(&self) -> AlertState {
        self.state
    }
}

impl HasAlertState for LinkedAlert {
    fn alert_state(&self) -> AlertState {
        self.state
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// Display name of an alert, split so views can style the separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertName {
    /// Dashboard name, optionally followed by the chart name
    Chart { dashboard: String, chart: Option<String> },
    /// Saved search name
    Search(String),
    /// The watched entity is gone
    Unknown,
}

impl std::fmt::Display for AlertName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertName::Chart { dashboard, chart: Some(chart) } => write!(f, "{} › {}", dashboard, chart),
            AlertName::Chart { dashboard, chart: None } => write!(f, "{}", dashboard),
            AlertName::Search(name) => write!(f, "{}", name),
            AlertName::Unknown => write!(f, "–"),
        }
    }
}

impl AlertRecord {
    pub fn name(&self) -> AlertName {
        match (self.source, &self.dashboard, &self.log_view) {
            (AlertSource::Chart, Some(dashboard), _) => AlertName::Chart {
                dashboard: dashboard.name.clone(),
                chart: self
                    .chart_id
                    .as_deref()
                    .and_then(|id| dashboard.chart_name(id))
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            },
            (AlertSource::Log, _, Some(search)) => AlertName::Search(search.name.clone()),
            _ => AlertName::Unknown,
        }
    }

    /// Link to the chart or saved search being watched
    pub fn href(&self) -> Option<String> {
        match (self.source, &self.dashboard, &self.log_view) {
            (AlertSource::Chart, Some(dashboard), _) => Some(format!(
                "/dashboards/{}?highlightedChartId={}",
                dashboard.id,
                self.chart_id.as_deref().unwrap_or_default()
            )),
            (AlertSource::Log, _, Some(search)) => Some(format!("/search/{}", search.id)),
            _ => None,
        }
    }

    /// Human readable condition, e.g. "If count is over 10"
    pub fn condition(&self) -> String {
        let quantity = match self.source {
            AlertSource::Log => "count",
            AlertSource::Chart => "value",
        };
        let direction = match self.kind {
            AlertKind::Presence => "over",
            AlertKind::Absence => "under",
        };
        format!("If {} is {} {}", quantity, direction, self.threshold)
    }

    /// Human readable notification target
    pub fn channel_label(&self) -> Option<&'static str> {
        match self.channel {
            AlertChannel::Webhook { .. } => Some("Notify via Slack Webhook"),
            AlertChannel::Unknown => None,
        }
    }

    /// Tags of the dashboard or saved search the alert watches
    pub fn tags(&self) -> impl Iterator<Item = &String> {
        let dashboard_tags = self.dashboard.iter().flat_map(|d| d.tags.iter());
        let search_tags = self.log_view.iter().flat_map(|s| s.tags.iter());
        dashboard_tags.chain(search_tags)
    }

    /// Identity to send to the disable collaborator
    ///
    /// `None` when the action is switched off or the alert has no identity
    /// yet, in which case invoking it does nothing.
    pub fn disable_target(&self, enabled: bool) -> Option<&str> {
        if !enabled {
            return None;
        }
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Keep alerts linked to any of `selected` tags; no selection keeps everything
pub fn filter_by_tags<'a>(alerts: &'a [AlertRecord], selected: &[String]) -> Vec<&'a AlertRecord> {
    if selected.is_empty() {
        return alerts.iter().collect();
    }
    alerts
        .iter()
        .filter(|alert| alert.tags().any(|tag| selected.contains(tag)))
        .collect()
}

/// Distinct tags across all alerts, in first-seen order
pub fn available_tags(alerts: &[AlertRecord]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in alerts.iter().flat_map(AlertRecord::tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

// ============================================================================
// Triage
// ============================================================================

/// Section of the alerts page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageBucket {
    Triggered,
    Ok,
    Disabled,
}

impl TriageBucket {
    pub fn title(self) -> &'static str {
        match self {
            TriageBucket::Triggered => "Triggered",
            TriageBucket::Ok => "OK",
            TriageBucket::Disabled => "Disabled",
        }
    }
}

/// Alerts split by triage section, each in input order
#[derive(Debug, Default)]
pub struct AlertBuckets<'a> {
    pub triggered: Vec<&'a AlertRecord>,
    pub ok: Vec<&'a AlertRecord>,
    pub disabled: Vec<&'a AlertRecord>,
}

/// One rendered section
#[derive(Debug)]
pub struct TriageSection<'a> {
    pub bucket: TriageBucket,
    pub alerts: Vec<&'a AlertRecord>,
}

impl TriageSection<'_> {
    /// Placeholder text when the section has no alerts
    pub fn empty_message(&self) -> Option<&'static str> {
        self.alerts.is_empty().then_some("No alerts")
    }
}

impl<'a> AlertBuckets<'a> {
    pub fn len(&self) -> usize {
        self.triggered.len() + self.ok.len() + self.disabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sections in display order
    ///
    /// Triggered only appears when it has alerts, OK always appears, and the
    /// disabled section is gated behind `show_disabled`.
    pub fn sections(&self, show_disabled: bool) -> Vec<TriageSection<'a>> {
        let mut sections = Vec::with_capacity(3);
        if !self.triggered.is_empty() {
            sections.push(TriageSection {
                bucket: TriageBucket::Triggered,
                alerts: self.triggered.clone(),
            });
        }
        sections.push(TriageSection {
            bucket: TriageBucket::Ok,
            alerts: self.ok.clone(),
        });
        if show_disabled {
            sections.push(TriageSection {
                bucket: TriageBucket::Disabled,
                alerts: self.disabled.clone(),
            });
        }
        sections
    }
}

/// Split alerts into disjoint triage buckets
pub fn bucket<'a, I>(alerts: I) -> AlertBuckets<'a>
where
    I: IntoIterator<Item = &'a AlertRecord>,
{
    let mut buckets = AlertBuckets::default();
    for alert in alerts {
        match alert.state.bucket() {
            TriageBucket::Triggered => buckets.triggered.push(alert),
            TriageBucket::Ok => buckets.ok.push(alert),
            TriageBucket::Disabled => buckets.disabled.push(alert),
        }
    }
    buckets
}

// ============================================================================
// Rollup
// ============================================================================

/// Overall alert status shown in the navigation
///
/// Variants are ordered by precedence: `Alarming > Ok > None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum AlertRollup {
    /// No alerts are set up
    #[default]
    None,
    /// Alerts exist and none is firing
    Ok,
    /// At least one alert is firing
    Alarming,
}

impl AlertRollup {
    /// Contribution of a single alert
    fn of(state: AlertState) -> Self {
        match state {
            AlertState::Alert => AlertRollup::Alarming,
            AlertState::Ok | AlertState::Disabled | AlertState::InsufficientData => AlertRollup::Ok,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertRollup::Alarming => "Some alerts are firing",
            AlertRollup::Ok => "All alerts are ok",
            AlertRollup::None => "No alerts are set up",
        }
    }

    pub fn is_alarming(self) -> bool {
        self == AlertRollup::Alarming
    }
}

/// Reduce alerts to one status, keeping the highest precedence seen
pub fn rollup<'a, T, I>(alerts: I) -> AlertRollup
where
    T: HasAlertState + 'a,
    I: IntoIterator<Item = &'a T>,
{
    alerts
        .into_iter()
        .fold(AlertRollup::None, |acc, alert| acc.max(AlertRollup::of(alert.alert_state())))
}
