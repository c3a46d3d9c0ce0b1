//! Alert history timeline
//!
//! The alerts page shows the last [`HISTORY_ITEMS`] evaluations of every alert
//! as a row of cards, oldest on the left. History arrives most recent first.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::relative_time::format_relative;
use super::AlertState;

/// Number of cards in an alert history row
pub const HISTORY_ITEMS: usize = 18;

/// One sub-measurement aggregated into a history point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryValue {
    pub start_time: DateTime<Utc>,
    pub count: f64,
}

/// One evaluation of an alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_values: Vec<HistoryValue>,
    pub state: AlertState,
}

impl HistoryPoint {
    /// Highest count recorded at this point, 0 when nothing was recorded
    pub fn peak(&self) -> f64 {
        self.last_values
            .iter()
            .map(|value| value.count)
            .fold(None, |max: Option<f64>, count| Some(max.map_or(count, |m| m.max(count))))
            .unwrap_or(0.0)
    }

    /// Whether the card is drawn as alarming; only `OK` evaluations are not
    pub fn is_alarm(&self) -> bool {
        self.state != AlertState::Ok
    }

    /// Tooltip text, e.g. "12 today at 3:04 PM"
    pub fn label<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let created_at = self.created_at.with_timezone(&now.timezone());
        format!("{} {}", self.peak(), format_relative(&created_at, now))
    }
}

/// Visual emphasis of a timeline card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEmphasis {
    NoData,
    Normal,
    Alarm,
}

/// One card of the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistorySlot<'a> {
    /// Padding before the first known evaluation
    Empty,
    Point(&'a HistoryPoint),
}

impl HistorySlot<'_> {
    pub fn emphasis(&self) -> SlotEmphasis {
        match self {
            HistorySlot::Empty => SlotEmphasis::NoData,
            HistorySlot::Point(point) if point.is_alarm() => SlotEmphasis::Alarm,
            HistorySlot::Point(_) => SlotEmphasis::Normal,
        }
    }

    pub fn label<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self {
            HistorySlot::Empty => "No data".to_string(),
            HistorySlot::Point(point) => point.label(now),
        }
    }
}

/// A timeline of exactly `width` slots, oldest first
///
/// Only [`window`] builds one, so the slot count always equals the width.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryWindow<'a> {
    slots: Vec<HistorySlot<'a>>,
}

impl<'a> HistoryWindow<'a> {
    pub fn slots(&self) -> &[HistorySlot<'a>] {
        &self.slots
    }

    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots backed by real evaluations
    pub fn filled(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, HistorySlot::Point(_)))
            .count()
    }
}

impl<'a> IntoIterator for HistoryWindow<'a> {
    type Item = HistorySlot<'a>;
    type IntoIter = std::vec::IntoIter<HistorySlot<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

/// Lay out the most recent `width` evaluations, oldest first
///
/// Shorter histories are left-padded with empty slots; longer ones keep only
/// their first `width` (most recent) points.
pub fn window(history: &[HistoryPoint], width: usize) -> HistoryWindow<'_> {
    if !is_most_recent_first(history) {
        tracing::warn!(
            points = history.len(),
            "Alert history is not ordered most recent first; rendering as supplied"
        );
    }

    let shown = history.len().min(width);
    let padding = width - shown;

    let slots = std::iter::repeat(HistorySlot::Empty)
        .take(padding)
        .chain(history[..shown].iter().rev().map(HistorySlot::Point))
        .collect();

    HistoryWindow { slots }
}

/// Whether timestamps never increase along the sequence
///
/// Equal timestamps are allowed.
pub fn is_most_recent_first(history: &[HistoryPoint]) -> bool {
    history
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    use super::*;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 29, 15, 4, 0).unwrap()
    }

    /// `len` points, one minute apart, most recent first
    fn history(len: usize) -> Vec<HistoryPoint> {
        (0..len)
            .map(|i| HistoryPoint {
                created_at: base() - Duration::minutes(i as i64),
                last_values: vec![HistoryValue {
                    start_time: base() - Duration::minutes(i as i64 + 1),
                    count: i as f64,
                }],
                state: if i % 3 == 0 { AlertState::Alert } else { AlertState::Ok },
            })
            .collect()
    }

    fn points<'a>(window: &HistoryWindow<'a>) -> Vec<&'a HistoryPoint> {
        window
            .slots()
            .iter()
            .filter_map(|slot| match slot {
                HistorySlot::Point(point) => Some(*point),
                HistorySlot::Empty => None,
            })
            .collect()
    }

    #[test]
    fn test_fixture_history_is_most_recent_first() {
        assert!(is_most_recent_first(&history(25)));
    }

    #[test]
    fn test_ordering_check_rejects_ascending_history() {
        let mut ascending = history(5);
        ascending.reverse();
        assert!(!is_most_recent_first(&ascending));

        let mut duplicated = history(3);
        duplicated[1].created_at = duplicated[0].created_at;
        assert!(is_most_recent_first(&duplicated));
    }

    #[test]
    fn test_empty_history_is_all_padding() {
        let window = window(&[], HISTORY_ITEMS);

        assert_eq!(window.width(), 18);
        assert!(window.slots().iter().all(|slot| *slot == HistorySlot::Empty));
    }

    #[test]
    fn test_short_history_is_left_padded() {
        let history = history(10);
        let window = window(&history, HISTORY_ITEMS);

        assert_eq!(window.width(), 18);
        assert!(window.slots()[..8].iter().all(|slot| *slot == HistorySlot::Empty));
        let expected: Vec<&HistoryPoint> = history.iter().rev().collect();
        assert_eq!(points(&window), expected);
    }

    #[test]
    fn test_long_history_keeps_most_recent() {
        let history = history(25);
        let window = window(&history, HISTORY_ITEMS);

        assert_eq!(window.width(), 18);
        assert_eq!(window.filled(), 18);
        let expected: Vec<&HistoryPoint> = history[..18].iter().rev().collect();
        assert_eq!(points(&window), expected);
    }

    #[test]
    fn test_window_renders_oldest_to_newest() {
        let history = history(12);
        let window = window(&history, HISTORY_ITEMS);

        let shown = points(&window);
        assert!(shown.windows(2).all(|pair| pair[0].created_at <= pair[1].created_at));
        assert_eq!(shown.last().map(|p| p.created_at), Some(base()));
    }

    #[test]
    fn test_exact_width_history() {
        let history = history(18);
        let window = window(&history, HISTORY_ITEMS);

        assert_eq!(window.filled(), 18);
    }

    #[test]
    fn test_peak_value() {
        let mut point = history(1).remove(0);
        assert_eq!(point.peak(), 0.0);

        point.last_values = vec![
            HistoryValue { start_time: base(), count: 3.0 },
            HistoryValue { start_time: base(), count: 11.0 },
            HistoryValue { start_time: base(), count: 7.0 },
        ];
        assert_eq!(point.peak(), 11.0);

        point.last_values.clear();
        assert_eq!(point.peak(), 0.0);
    }

    #[test]
    fn test_slot_emphasis_follows_point_state() {
        let mut point = history(1).remove(0);
        point.state = AlertState::Ok;
        assert_eq!(HistorySlot::Point(&point).emphasis(), SlotEmphasis::Normal);

        point.state = AlertState::Alert;
        assert_eq!(HistorySlot::Point(&point).emphasis(), SlotEmphasis::Alarm);

        assert_eq!(HistorySlot::Empty.emphasis(), SlotEmphasis::NoData);
    }

    #[test]
    fn test_slot_labels() {
        let mut point = history(1).remove(0);
        point.last_values[0].count = 12.0;

        let now = base() + Duration::hours(1);
        assert_eq!(HistorySlot::Point(&point).label(&now), "12 today at 3:04 PM");
        assert_eq!(HistorySlot::Empty.label(&now), "No data");
    }

    proptest! {
        #[test]
        fn prop_window_is_always_exact_width(len in 0usize..60, width in 1usize..40) {
            let history = history(len);
            let window = window(&history, width);

            prop_assert_eq!(window.width(), width);
            prop_assert_eq!(window.filled(), len.min(width));
            let padding = window.slots().iter().take_while(|s| **s == HistorySlot::Empty).count();
            prop_assert_eq!(padding, width - len.min(width));
        }
    }
}
