//! Fetch states
//!
//! Every data source of the navigation (saved searches, dashboards, alerts) is
//! fetched independently and shown as loading, failed or loaded. None of these
//! are errors inside the core; views render each one with its own placeholder.

use serde::{Deserialize, Serialize};

/// `{ "data": [...] }` envelope used by the list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Observable state of one fetched list
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

/// Which placeholder a fetched list needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Failed,
    /// Loaded and legitimately empty
    Empty,
    Loaded,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Build from a fetch result, keeping only the error message
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => FetchState::Ready(items),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Loading => FetchStatus::Pending,
            FetchState::Failed(_) => FetchStatus::Failed,
            FetchState::Ready(items) if items.is_empty() => FetchStatus::Empty,
            FetchState::Ready(_) => FetchStatus::Loaded,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded items, empty while loading or after a failure
    pub fn items(&self) -> &[T] {
        match self {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_state() {
        assert_eq!(FetchState::<u8>::Loading.status(), FetchStatus::Pending);
        assert_eq!(FetchState::<u8>::Failed("boom".into()).status(), FetchStatus::Failed);
        assert_eq!(FetchState::<u8>::Ready(vec![]).status(), FetchStatus::Empty);
        assert_eq!(FetchState::Ready(vec![1u8]).status(), FetchStatus::Loaded);
    }

    #[test]
    fn test_items_never_guess_from_partial_data() {
        assert!(FetchState::<u8>::Loading.items().is_empty());
        assert!(FetchState::<u8>::Failed("boom".into()).items().is_empty());
        assert_eq!(FetchState::Ready(vec![1u8, 2]).items(), &[1, 2]);
    }

    #[test]
    fn test_from_result() {
        let failed = FetchState::<u8>::from_result(Err("HTTP 500"));
        assert_eq!(failed.error(), Some("HTTP 500"));

        let ready = FetchState::from_result::<String>(Ok(vec![3u8]));
        assert_eq!(ready.items(), &[3]);
    }

    #[test]
    fn test_list_response_envelope() {
        let parsed: ListResponse<u32> = serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
        assert_eq!(parsed.data, vec![1, 2]);

        let missing: ListResponse<u32> = serde_json::from_str("{}").unwrap();
        assert!(missing.data.is_empty());
    }
}
