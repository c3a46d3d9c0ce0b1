//! API Client Abstraction Layer
//!
//! The navigation and the alerts page never issue requests themselves; they
//! go through the `NavClient` trait so the transport can be swapped (HTTP in
//! the browser, canned data in demos).
//!
//! # Endpoints
//!
//! - saved searches, dashboards and alerts are independent list fetches
//! - disabling an alert is a fire-and-forget mutation

mod http;

pub use http::HttpClient;

use async_trait::async_trait;
use beacon_shared::{AlertRecord, SavedDashboard, SavedSearch};

/// Error types for API client operations
#[derive(Debug, thiserror::Error)]
pub enum NavClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Data and mutation collaborator of the navigation
#[async_trait(?Send)]
pub trait NavClient {
    /// Saved log searches
    async fn saved_searches(&self) -> Result<Vec<SavedSearch>, NavClientError>;

    /// Saved dashboards
    async fn dashboards(&self) -> Result<Vec<SavedDashboard>, NavClientError>;

    /// Alerts with their recent history, most recent point first
    async fn alerts(&self) -> Result<Vec<AlertRecord>, NavClientError>;

    /// Disable one alert; failures are reported, never retried
    async fn disable_alert(&self, alert_id: &str) -> Result<(), NavClientError>;
}
