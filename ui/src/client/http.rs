//! HTTP API Client
//!
//! Talks to the JSON API over `fetch`. List endpoints answer with a
//! `{ "data": [...] }` envelope.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use beacon_shared::{AlertRecord, ListResponse, SavedDashboard, SavedSearch};

use super::{NavClient, NavClientError};

/// Client for the HTTP API
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// API base URL
    base_url: String,
}

impl HttpClient {
    /// Create a new client
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Client for `<page origin>/api`, or for `configured` when set
    pub fn from_config(configured: &str) -> Self {
        if !configured.is_empty() {
            return Self::new(configured);
        }
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        Self::new(&format!("{}/api", origin))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET a list endpoint and unwrap its envelope
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, NavClientError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| NavClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(NavClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body: ListResponse<T> = response
            .json()
            .await
            .map_err(|e| NavClientError::InvalidResponse(e.to_string()))?;

        tracing::debug!(path, count = body.data.len(), "Fetched list");
        Ok(body.data)
    }
}

#[async_trait::async_trait(?Send)]
impl NavClient for HttpClient {
    async fn saved_searches(&self) -> Result<Vec<SavedSearch>, NavClientError> {
        self.get_list("log-views").await
    }

    async fn dashboards(&self) -> Result<Vec<SavedDashboard>, NavClientError> {
        self.get_list("dashboards").await
    }

    async fn alerts(&self) -> Result<Vec<AlertRecord>, NavClientError> {
        self.get_list("alerts").await
    }

    async fn disable_alert(&self, alert_id: &str) -> Result<(), NavClientError> {
        let response = Request::post(&self.url(&format!("alerts/{}/disable", alert_id)))
            .send()
            .await
            .map_err(|e| NavClientError::ConnectionFailed(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(NavClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                body
            )))
        }
    }
}
