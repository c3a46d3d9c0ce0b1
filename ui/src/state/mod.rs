//! Global State Management
//!
//! This module manages the global application state including:
//! - Configuration loaded from `/beacon.toml`
//! - Fetch state of saved searches, dashboards and alerts
//! - The store backing persisted UI state

mod storage;

pub use storage::{browser_store, LocalStore};

use leptos::*;

use beacon_shared::alerts::rollup;
use beacon_shared::{
    AlertRecord, AlertRollup, FetchState, NavConfig, SavedDashboard, SavedSearch, SharedStore,
};

use crate::client::{HttpClient, NavClient};

/// Location of the optional UI configuration file
const CONFIG_PATH: &str = "/beacon.toml";

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// UI configuration, defaults until `/beacon.toml` has loaded
    pub config: RwSignal<NavConfig>,

    pub saved_searches: RwSignal<FetchState<SavedSearch>>,
    pub dashboards: RwSignal<FetchState<SavedDashboard>>,
    pub alerts: RwSignal<FetchState<AlertRecord>>,

    /// Last failed mutation, shown until dismissed
    pub notice: RwSignal<Option<String>>,

    /// Backing store for persisted UI state
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            config: create_rw_signal(NavConfig::default()),
            saved_searches: create_rw_signal(FetchState::Loading),
            dashboards: create_rw_signal(FetchState::Loading),
            alerts: create_rw_signal(FetchState::Loading),
            notice: create_rw_signal(None),
            store,
        }
    }

    /// Client for the configured API
    pub fn client(&self) -> HttpClient {
        HttpClient::from_config(&self.config.with_untracked(|c| c.api_base_url.clone()))
    }

    /// Load `/beacon.toml`, keeping defaults when it is missing or invalid
    pub async fn load_config(&self) {
        let response = match gloo_net::http::Request::get(CONFIG_PATH).send().await {
            Ok(response) if response.ok() => response,
            Ok(response) => {
                tracing::debug!(status = response.status(), "No UI config, using defaults");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch UI config, using defaults");
                return;
            }
        };

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read UI config, using defaults");
                return;
            }
        };

        match NavConfig::from_toml(&text) {
            Ok(config) => {
                tracing::info!("Loaded UI config");
                self.config.set(config);
            }
            Err(e) => tracing::warn!(error = %e, "Invalid UI config, using defaults"),
        }
    }

    /// Fetch every list; each resolves independently of the others
    pub fn refresh(&self) {
        self.refresh_saved_searches();
        self.refresh_dashboards();
        self.refresh_alerts();
    }

    pub fn refresh_saved_searches(&self) {
        let client = self.client();
        let target = self.saved_searches;
        spawn_local(async move {
            let result = client.saved_searches().await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "Failed to load saved searches");
            }
            target.set(FetchState::from_result(result));
        });
    }

    pub fn refresh_dashboards(&self) {
        let client = self.client();
        let target = self.dashboards;
        spawn_local(async move {
            let result = client.dashboards().await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "Failed to load dashboards");
            }
            target.set(FetchState::from_result(result));
        });
    }

    pub fn refresh_alerts(&self) {
        let client = self.client();
        let target = self.alerts;
        spawn_local(async move {
            let result = client.alerts().await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "Failed to load alerts");
            }
            target.set(FetchState::from_result(result));
        });
    }

    /// Disable an alert, then reload the alert list
    ///
    /// Does nothing when the feature is off or the alert has no id.
    pub fn disable_alert(&self, alert: &AlertRecord) {
        let enabled = self.config.with_untracked(|c| c.features.disable_alerts);
        let Some(alert_id) = alert.disable_target(enabled).map(str::to_string) else {
            return;
        };

        let state = self.clone();
        spawn_local(async move {
            match state.client().disable_alert(&alert_id).await {
                Ok(()) => {
                    tracing::info!(alert_id = %alert_id, "Disabled alert");
                    state.notice.set(None);
                    state.refresh_alerts();
                }
                Err(e) => {
                    tracing::error!(alert_id = %alert_id, error = %e, "Failed to disable alert");
                    state.notice.set(Some(format!("Failed to disable alert: {}", e)));
                }
            }
        });
    }

    /// Overall alert status for the navigation; `None` until alerts load
    pub fn alert_rollup(&self) -> Signal<AlertRollup> {
        let alerts = self.alerts;
        Signal::derive(move || alerts.with(|state| rollup(state.items())))
    }
}
