//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Global state (configuration, fetched lists, persisted UI store)
//! - Routing between the alerts page and everything else
//! - The shared AppShell layout

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::alerts::AlertsPage;
use crate::components::layout::{AppShell, EmptyPage};
use crate::state::{browser_store, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new(browser_store());
    provide_context(app_state.clone());

    // Config first, so the client targets the configured API
    spawn_local(async move {
        app_state.load_config().await;
        app_state.refresh();
    });

    view! {
        <Title text="Beacon" />
        <Router>
            <Routes>
                <Route path="/alerts" view=|| view! { <AppShell><AlertsPage /></AppShell> } />
                <Route path="/*any" view=|| view! { <AppShell><EmptyPage /></AppShell> } />
            </Routes>
        </Router>
    }
}
