//! Application Navigation
//!
//! Side navigation with two collapsible panels (saved searches, saved
//! dashboards) and the alerts entry. Panel open/closed flags persist across
//! reloads independently of each other.

use leptos::*;
use leptos_router::*;

use beacon_shared::alerts::rollup;
use beacon_shared::query::{dashboard_href, saved_search_href, QueryParams};
use beacon_shared::store::{PersistedFlag, DASHBOARDS_PANEL_EXPANDED_KEY, SEARCH_PANEL_EXPANDED_KEY};
use beacon_shared::{AlertRollup, SavedDashboard, SavedSearch};

use super::SearchableList;
use crate::components::common::{BellIcon, ChevronIcon, DashboardIcon, RollupDot, SearchIcon};
use crate::state::AppState;

const LINK_CLASS: &str = "flex items-center gap-2 px-2 py-1 rounded text-sm truncate transition-colors";

fn link_class(active: bool) -> String {
    if active {
        format!("{} bg-slate-700 text-white", LINK_CLASS)
    } else {
        format!("{} text-slate-300 hover:text-white hover:bg-slate-700/50", LINK_CLASS)
    }
}

/// Main side navigation
#[component]
pub fn AppNav() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let config = app_state.config;
    let saved_searches = app_state.saved_searches;
    let dashboards = app_state.dashboards;
    let location = use_location();
    let pathname = location.pathname;
    let search_params = location.search;

    let search_panel = create_rw_signal(PersistedFlag::load(
        app_state.store.clone(),
        SEARCH_PANEL_EXPANDED_KEY,
        true,
    ));
    let dashboards_panel = create_rw_signal(PersistedFlag::load(
        app_state.store.clone(),
        DASHBOARDS_PANEL_EXPANDED_KEY,
        true,
    ));

    let render_search = Callback::new(move |search: SavedSearch| {
        let path = format!("/search/{}", search.id);
        let href = {
            let id = search.id.clone();
            move || {
                let time_range = search_params.with(|s| QueryParams::parse(s).time_range());
                saved_search_href(&id, time_range.as_ref())
            }
        };
        let indicator = rollup(&search.alerts);
        view! {
            <A href=href class=move || link_class(pathname.get() == path)>
                <span class="flex-1 truncate">{search.name}</span>
                <SearchBell rollup=indicator />
            </A>
        }
        .into_view()
    });

    let render_dashboard = Callback::new(move |dashboard: SavedDashboard| {
        let href = dashboard_href(&dashboard.id);
        let path = href.clone();
        view! {
            <A href=href class=move || link_class(pathname.get() == path)>
                <span class="truncate">{dashboard.name}</span>
            </A>
        }
        .into_view()
    });

    view! {
        <nav class="w-60 h-full bg-slate-800 border-r border-slate-700 flex flex-col overflow-hidden flex-shrink-0">
            <div class="h-12 flex items-center px-4 border-b border-slate-700">
                <A href="/" class="text-base font-semibold text-white">"Beacon"</A>
            </div>

            <div class="flex-1 overflow-y-auto custom-scrollbar py-2">
                <PanelHeader label="Search" flag=search_panel>
                    <SearchIcon />
                </PanelHeader>
                <Show when=move || search_panel.with(PersistedFlag::get)>
                    <SearchableList
                        list_name="saved-searches"
                        items=saved_searches
                        untagged_label=Signal::derive(move || config.with(|c| c.labels.saved_searches.clone()))
                        empty_message="No saved searches"
                        placeholder="Saved Searches"
                        render_item=render_search
                    />
                </Show>

                <A
                    href="/alerts"
                    class=move || link_class(pathname.get() == "/alerts")
                >
                    <BellIcon />
                    <span class="flex-1">"Alerts"</span>
                    <RollupDot rollup=app_state.alert_rollup() />
                </A>

                <PanelHeader label="Dashboards" flag=dashboards_panel>
                    <DashboardIcon />
                </PanelHeader>
                <Show when=move || dashboards_panel.with(PersistedFlag::get)>
                    <SearchableList
                        list_name="dashboards"
                        items=dashboards
                        untagged_label=Signal::derive(move || config.with(|c| c.labels.saved_dashboards.clone()))
                        empty_message="No saved dashboards"
                        placeholder="Saved Dashboards"
                        render_item=render_dashboard
                    />
                </Show>
            </div>
        </nav>
    }
}

/// Toggle button for one navigation panel
#[component]
fn PanelHeader(
    label: &'static str,
    flag: RwSignal<PersistedFlag>,
    /// Leading icon
    children: Children,
) -> impl IntoView {
    let toggle = move |_: ev::MouseEvent| {
        flag.update(|flag| {
            if let Err(e) = flag.toggle() {
                tracing::warn!(panel = label, error = %e, "Failed to persist panel state");
            }
        });
    };

    view! {
        <button
            class="w-full flex items-center gap-2 px-4 py-2 text-sm font-medium text-slate-300 hover:text-white transition-colors"
            on:click=toggle
        >
            {children()}
            <span class="flex-1 text-left">{label}</span>
            <ChevronIcon open=Signal::derive(move || flag.with(PersistedFlag::get)) />
        </button>
    }
}

/// Bell next to a saved search reflecting its own alerts
#[component]
fn SearchBell(rollup: AlertRollup) -> impl IntoView {
    (rollup != AlertRollup::None).then(|| {
        let color = if rollup.is_alarming() { "text-red-400" } else { "text-slate-500" };
        view! {
            <span class=color title=rollup.title()>
                <BellIcon class="w-3.5 h-3.5" filled=rollup.is_alarming() />
            </span>
        }
    })
}
