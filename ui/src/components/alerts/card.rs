//! Alert cards
//!
//! Triage sections (triggered, ok, disabled) and the details row of each
//! alert: state badge, name linking to what it watches, condition, channel
//! and history timeline.

use leptos::*;
use leptos_router::*;

use beacon_shared::alerts::{bucket, AlertName};
use beacon_shared::AlertRecord;

use super::AlertHistoryCardList;
use crate::components::common::StateBadge;
use crate::state::AppState;

/// Alerts split into triage sections
#[component]
pub fn AlertCardList(alerts: Vec<AlertRecord>) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let show_disabled = app_state.config.with_untracked(|c| c.features.disable_alerts);

    let buckets = bucket(&alerts);
    let sections = buckets
        .sections(show_disabled)
        .into_iter()
        .map(|section| {
            let body = match section.empty_message() {
                Some(message) => view! {
                    <div class="px-4 py-3 text-sm text-slate-500">{message}</div>
                }
                .into_view(),
                None => section
                    .alerts
                    .iter()
                    .map(|alert| view! { <AlertDetails alert=(*alert).clone() /> })
                    .collect_view(),
            };
            view! {
                <section class="mb-6">
                    <h2 class="text-sm font-semibold text-slate-400 uppercase tracking-wider mb-2">
                        {section.bucket.title()}
                    </h2>
                    <div class="bg-slate-800 rounded-lg border border-slate-700 divide-y divide-slate-700">
                        {body}
                    </div>
                </section>
            }
        })
        .collect_view();
    sections
}

/// Display name, with the dashboard/chart separator styled apart
fn name_view(name: AlertName) -> View {
    match name {
        AlertName::Chart { dashboard, chart: Some(chart) } => view! {
            <span>{dashboard}<span class="text-slate-500 mx-1">"›"</span>{chart}</span>
        }
        .into_view(),
        other => other.to_string().into_view(),
    }
}

/// One alert row
#[component]
pub fn AlertDetails(alert: AlertRecord) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let config = app_state.config.get_untracked();
    let can_disable = alert.disable_target(config.features.disable_alerts).is_some();

    let name = name_view(alert.name());
    let title = match alert.href() {
        Some(href) => view! {
            <A href=href class="text-white hover:text-blue-400 font-medium">{name}</A>
        }
        .into_view(),
        None => view! { <span class="text-slate-300 font-medium">{name}</span> }.into_view(),
    };

    let disable_button = can_disable.then(|| {
        let alert = alert.clone();
        let app_state = app_state.clone();
        view! {
            <button
                class="px-2 py-1 text-xs text-slate-400 hover:text-red-400 hover:bg-red-500/10 rounded transition-colors"
                on:click=move |_| app_state.disable_alert(&alert)
            >
                "Disable"
            </button>
        }
    });

    view! {
        <div class="flex items-center gap-4 px-4 py-3">
            <div class="w-20 flex-shrink-0">
                <StateBadge state=alert.state />
            </div>
            <div class="flex-1 min-w-0">
                <div class="truncate">{title}</div>
                <div class="text-xs text-slate-400 mt-0.5">
                    {alert.condition()}
                    {alert.channel_label().map(|label| view! {
                        <span class="ml-2 text-slate-500">{label}</span>
                    })}
                </div>
            </div>
            <AlertHistoryCardList history=alert.history.clone() width=config.history_width />
            {disable_button}
        </div>
    }
}
