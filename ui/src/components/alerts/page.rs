//! Alerts Page
//!
//! Overview of every alert grouped by triage state. The tag filter is kept
//! in the `tags` query parameter so a filtered view can be shared by link.

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

use beacon_shared::alerts::{available_tags, filter_by_tags};
use beacon_shared::query::{QueryParams, TAGS_PARAM};
use beacon_shared::FetchStatus;

use super::{AlertCardList, TagFilter};
use crate::state::AppState;

/// Alerts overview page
#[component]
pub fn AlertsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let alerts = app_state.alerts;
    let notice = app_state.notice;
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let navigate = use_navigate();

    let selected_tags =
        Signal::derive(move || search.with(|s| QueryParams::parse(s).get_array(TAGS_PARAM)));

    let set_tags = Callback::new(move |tags: Vec<String>| {
        let mut params = search.with_untracked(|s| QueryParams::parse(s));
        params.set_array(TAGS_PARAM, &tags);
        let path = pathname.get_untracked();
        let url = if params.is_empty() {
            path
        } else {
            format!("{}?{}", path, params.to_query_string())
        };
        navigate(
            &url,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    let content = move || {
        alerts.with(|state| match state.status() {
            FetchStatus::Pending => view! {
                <div class="text-slate-400 py-8">"Loading..."</div>
            }
            .into_view(),
            FetchStatus::Failed => {
                tracing::debug!(error = state.error().unwrap_or_default(), "Alerts failed to load");
                view! { <div class="text-red-400 py-8">"Error"</div> }.into_view()
            }
            FetchStatus::Empty => view! {
                <div class="text-slate-400 py-8">"No alerts created yet"</div>
            }
            .into_view(),
            FetchStatus::Loaded => {
                let all = state.items();
                let filtered: Vec<_> = selected_tags.with(|tags| {
                    filter_by_tags(all, tags).into_iter().cloned().collect()
                });
                view! {
                    <TagFilter available=available_tags(all) selected=selected_tags on_change=set_tags />
                    <AlertCardList alerts=filtered />
                }
                .into_view()
            }
        })
    };

    view! {
        <Title text="Alerts - Beacon" />
        <div class="p-6 max-w-5xl">
            <h1 class="text-xl font-semibold text-white mb-1">"Alerts"</h1>
            <p class="text-sm text-slate-400 mb-6">
                "Alerts can be created from dashboard charts and saved searches."
            </p>

            {move || notice.get().map(|message| view! {
                <div class="bg-red-500/10 border border-red-500/30 rounded-lg p-3 mb-4 flex items-center">
                    <p class="flex-1 text-sm text-red-400">{message}</p>
                    <button
                        class="text-xs text-slate-400 hover:text-white"
                        on:click=move |_| notice.set(None)
                    >
                        "Dismiss"
                    </button>
                </div>
            })}

            {content}
        </div>
    }
}
