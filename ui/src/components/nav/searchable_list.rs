//! Searchable List
//!
//! One navigation list: a fuzzy search box (only when there is something to
//! search), then the entities partitioned into collapsible tag groups.
//! Collapse state is persisted per list; while a query is active every group
//! is shown expanded without touching what is stored.

use leptos::*;
use wasm_bindgen::JsCast;

use beacon_shared::search::FuzzyMatcher;
use beacon_shared::{CollapseState, FetchState, FetchStatus, GroupedSearchIndex, ListAffordance, NamedEntity};

use crate::components::common::{ChevronIcon, CloseIcon, SearchIcon};
use crate::state::AppState;

/// Searchable, tag-grouped list of named entities
#[component]
pub fn SearchableList<T>(
    /// Namespace of the persisted collapse state
    list_name: &'static str,
    items: RwSignal<FetchState<T>>,
    /// Name of the group holding untagged entities
    #[prop(into)]
    untagged_label: Signal<String>,
    /// Shown when the list has no entities at all
    empty_message: &'static str,
    placeholder: &'static str,
    /// Renders the link for one entity
    render_item: Callback<T, View>,
) -> impl IntoView
where
    T: NamedEntity + Clone + 'static,
{
    let app_state = expect_context::<AppState>();
    let config = app_state.config;
    let (query, set_query) = create_signal(String::new());
    let collapse = create_rw_signal(CollapseState::load(app_state.store.clone(), list_name));
    let results_ref = create_node_ref::<html::Div>();

    let searchable = Signal::derive(move || {
        items.with(|state| GroupedSearchIndex::new(state.items()).is_searchable())
    });

    let toggle_group = move |group: String| {
        collapse.update(|state| {
            if let Err(e) = state.toggle(&group) {
                tracing::warn!(list = list_name, group = %group, error = %e, "Failed to persist collapsed groups");
            }
        });
    };

    // Enter jumps to the first result, Escape clears the query
    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            let first_link = results_ref
                .get()
                .and_then(|container| container.query_selector("a").ok().flatten())
                .and_then(|link| link.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(link) = first_link {
                let _ = link.focus();
            }
        }
        "Escape" => set_query.set(String::new()),
        _ => {}
    };

    let body = move || {
        items.with(|state| match state.status() {
            FetchStatus::Pending => {
                view! { <div class="px-3 py-1 text-xs text-slate-500">"Loading..."</div> }.into_view()
            }
            FetchStatus::Failed => {
                view! { <div class="px-3 py-1 text-xs text-red-400">"Error"</div> }.into_view()
            }
            FetchStatus::Empty | FetchStatus::Loaded => {
                let index = GroupedSearchIndex::new(state.items())
                    .with_untagged_label(untagged_label.get())
                    .with_matcher(FuzzyMatcher::new(config.with(|c| c.search.fuzzy_threshold)));
                let list = query.with(|q| collapse.with(|c| index.view(q, c)));

                let message = match list.affordance {
                    ListAffordance::Items => None,
                    ListAffordance::NoItems => Some(empty_message.into_view()),
                    ListAffordance::NoResults(q) => Some(
                        view! { <span>"No results matching "<i>{q}</i></span> }.into_view(),
                    ),
                };

                let groups = list
                    .groups
                    .into_iter()
                    .map(|group| {
                        let expanded = group.expanded;
                        let name = group.name.clone();
                        let links = group
                            .items
                            .into_iter()
                            .map(|item| render_item.call(item.clone()))
                            .collect_view();
                        view! {
                            <div class="mb-1">
                                <button
                                    class="w-full flex items-center gap-2 px-2 py-1 text-xs font-medium text-slate-400 uppercase tracking-wider hover:text-white transition-colors"
                                    on:click=move |_| toggle_group(name.clone())
                                >
                                    <ChevronIcon open=expanded />
                                    {group.name}
                                </button>
                                {expanded.then(|| view! { <div class="space-y-0.5 mt-0.5">{links}</div> })}
                            </div>
                        }
                    })
                    .collect_view();

                view! {
                    {message.map(|message| view! {
                        <div class="px-3 py-1 text-xs text-slate-500">{message}</div>
                    })}
                    {groups}
                }
                .into_view()
            }
        })
    };

    view! {
        <div class="px-2 pb-2">
            <Show when=move || searchable.get()>
                <div class="relative mb-2">
                    <span class="absolute left-2 top-1.5 text-slate-500">
                        <SearchIcon class="w-3.5 h-3.5" />
                    </span>
                    <input
                        type="text"
                        class="w-full pl-7 pr-7 py-1 text-sm bg-slate-900 border border-slate-700 rounded text-white placeholder-slate-500 focus:outline-none focus:border-blue-500"
                        placeholder=placeholder
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <Show when=move || query.with(|q| !q.is_empty())>
                        <button
                            class="absolute right-2 top-1.5 text-slate-500 hover:text-white"
                            title="Clear"
                            on:click=move |_| set_query.set(String::new())
                        >
                            <CloseIcon class="w-3.5 h-3.5" />
                        </button>
                    </Show>
                </div>
            </Show>
            <div node_ref=results_ref>{body}</div>
        </div>
    }
}
