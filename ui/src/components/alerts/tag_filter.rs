//! Tag filter chips for the alerts page

use leptos::*;

/// Toggleable chip per available tag
#[component]
pub fn TagFilter(
    /// Every tag linked to some alert
    available: Vec<String>,
    #[prop(into)] selected: Signal<Vec<String>>,
    /// Called with the new selection
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    if available.is_empty() {
        return ().into_view();
    }

    let chips = available
        .into_iter()
        .map(|tag| {
            let is_selected = {
                let tag = tag.clone();
                move || selected.with(|s| s.contains(&tag))
            };
            let is_selected_class = is_selected.clone();
            let toggle = {
                let tag = tag.clone();
                move |_: ev::MouseEvent| {
                    let mut next = selected.get_untracked();
                    if let Some(pos) = next.iter().position(|t| *t == tag) {
                        next.remove(pos);
                    } else {
                        next.push(tag.clone());
                    }
                    on_change.call(next);
                }
            };
            view! {
                <button
                    class=move || {
                        if is_selected_class() {
                            "px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-500/20 text-blue-300 border border-blue-500/40"
                        } else {
                            "px-2.5 py-0.5 rounded-full text-xs font-medium bg-slate-800 text-slate-400 border border-slate-700 hover:text-white"
                        }
                    }
                    aria-pressed=move || is_selected().to_string()
                    on:click=toggle
                >
                    {tag}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-wrap items-center gap-2 mb-6">
            <span class="text-xs text-slate-500 uppercase tracking-wider">"Tags"</span>
            {chips}
            <Show when=move || selected.with(|s| !s.is_empty())>
                <button
                    class="text-xs text-slate-400 hover:text-white"
                    on:click=move |_| on_change.call(Vec::new())
                >
                    "Clear"
                </button>
            </Show>
        </div>
    }
    .into_view()
}
