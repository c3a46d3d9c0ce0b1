//! Alert status indicators

use leptos::*;

use beacon_shared::{AlertRollup, AlertState};

fn rollup_class(rollup: AlertRollup) -> &'static str {
    match rollup {
        AlertRollup::Alarming => "bg-red-500 animate-pulse",
        AlertRollup::Ok => "bg-green-500",
        AlertRollup::None => "bg-slate-600",
    }
}

/// Dot summarizing many alerts, titled with the rollup description
#[component]
pub fn RollupDot(#[prop(into)] rollup: Signal<AlertRollup>) -> impl IntoView {
    view! {
        <span
            class=move || format!("inline-block w-2 h-2 rounded-full {}", rollup_class(rollup.get()))
            title=move || rollup.get().title()
        />
    }
}

fn badge_class(state: AlertState) -> &'static str {
    match state {
        AlertState::Alert => "bg-red-500/20 text-red-400",
        AlertState::Ok => "bg-green-500/20 text-green-400",
        AlertState::Disabled | AlertState::InsufficientData => "bg-slate-500/20 text-slate-400",
    }
}

/// Badge for one alert's state; renders nothing for states without a badge
#[component]
pub fn StateBadge(state: AlertState) -> impl IntoView {
    state.badge().map(|text| {
        view! {
            <span class=format!("inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {}", badge_class(state))>
                {text}
            </span>
        }
    })
}
