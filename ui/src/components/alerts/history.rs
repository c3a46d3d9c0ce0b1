//! Alert history timeline
//!
//! A fixed-width row of cards, oldest on the left. Missing history shows as
//! empty "No data" cards so every row lines up.

use leptos::*;

use beacon_shared::alerts::history::SlotEmphasis;
use beacon_shared::alerts::{window, HistoryPoint};

fn slot_class(emphasis: SlotEmphasis) -> &'static str {
    match emphasis {
        SlotEmphasis::NoData => "bg-slate-700/40",
        SlotEmphasis::Normal => "bg-green-500/70",
        SlotEmphasis::Alarm => "bg-red-500",
    }
}

/// History cards for one alert
#[component]
pub fn AlertHistoryCardList(history: Vec<HistoryPoint>, width: usize) -> impl IntoView {
    let now = chrono::Local::now();
    let slots = window(&history, width);

    let cards = slots
        .slots()
        .iter()
        .map(|slot| {
            view! {
                <div
                    class=format!("w-2 h-5 rounded-sm {}", slot_class(slot.emphasis()))
                    title=slot.label(&now)
                />
            }
        })
        .collect_view();

    view! {
        <div class="flex gap-0.5 items-end">{cards}</div>
    }
}
