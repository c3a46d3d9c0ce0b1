//! Icon Components
//!
//! SVG icons used throughout the application.

use leptos::*;

/// Bell icon, filled when `filled` is set
#[component]
pub fn BellIcon(
    #[prop(default = "w-4 h-4")] class: &'static str,
    #[prop(into, default = false.into())] filled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill=move || if filled.get() { "currentColor" } else { "none" }
            stroke="currentColor"
            stroke-width="2"
        >
            <path d="M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9" />
            <path d="M13.73 21a2 2 0 0 1-3.46 0" />
        </svg>
    }
}

/// Chevron pointing right, rotated down when `open`
#[component]
pub fn ChevronIcon(
    #[prop(into)] open: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <svg
            class=move || format!("w-3 h-3 transition-transform {}", if open.get() { "rotate-90" } else { "" })
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
        >
            <polyline points="9 18 15 12 9 6" />
        </svg>
    }
}

/// Magnifying glass
#[component]
pub fn SearchIcon(
    #[prop(default = "w-4 h-4")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="11" cy="11" r="8" />
            <line x1="21" y1="21" x2="16.65" y2="16.65" />
        </svg>
    }
}

/// Close / clear icon
#[component]
pub fn CloseIcon(
    #[prop(default = "w-4 h-4")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </svg>
    }
}

/// Grid icon for dashboards
#[component]
pub fn DashboardIcon(
    #[prop(default = "w-4 h-4")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <rect x="3" y="3" width="7" height="7" />
            <rect x="14" y="3" width="7" height="7" />
            <rect x="14" y="14" width="7" height="7" />
            <rect x="3" y="14" width="7" height="7" />
        </svg>
    }
}
