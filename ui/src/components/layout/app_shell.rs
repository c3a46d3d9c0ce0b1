//! App Shell Component
//!
//! Main layout container that combines:
//! - Side navigation
//! - Main content area

use leptos::*;

use crate::components::nav::AppNav;

/// Main application shell layout
#[component]
pub fn AppShell(
    /// Main content (routes)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="h-screen flex bg-slate-900 text-white overflow-hidden">
            <AppNav />

            // Content area
            <main class="flex-1 overflow-auto custom-scrollbar min-w-0">
                {children()}
            </main>
        </div>
    }
}

/// Placeholder for pages rendered outside this app
#[component]
pub fn EmptyPage(
    #[prop(default = "Select a saved search or dashboard")] message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-full text-slate-500">
            <p class="text-sm">{message}</p>
        </div>
    }
}
