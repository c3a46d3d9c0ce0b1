//! Layout Components
//!
//! - `AppShell` - Navigation plus content area
//! - `EmptyPage` - Placeholder content for routes rendered elsewhere

mod app_shell;

pub use app_shell::{AppShell, EmptyPage};
