//! Navigation Components
//!
//! - `AppNav` - Side navigation with saved searches, alerts and dashboards
//! - `SearchableList` - Fuzzy-searchable list grouped by tag

mod app_nav;
mod searchable_list;

pub use app_nav::AppNav;
pub use searchable_list::SearchableList;
