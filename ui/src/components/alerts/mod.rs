//! Alerts Components
//!
//! - `AlertsPage` - Alert overview with loading/error/empty states
//! - `AlertCardList` / `AlertDetails` - Triage sections and alert rows
//! - `AlertHistoryCardList` - Fixed-width evaluation timeline
//! - `TagFilter` - Tag chips mirrored to the URL

mod card;
mod history;
mod page;
mod tag_filter;

pub use card::{AlertCardList, AlertDetails};
pub use history::AlertHistoryCardList;
pub use page::AlertsPage;
pub use tag_filter::TagFilter;
