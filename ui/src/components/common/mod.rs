//! Common/Shared UI Components
//!
//! Reusable components used throughout the application.

mod icons;
mod status_dot;

pub use icons::*;
pub use status_dot::{RollupDot, StateBadge};
