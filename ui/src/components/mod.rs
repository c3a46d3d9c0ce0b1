//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `nav`: Side navigation with searchable, tag-grouped lists
//! - `alerts`: Alerts overview page
//! - `layout`: App shell
//! - `common`: Shared/reusable components

pub mod alerts;
pub mod common;
pub mod layout;
pub mod nav;
