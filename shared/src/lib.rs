//! Shared types and derivations for Beacon
//!
//! Everything the navigation and alerts views compute from fetched data:
//! - Saved search / dashboard entities and the grouped search index over them
//! - Alert records, triage buckets, the navigation rollup and history timeline
//! - Fetch states, URL query state, persisted UI state and configuration
//!
//! All of it is synchronous and free of browser APIs, so the UI crate can
//! re-derive on every render and this crate can be tested natively.

pub mod alerts;
pub mod config;
pub mod entities;
pub mod fetch;
pub mod query;
pub mod search;
pub mod store;

pub use alerts::{AlertRecord, AlertRollup, AlertState};
pub use config::{ConfigError, NavConfig};
pub use entities::{NamedEntity, SavedDashboard, SavedSearch};
pub use fetch::{FetchState, FetchStatus, ListResponse};
pub use search::{CollapseState, GroupedSearchIndex, ListAffordance};
pub use store::{KeyValueStore, MemoryStore, SharedStore, StoreError};
