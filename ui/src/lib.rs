//! Beacon UI Library
//!
//! Browser front end for Beacon: the side navigation over saved searches and
//! dashboards, and the alerts overview page.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: HTTP API client behind the `NavClient` trait
//! - [`components`]: UI components (navigation, alerts page, layout)
//! - [`state`]: Global state and the browser-backed store

pub mod app;
pub mod client;
pub mod components;
pub mod state;

pub use app::App;
