//! UI Configuration
//!
//! Optional `beacon.toml` served next to the UI bundle. Every field has a
//! default, so an empty or missing file yields the stock behaviour.

use serde::{Deserialize, Serialize};

use crate::alerts::HISTORY_ITEMS;
use crate::search::DEFAULT_THRESHOLD;

/// Errors raised while loading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Base URL of the API; empty means the page origin
    pub api_base_url: String,

    /// Number of cards in each alert history row
    pub history_width: usize,

    pub search: SearchConfig,
    pub labels: LabelConfig,
    pub features: FeatureFlags,
}

/// Fuzzy search tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum error ratio (errors / query length) for a match
    pub fuzzy_threshold: f64,
}

/// Names of the untagged groups of each navigation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub saved_searches: String,
    pub saved_dashboards: String,
}

/// Feature toggles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the disabled alerts section and the disable action
    pub disable_alerts: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            history_width: HISTORY_ITEMS,
            search: SearchConfig::default(),
            labels: LabelConfig::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            saved_searches: "Saved Searches".to_string(),
            saved_dashboards: "Saved Dashboards".to_string(),
        }
    }
}

impl NavConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: NavConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_width == 0 {
            return Err(ConfigError::Invalid(
                "history_width must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.search.fuzzy_threshold) {
            return Err(ConfigError::Invalid(format!(
                "search.fuzzy_threshold must be between 0 and 1, got {}",
                self.search.fuzzy_threshold
            )));
        }
        Ok(())
    }
}
