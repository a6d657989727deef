//! Store Configuration
//!
//! Where the remote feature store lives.

use reqwest::Url;

use crate::store::{StoreError, StoreResult};

/// Path of the feature resource below `base_url`
const FEATURES_PATH: &str = "features";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Absolute base URL, e.g. `https://example.com/api`
    pub base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `{base_url}/features`, tolerant of a trailing slash on the base
    pub fn features_url(&self) -> StoreResult<Url> {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(StoreError::Config("base_url is empty".to_string()));
        }
        Url::parse(&format!("{}/{}", base, FEATURES_PATH)).map_err(|e| {
            StoreError::Config(format!("invalid base_url '{}': {}", self.base_url, e))
        })
    }
}
