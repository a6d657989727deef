//! Remote Feature Store
//!
//! Abstract interface to the feature storage endpoint, plus the HTTP
//! implementation used by the front end.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::models::{FeatureCollections, FeatureSave};

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid store configuration: {0}")]
    Config(String),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Store returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Malformed store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Contract the component assumes of the remote store
///
/// Futures are `?Send`: the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait FeatureStore {
    /// Current persisted state of both collections
    async fn fetch_features(&self) -> StoreResult<FeatureCollections>;

    /// Replace the persisted collection of `save.kind()` with its items
    async fn save_features(&self, save: &FeatureSave) -> StoreResult<()>;
}

/// `GET`/`POST {base_url}/features` over reqwest
#[derive(Debug, Clone)]
pub struct HttpFeatureStore {
    client: Client,
    features_url: Url,
}

impl HttpFeatureStore {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        Ok(Self {
            client: Client::new(),
            features_url: config.features_url()?,
        })
    }

    pub fn features_url(&self) -> &Url {
        &self.features_url
    }
}

/// Any non-2xx status is an error naming the status and URL.
pub(crate) fn check_status(status: StatusCode, url: &Url) -> StoreResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Decode a fetch response body; both `link` and `basic` are required.
pub(crate) fn decode_collections(body: &str) -> StoreResult<FeatureCollections> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait(?Send)]
impl FeatureStore for HttpFeatureStore {
    async fn fetch_features(&self) -> StoreResult<FeatureCollections> {
        log::debug!("[STORE] GET {}", self.features_url);
        let response = self.client.get(self.features_url.clone()).send().await?;
        check_status(response.status(), &self.features_url)?;
        let body = response.text().await?;
        decode_collections(&body)
    }

    async fn save_features(&self, save: &FeatureSave) -> StoreResult<()> {
        log::debug!(
            "[STORE] POST {} kind={} items={}",
            self.features_url,
            save.kind(),
            save.len()
        );
        let response = self
            .client
            .post(self.features_url.clone())
            .json(save)
            .send()
            .await?;
        check_status(response.status(), &self.features_url)
    }
}
