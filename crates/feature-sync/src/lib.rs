//! Feature Sync
//!
//! Client-side state for the feature showcase: two card collections
//! mirrored from a remote store, with per-collection next-index counters.
//!
//! - models: wire-level data structures
//! - state: the owned state container (collections + counters)
//! - store: remote store abstraction and its HTTP implementation
//! - sync: `FeatureListSync`, the load/append component logic

mod config;
mod models;
mod state;
mod store;
mod sync;


pub use config::StoreConfig;
pub use models::{
    BasicFeatureItem, FeatureCollections, FeatureKind, FeatureSave, LinkFeatureItem, LinkTarget,
};
pub use state::{next_id, FeatureListState};
pub use store::{FeatureStore, HttpFeatureStore, StoreError, StoreResult};
pub use sync::{FeatureListSync, FetchTask, SaveTask};
