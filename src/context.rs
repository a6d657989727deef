//! Application Context
//!
//! Shared feature state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use feature_sync::{
    BasicFeatureItem, FeatureKind, FeatureListSync, HttpFeatureStore, LinkFeatureItem,
};

/// Sync component held in a local (non-Send) signal
pub type SyncSignal = RwSignal<FeatureListSync<HttpFeatureStore>, LocalStorage>;

#[derive(Clone, Copy)]
pub struct AppContext {
    sync: SyncSignal,
}

impl AppContext {
    pub fn new(sync: SyncSignal) -> Self {
        Self { sync }
    }

    pub fn link_items(&self) -> Vec<LinkFeatureItem> {
        self.sync.with(|sync| sync.state().link.clone())
    }

    pub fn basic_items(&self) -> Vec<BasicFeatureItem> {
        self.sync.with(|sync| sync.state().basic.clone())
    }

    pub fn is_loaded(&self) -> bool {
        self.sync.with(|sync| sync.state().is_loaded())
    }

    /// Fetch both collections once; failures only reach the console
    pub fn load(&self) {
        let sync = self.sync;
        let fetch = sync.with_untracked(|sync| sync.fetch());
        spawn_local(async move {
            match fetch.await {
                Ok(collections) => sync.update(|sync| sync.apply_loaded(collections)),
                Err(e) => log::error!("[APP] Failed to load features: {}", e),
            }
        });
    }

    /// Append a placeholder card; the remote write runs in the background
    pub fn append(&self, kind: FeatureKind) {
        let Some(save) = self.sync.try_update(|sync| sync.append_item(kind)) else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = save.await {
                log::error!("[APP] Failed to save {} features: {}", kind, e);
            }
        });
    }
}
