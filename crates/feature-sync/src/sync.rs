//! FeatureListSync
//!
//! Loads both collections once, appends placeholder cards optimistically and
//! hands back the remote write as a task for the caller to spawn.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::models::{FeatureCollections, FeatureKind, FeatureSave};
use crate::state::FeatureListState;
use crate::store::{FeatureStore, StoreResult};

/// Pending remote write for one append; not yet started until polled.
pub type SaveTask = Pin<Box<dyn Future<Output = StoreResult<()>>>>;

/// Pending remote fetch of both collections.
pub type FetchTask = Pin<Box<dyn Future<Output = StoreResult<FeatureCollections>>>>;

pub struct FeatureListSync<S> {
    store: Rc<S>,
    state: FeatureListState,
}

impl<S: FeatureStore + 'static> FeatureListSync<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Rc::new(store),
            state: FeatureListState::new(),
        }
    }

    pub fn state(&self) -> &FeatureListState {
        &self.state
    }

    /// Shared handle to the store
    pub fn store(&self) -> Rc<S> {
        Rc::clone(&self.store)
    }

    /// Fetch both collections and replace local state.
    ///
    /// Not retried. On error the state is left as it was. Callers that cannot
    /// hold `&mut self` across the await run `fetch` and `apply_loaded`
    /// themselves; this is exactly that sequence.
    pub async fn load(&mut self) -> StoreResult<()> {
        let collections = self.fetch().await?;
        self.apply_loaded(collections);
        Ok(())
    }

    /// Start the remote fetch without borrowing `self` while it runs
    pub fn fetch(&self) -> FetchTask {
        let store = Rc::clone(&self.store);
        Box::pin(async move { store.fetch_features().await })
    }

    pub fn apply_loaded(&mut self, collections: FeatureCollections) {
        log::debug!(
            "[SYNC] Loaded {} link / {} basic features",
            collections.link.len(),
            collections.basic.len()
        );
        self.state.apply_loaded(collections);
    }

    /// Append a placeholder card and commit it locally right away.
    ///
    /// The returned task carries the full post-append collection; local state
    /// does not wait for it and is not rolled back if it fails.
    pub fn append_item(&mut self, kind: FeatureKind) -> SaveTask {
        let index = self.state.next_id_for(kind);
        let save = self.state.append(kind);
        log::debug!("[SYNC] Appended {} feature #{}", kind, index);
        save_task(Rc::clone(&self.store), save)
    }
}

fn save_task<S: FeatureStore + 'static>(store: Rc<S>, save: FeatureSave) -> SaveTask {
    Box::pin(async move { store.save_features(&save).await })
}

impl<S> std::fmt::Debug for FeatureListSync<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureListSync")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
