//! Feature List State
//!
//! Owned container for both collections and their next-index counters.
//! Counters are only written by `apply_loaded` and `append`.

use crate::models::{
    BasicFeatureItem, FeatureCollections, FeatureKind, FeatureSave, LinkFeatureItem,
};

/// Next index for a collection: last index + 1, or 1 when empty.
///
/// Only the last element is consulted; indices are assumed to grow in
/// append order. Saturates at `i64::MAX` instead of overflowing.
pub fn next_id<T>(items: &[T], index_of: impl Fn(&T) -> i64) -> i64 {
    items
        .last()
        .map(|item| index_of(item).saturating_add(1))
        .unwrap_or(1)
}

/// Local mirror of the remote collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureListState {
    pub link: Vec<LinkFeatureItem>,
    pub basic: Vec<BasicFeatureItem>,
    /// None until a load succeeds
    next_link_id: Option<i64>,
    /// None until a load succeeds
    next_basic_id: Option<i64>,
}

impl FeatureListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a load has populated the counters
    pub fn is_loaded(&self) -> bool {
        self.next_link_id.is_some() && self.next_basic_id.is_some()
    }

    /// Index the next appended link card will get (1 while unloaded)
    pub fn next_link_id(&self) -> i64 {
        self.next_link_id.unwrap_or(1)
    }

    /// Index the next appended basic card will get (1 while unloaded)
    pub fn next_basic_id(&self) -> i64 {
        self.next_basic_id.unwrap_or(1)
    }

    pub fn next_id_for(&self, kind: FeatureKind) -> i64 {
        match kind {
            FeatureKind::Link => self.next_link_id(),
            FeatureKind::Basic => self.next_basic_id(),
        }
    }

    /// Replace both collections wholesale and re-derive the counters.
    /// Any local unsaved appends are discarded.
    pub fn apply_loaded(&mut self, collections: FeatureCollections) {
        let FeatureCollections { link, basic } = collections;
        self.next_link_id = Some(next_id(&link, |item| item.index));
        self.next_basic_id = Some(next_id(&basic, |item| item.index));
        self.link = link;
        self.basic = basic;
    }

    /// Append a placeholder card of `kind` and advance that kind's counter.
    ///
    /// Returns the full post-append collection to send to the store.
    pub fn append(&mut self, kind: FeatureKind) -> FeatureSave {
        match kind {
            FeatureKind::Link => {
                let index = self.next_link_id();
                self.link.push(LinkFeatureItem::placeholder(index));
                self.next_link_id = Some(index.saturating_add(1));
                FeatureSave::Link(self.link.clone())
            }
            FeatureKind::Basic => {
                let index = self.next_basic_id();
                self.basic.push(BasicFeatureItem::placeholder(index));
                self.next_basic_id = Some(index.saturating_add(1));
                FeatureSave::Basic(self.basic.clone())
            }
        }
    }
}
