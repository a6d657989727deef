//! Feature Models
//!
//! Data structures matching the remote feature store.

use serde::{Deserialize, Serialize};

/// Title given to every newly appended card
pub const PLACEHOLDER_TITLE: &str = "제목을 입력하세요.";
/// Description given to newly appended basic cards
pub const PLACEHOLDER_DESCRIPTION: &str = "설명을 입력하세요.";
/// Image given to newly appended basic cards
pub const PLACEHOLDER_BASIC_IMAGE: &str = "/img/undraw_docusaurus_mountain.svg";
/// Image given to newly appended link cards
pub const PLACEHOLDER_LINK_IMAGE: &str = "/img/rose.png";
/// Internal path given to newly appended link cards
pub const PLACEHOLDER_TO: &str = "/docs/intro";

/// Which collection an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Link,
    Basic,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Link => "link",
            FeatureKind::Basic => "basic",
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive card (image, title, optional description)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicFeatureItem {
    pub index: i64,
    pub title: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BasicFeatureItem {
    /// Placeholder card appended by the "add" action
    pub fn placeholder(index: i64) -> Self {
        Self {
            index,
            title: PLACEHOLDER_TITLE.to_string(),
            image: PLACEHOLDER_BASIC_IMAGE.to_string(),
            description: Some(PLACEHOLDER_DESCRIPTION.to_string()),
        }
    }
}

/// Navigable card: `to` is an internal path, `href` an external URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkFeatureItem {
    pub index: i64,
    pub title: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Where a link card navigates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Internal(&'a str),
    External(&'a str),
}

impl LinkFeatureItem {
    /// Placeholder card appended by the "add" action
    pub fn placeholder(index: i64) -> Self {
        Self {
            index,
            title: PLACEHOLDER_TITLE.to_string(),
            image: PLACEHOLDER_LINK_IMAGE.to_string(),
            to: Some(PLACEHOLDER_TO.to_string()),
            href: Some(String::new()),
        }
    }

    /// A non-empty `href` wins over `to`; empty strings count as unset.
    pub fn target<'a>(&'a self) -> Option<LinkTarget<'a>> {
        let non_empty = |s: &'a Option<String>| s.as_deref().filter(|v| !v.is_empty());
        non_empty(&self.href)
            .map(LinkTarget::External)
            .or_else(|| non_empty(&self.to).map(LinkTarget::Internal))
    }
}

/// Both collections as returned by the store
///
/// Neither key has a serde default: a response missing one is malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCollections {
    pub link: Vec<LinkFeatureItem>,
    pub basic: Vec<BasicFeatureItem>,
}

/// One remote write: the full post-append collection of a single kind
///
/// Serialized as `{"kind": "link", "items": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum FeatureSave {
    Link(Vec<LinkFeatureItem>),
    Basic(Vec<BasicFeatureItem>),
}

impl FeatureSave {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureSave::Link(_) => FeatureKind::Link,
            FeatureSave::Basic(_) => FeatureKind::Basic,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FeatureSave::Link(items) => items.len(),
            FeatureSave::Basic(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
