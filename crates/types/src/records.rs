//! Records read from the repository database

use crate::content::ContentUrl;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of `alf_content_url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub content_url: ContentUrl,
    /// Size in bytes recorded by the repository
    pub content_size: i64,
}

impl ContentRecord {
    pub fn new(content_url: impl Into<ContentUrl>, content_size: i64) -> Self {
        Self {
            content_url: content_url.into(),
            content_size,
        }
    }
}

/// A node owning a content property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    pub store_id: i64,
    pub uuid: String,
}

/// A store partition, used only to format node references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub protocol: String,
    pub identifier: String,
}

/// Human-readable reference to the node owning a content URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reference")]
pub enum NodeRef {
    /// `protocol://identifier/uuid`
    Resolved(String),
    /// No node points at the content
    NotFound,
}

impl NodeRef {
    /// Sentinel shown when no owning node exists
    pub const NOT_FOUND: &'static str = "no node";

    /// Build the reference of `node` inside `store`
    #[must_use]
    pub fn for_node(store: &Store, node: &Node) -> Self {
        Self::Resolved(format!(
            "{}://{}/{}",
            store.protocol, store.identifier, node.uuid
        ))
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(reference) => f.write_str(reference),
            Self::NotFound => f.write_str(Self::NOT_FOUND),
        }
    }
}
