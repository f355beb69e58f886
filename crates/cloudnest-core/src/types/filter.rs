//! Listing filters for the node tree.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-level listing filter.
///
/// `Starred` and `Search` exclude trashed rows; `Trash` returns only
/// trashed rows. Search matches case-insensitively against the node name
/// or a non-null description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeFilter {
    /// Active nodes at the root level (no parent).
    ActiveRoot,
    /// Active nodes directly inside the given folder.
    ActiveIn(Uuid),
    /// Starred, non-trashed nodes.
    Starred,
    /// Trashed nodes.
    Trash,
    /// Non-trashed nodes whose name or description contains the term.
    Search(String),
}

/// A caller's browsing intent, as it arrives at the API boundary.
///
/// Translated one-to-one into a [`NodeFilter`] by the query surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Browse the root level.
    Root,
    /// Browse inside a folder.
    Folder(Uuid),
    /// Show starred nodes.
    Starred,
    /// Show the trash bin.
    Trash,
    /// Search by name or description.
    Search(String),
}

impl NavigationIntent {
    /// Translate the intent into a store filter.
    pub fn into_filter(self) -> NodeFilter {
        match self {
            Self::Root => NodeFilter::ActiveRoot,
            Self::Folder(id) => NodeFilter::ActiveIn(id),
            Self::Starred => NodeFilter::Starred,
            Self::Trash => NodeFilter::Trash,
            Self::Search(term) => NodeFilter::Search(term),
        }
    }
}
