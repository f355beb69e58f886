//! Node entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file or folder in the CloudNest hierarchy.
///
/// Files and folders share one table; `is_folder` decides which fields are
/// meaningful. Folders never carry `content_ref`, `mime_type`, or a
/// non-zero `size_bytes`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Node {
    /// Unique node identifier.
    pub id: Uuid,
    /// Opaque owner id from the identity provider. Immutable; every query
    /// is scoped by it.
    pub owner_id: String,
    /// Parent folder id (None for root-level nodes).
    pub parent_id: Option<Uuid>,
    /// User-visible name.
    pub name: String,
    /// Whether this node is a folder. Immutable after creation.
    pub is_folder: bool,
    /// Size in bytes (0 for folders).
    pub size_bytes: i64,
    /// MIME type (None for folders).
    pub mime_type: Option<String>,
    /// Opaque handle into the external blob store (None for folders).
    pub content_ref: Option<String>,
    /// Opaque handle to a generated preview, if any.
    pub thumbnail_ref: Option<String>,
    /// Optional AI-generated or user caption; searchable.
    pub description: Option<String>,
    /// Whether the owner starred this node.
    pub is_starred: bool,
    /// Whether this node is in the trash.
    pub is_trash: bool,
    /// When the node was trashed (None iff `is_trash` is false).
    pub trashed_at: Option<DateTime<Utc>>,
    /// When the node was created.
    pub created_at: DateTime<Utc>,
    /// When the node was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl Node {
    /// Check if this is a root-level node (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check whether the stored content is an image, per its MIME type.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|m| m.starts_with("image/"))
    }
}

/// Data required to create a new node record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNode {
    /// Opaque owner id.
    pub owner_id: String,
    /// Parent folder (None for root).
    pub parent_id: Option<Uuid>,
    /// User-visible name.
    pub name: String,
    /// Whether the node is a folder.
    pub is_folder: bool,
    /// Size in bytes (0 for folders).
    pub size_bytes: i64,
    /// MIME type (None for folders).
    pub mime_type: Option<String>,
    /// Blob store handle (None for folders).
    pub content_ref: Option<String>,
    /// Preview handle (None for folders or files without one).
    pub thumbnail_ref: Option<String>,
    /// Optional caption.
    pub description: Option<String>,
}

impl CreateNode {
    /// Creation data for a folder.
    pub fn folder(owner_id: impl Into<String>, name: impl Into<String>, parent_id: Option<Uuid>) -> Self {
        Self {
            owner_id: owner_id.into(),
            parent_id,
            name: name.into(),
            is_folder: true,
            size_bytes: 0,
            mime_type: None,
            content_ref: None,
            thumbnail_ref: None,
            description: None,
        }
    }
}

/// Partial update applied to an existing node.
///
/// Deliberately carries no `parent_id` or `is_folder`: nodes are never
/// re-parented after creation and a node's kind is immutable, which keeps
/// the parent graph acyclic by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodePatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
}
