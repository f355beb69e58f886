//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Parent folder (root when absent).
    pub parent_id: Option<Uuid>,
}

/// Rename / re-describe request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNodeRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Image generation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    /// Text prompt.
    pub prompt: String,
    /// Name for the stored file (defaults to a prompt-derived name).
    pub name: Option<String>,
    /// Destination folder (root when absent).
    pub parent_id: Option<Uuid>,
}

/// `GET /api/nodes` query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNodesParams {
    /// Folder to browse (root level when absent).
    pub parent_id: Option<Uuid>,
}

/// `GET /api/nodes/search` query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search term.
    pub q: String,
}
