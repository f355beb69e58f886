//! Blob store trait for the external object-storage CDN.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Opaque handles returned by a successful upload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BlobHandle {
    /// Reference to the stored blob (URL or provider file id).
    pub content_ref: String,
    /// Reference to a generated preview, when the provider produced one.
    pub thumbnail_ref: Option<String>,
    /// Stored size in bytes.
    pub size_bytes: i64,
}

/// Trait for the external blob store holding actual file bytes.
///
/// CloudNest only ever treats the store as opaque: it uploads bytes, keeps
/// the returned handles on the node record, and deletes by handle. Any
/// provider failure surfaces as a `Storage` error and the caller decides
/// whether the surrounding operation aborts.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "cdn", "local").
    fn provider_type(&self) -> &str;

    /// Upload bytes under the given name. `folder_hint` groups blobs on the
    /// provider side and has no bearing on the node tree.
    async fn upload(&self, data: Bytes, name: &str, folder_hint: &str) -> AppResult<BlobHandle>;

    /// Delete a single blob by its content reference.
    async fn delete(&self, content_ref: &str) -> AppResult<()>;

    /// Delete many blobs in one provider call.
    async fn bulk_delete(&self, content_refs: &[String]) -> AppResult<()>;
}
