//! Node creation: folders, file uploads, and prompt-generated images.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::{BlobStore, Captioner};
use cloudnest_database::store::NodeStore;
use cloudnest_entity::node::{CreateNode, Node, NodePatch};

use crate::context::RequestContext;

/// Incoming file upload, decoded from the transport.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// User-visible file name.
    pub name: String,
    /// Destination folder (None for root).
    pub parent_id: Option<Uuid>,
    /// MIME type reported by the client.
    pub mime_type: String,
    /// Raw file bytes.
    pub data: Bytes,
}

/// Creates nodes: folders directly, files through the blob store, and
/// AI-generated images through the captioner then the blob store.
#[derive(Debug, Clone)]
pub struct UploadService {
    store: Arc<dyn NodeStore>,
    blob_store: Arc<dyn BlobStore>,
    captioner: Option<Arc<dyn Captioner>>,
}

impl UploadService {
    /// Creates a new upload service. Pass `None` for the captioner to
    /// disable image descriptions and prompt generation.
    pub fn new(
        store: Arc<dyn NodeStore>,
        blob_store: Arc<dyn BlobStore>,
        captioner: Option<Arc<dyn Captioner>>,
    ) -> Self {
        Self {
            store,
            blob_store,
            captioner,
        }
    }

    /// Create an empty folder under `parent_id` (root when `None`).
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> AppResult<Node> {
        let name = validated_name(name)?;

        let node = self
            .store
            .create(&CreateNode::folder(&ctx.owner_id, name, parent_id))
            .await?;

        info!(node_id = %node.id, name = %node.name, "Created folder");
        Ok(node)
    }

    /// Upload a file: bytes to the blob store first, then the node record.
    ///
    /// If the blob upload fails nothing is persisted. For images a caption
    /// is requested best-effort; a captioner failure is logged and the
    /// upload proceeds without a description.
    pub async fn upload_file(&self, ctx: &RequestContext, upload: FileUpload) -> AppResult<Node> {
        let name = validated_name(&upload.name)?;
        if upload.data.is_empty() {
            return Err(AppError::validation("Uploaded file must not be empty"));
        }

        // Resolve the parent before touching the blob store so a bad
        // parent id cannot leave an orphaned blob behind.
        if let Some(parent_id) = upload.parent_id {
            let parent = self
                .store
                .find_by_id(&ctx.owner_id, parent_id)
                .await?
                .filter(|n| n.is_folder);
            if parent.is_none() {
                return Err(AppError::invalid_parent(format!(
                    "Parent {parent_id} is not a folder owned by the caller"
                )));
            }
        }

        let handle = self
            .blob_store
            .upload(upload.data, name, &ctx.owner_id)
            .await?;

        let description = if upload.mime_type.starts_with("image/") {
            self.describe_image(&handle.content_ref).await
        } else {
            None
        };

        let created = self
            .store
            .create(&CreateNode {
                owner_id: ctx.owner_id.clone(),
                parent_id: upload.parent_id,
                name: name.to_owned(),
                is_folder: false,
                size_bytes: handle.size_bytes,
                mime_type: Some(upload.mime_type.clone()),
                content_ref: Some(handle.content_ref.clone()),
                thumbnail_ref: handle.thumbnail_ref.clone(),
                description,
            })
            .await;

        match created {
            Ok(node) => {
                info!(
                    node_id = %node.id,
                    name = %node.name,
                    size_bytes = node.size_bytes,
                    "Uploaded file"
                );
                Ok(node)
            }
            Err(err) => {
                // The record never existed; reclaim the uploaded bytes.
                if let Err(cleanup_err) = self.blob_store.delete(&handle.content_ref).await {
                    warn!(
                        content_ref = %handle.content_ref,
                        error = %cleanup_err,
                        "Failed to clean up blob after create failure"
                    );
                }
                Err(err)
            }
        }
    }

    /// Generate an image from a text prompt and store it as a new file
    /// node. Fails with `ExternalService` when generation is unavailable.
    pub async fn generate_image(
        &self,
        ctx: &RequestContext,
        prompt: &str,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> AppResult<Node> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AppError::validation("Prompt must not be empty"));
        }
        let captioner = self
            .captioner
            .as_ref()
            .ok_or_else(|| AppError::external_service("Image generation is not configured"))?;

        let data = captioner.generate_image(prompt).await?;
        info!(bytes = data.len(), "Generated image from prompt");

        self.upload_file(
            ctx,
            FileUpload {
                name: name.to_owned(),
                parent_id,
                mime_type: "image/png".to_owned(),
                data,
            },
        )
        .await
    }

    /// Rename a node or change its description.
    pub async fn update_node(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        patch: NodePatch,
    ) -> AppResult<Node> {
        if let Some(name) = &patch.name {
            validated_name(name)?;
        }

        self.store
            .update(&ctx.owner_id, id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))
    }

    async fn describe_image(&self, content_ref: &str) -> Option<String> {
        let captioner = self.captioner.as_ref()?;
        match captioner.caption(content_ref).await {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(error = %err, "Caption generation failed, storing file without description");
                None
            }
        }
    }
}

fn validated_name(name: &str) -> AppResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    if trimmed.len() > 255 {
        return Err(AppError::validation("Name must be at most 255 characters"));
    }
    Ok(trimmed)
}
