//! Node lifecycle: starring, trash with folder cascade, restore,
//! permanent deletion, and emptying the trash.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::BlobStore;
use cloudnest_database::store::NodeStore;
use cloudnest_entity::node::Node;

use crate::context::RequestContext;
use crate::node::tree;

/// Drives node state transitions.
///
/// Trashing is reversible and cascades over folders; permanent deletion
/// and emptying the trash remove blob content first and are final.
/// Every precondition failure, including "exists but wrong state" and
/// "exists but not yours", reports `NotFound`.
#[derive(Debug, Clone)]
pub struct LifecycleService {
    store: Arc<dyn NodeStore>,
    blob_store: Arc<dyn BlobStore>,
}

impl LifecycleService {
    /// Creates a new lifecycle service.
    pub fn new(store: Arc<dyn NodeStore>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self { store, blob_store }
    }

    /// Fetch a single node owned by the caller.
    pub async fn get_node(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Node> {
        self.store
            .find_by_id(&ctx.owner_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))
    }

    /// Flip the starred flag on an active or trashed node.
    pub async fn toggle_star(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Node> {
        let node = self.get_node(ctx, id).await?;

        let updated = self
            .store
            .set_starred(&ctx.owner_id, id, !node.is_starred)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))?;

        info!(
            node_id = %id,
            starred = updated.is_starred,
            "Toggled star"
        );
        Ok(updated)
    }

    /// Move a node to the trash. Trashing a folder cascades over its whole
    /// subtree in one batch, so the cascade is never half-visible. Returns
    /// the number of nodes trashed.
    pub async fn trash(&self, ctx: &RequestContext, id: Uuid) -> AppResult<u64> {
        let node = self
            .store
            .find_by_id(&ctx.owner_id, id)
            .await?
            .filter(|n| !n.is_trash)
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))?;

        let ids = tree::collect_subtree(self.store.as_ref(), &ctx.owner_id, &node).await?;
        let affected = self
            .store
            .trash_many(&ctx.owner_id, &ids, Utc::now())
            .await?;

        info!(
            node_id = %id,
            is_folder = node.is_folder,
            affected,
            "Trashed node"
        );
        Ok(affected)
    }

    /// Restore a single trashed node to the active state.
    ///
    /// Deliberately not a cascade: restoring a folder does not restore its
    /// descendants, mirroring how trashing recorded them individually.
    pub async fn restore(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Node> {
        let node = self
            .store
            .restore(&ctx.owner_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found")))?;

        info!(node_id = %id, "Restored node from trash");
        Ok(node)
    }

    /// Restore every trashed node for the caller. Returns the count.
    pub async fn restore_all(&self, ctx: &RequestContext) -> AppResult<u64> {
        let affected = self.store.restore_all(&ctx.owner_id).await?;
        info!(affected, "Restored all trashed nodes");
        Ok(affected)
    }

    /// Permanently delete a single trashed node.
    ///
    /// Blob content is deleted before the row: if the blob store fails the
    /// record stays in the trash and the operation can be retried.
    pub async fn delete_forever(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let node = self
            .store
            .find_by_id(&ctx.owner_id, id)
            .await?
            .filter(|n| n.is_trash)
            .ok_or_else(|| AppError::not_found(format!("Node {id} not found in trash")))?;

        if let Some(content_ref) = &node.content_ref {
            self.blob_store.delete(content_ref).await?;
        }

        let deleted = self.store.delete(&ctx.owner_id, id).await?;
        if !deleted {
            // Raced with another delete; the node is gone either way.
            warn!(node_id = %id, "Node vanished between blob and row delete");
        }

        info!(node_id = %id, "Permanently deleted node");
        Ok(())
    }

    /// Permanently delete everything in the caller's trash.
    ///
    /// One bulk blob-store call for all file content, then one batch row
    /// delete, regardless of how many nodes are involved. Returns the
    /// number of nodes removed; an empty trash is a no-op returning zero.
    pub async fn empty_trash(&self, ctx: &RequestContext) -> AppResult<u64> {
        let trashed = self.store.find_trashed(&ctx.owner_id).await?;
        if trashed.is_empty() {
            return Ok(0);
        }

        let content_refs: Vec<String> = trashed
            .iter()
            .filter_map(|n| n.content_ref.clone())
            .collect();
        if !content_refs.is_empty() {
            self.blob_store.bulk_delete(&content_refs).await?;
        }

        let ids: Vec<Uuid> = trashed.iter().map(|n| n.id).collect();
        let affected = self.store.delete_many(&ctx.owner_id, &ids).await?;

        info!(affected, blobs = content_refs.len(), "Emptied trash");
        Ok(affected)
    }
}
