//! The node store trait: CRUD persistence with the tree invariants
//! enforced at the boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use cloudnest_core::result::AppResult;
use cloudnest_core::types::NodeFilter;
use cloudnest_entity::node::{CreateNode, Node, NodePatch};

/// Persistent store for [`Node`] records.
///
/// Every method is scoped to an owner id; a cross-owner lookup is simply
/// absent (`None` / zero rows), never a distinct "forbidden" signal. Batch
/// mutations (`trash_many`, `restore_all`, `delete_many`) must apply as a
/// single atomic statement so a cascade can never be half-visible.
#[async_trait]
pub trait NodeStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create a node. Fails with `InvalidParent` when `parent_id` does not
    /// resolve to a folder owned by the same owner.
    async fn create(&self, data: &CreateNode) -> AppResult<Node>;

    /// Fetch a node by id, scoped to its owner.
    async fn find_by_id(&self, owner_id: &str, id: Uuid) -> AppResult<Option<Node>>;

    /// Apply a partial update and bump `updated_at`.
    async fn update(&self, owner_id: &str, id: Uuid, patch: &NodePatch) -> AppResult<Option<Node>>;

    /// Set the starred flag.
    async fn set_starred(&self, owner_id: &str, id: Uuid, starred: bool)
    -> AppResult<Option<Node>>;

    /// List direct children of a folder (root level when `parent_id` is
    /// `None`), regardless of lifecycle state.
    async fn list_children(&self, owner_id: &str, parent_id: Option<Uuid>)
    -> AppResult<Vec<Node>>;

    /// List nodes matching a filter.
    async fn list_by_filter(&self, owner_id: &str, filter: &NodeFilter) -> AppResult<Vec<Node>>;

    /// Mark the given nodes trashed in one batch. Returns affected rows.
    async fn trash_many(
        &self,
        owner_id: &str,
        ids: &[Uuid],
        trashed_at: DateTime<Utc>,
    ) -> AppResult<u64>;

    /// Restore a single trashed node. Returns `None` when the node is
    /// absent, not owned, or not trashed.
    async fn restore(&self, owner_id: &str, id: Uuid) -> AppResult<Option<Node>>;

    /// Restore every trashed node for the owner in one batch.
    async fn restore_all(&self, owner_id: &str) -> AppResult<u64>;

    /// List every trashed node for the owner.
    async fn find_trashed(&self, owner_id: &str) -> AppResult<Vec<Node>>;

    /// Remove a single row. Returns `true` if a row was deleted.
    async fn delete(&self, owner_id: &str, id: Uuid) -> AppResult<bool>;

    /// Remove the given rows in one statement. Returns affected rows.
    async fn delete_many(&self, owner_id: &str, ids: &[Uuid]) -> AppResult<u64>;
}
