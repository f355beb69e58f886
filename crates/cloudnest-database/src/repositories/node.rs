//! PostgreSQL node store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use cloudnest_core::error::{AppError, ErrorKind};
use cloudnest_core::result::AppResult;
use cloudnest_core::types::NodeFilter;
use cloudnest_entity::node::{CreateNode, Node, NodePatch};

use crate::store::NodeStore;

/// [`NodeStore`] backed by the `nodes` table.
#[derive(Debug, Clone)]
pub struct PgNodeStore {
    pool: PgPool,
}

impl PgNodeStore {
    /// Create a new node store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NodeStore for PgNodeStore {
    async fn create(&self, data: &CreateNode) -> AppResult<Node> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

        // The parent check and the insert share one transaction so a
        // concurrent permanent delete cannot slip between them.
        if let Some(parent_id) = data.parent_id {
            let parent_is_folder: Option<bool> = sqlx::query_scalar(
                "SELECT is_folder FROM nodes WHERE id = $1 AND owner_id = $2",
            )
            .bind(parent_id)
            .bind(&data.owner_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to resolve parent", e))?;

            match parent_is_folder {
                Some(true) => {}
                _ => return Err(AppError::invalid_parent("Parent folder not found")),
            }
        }

        let node = sqlx::query_as::<_, Node>(
            "INSERT INTO nodes (owner_id, parent_id, name, is_folder, size_bytes, \
                                mime_type, content_ref, thumbnail_ref, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.owner_id)
        .bind(data.parent_id)
        .bind(&data.name)
        .bind(data.is_folder)
        .bind(data.size_bytes)
        .bind(&data.mime_type)
        .bind(&data.content_ref)
        .bind(&data.thumbnail_ref)
        .bind(&data.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create node", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit create", e))?;

        Ok(node)
    }

    async fn find_by_id(&self, owner_id: &str, id: Uuid) -> AppResult<Option<Node>> {
        sqlx::query_as::<_, Node>("SELECT * FROM nodes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find node", e))
    }

    async fn update(&self, owner_id: &str, id: Uuid, patch: &NodePatch) -> AppResult<Option<Node>> {
        sqlx::query_as::<_, Node>(
            "UPDATE nodes SET name = COALESCE($3, name), \
                              description = COALESCE($4, description), \
                              updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(&patch.name)
        .bind(&patch.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update node", e))
    }

    async fn set_starred(
        &self,
        owner_id: &str,
        id: Uuid,
        starred: bool,
    ) -> AppResult<Option<Node>> {
        sqlx::query_as::<_, Node>(
            "UPDATE nodes SET is_starred = $3, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(starred)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set starred", e))
    }

    async fn list_children(
        &self,
        owner_id: &str,
        parent_id: Option<Uuid>,
    ) -> AppResult<Vec<Node>> {
        let query = match parent_id {
            Some(_) => {
                "SELECT * FROM nodes WHERE owner_id = $1 AND parent_id = $2 ORDER BY id ASC"
            }
            None => "SELECT * FROM nodes WHERE owner_id = $1 AND parent_id IS NULL ORDER BY id ASC",
        };

        let mut q = sqlx::query_as::<_, Node>(query).bind(owner_id);
        if let Some(parent_id) = parent_id {
            q = q.bind(parent_id);
        }

        q.fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn list_by_filter(&self, owner_id: &str, filter: &NodeFilter) -> AppResult<Vec<Node>> {
        let result = match filter {
            NodeFilter::ActiveRoot => {
                sqlx::query_as::<_, Node>(
                    "SELECT * FROM nodes WHERE owner_id = $1 AND parent_id IS NULL \
                     AND is_trash = FALSE ORDER BY is_folder DESC, name ASC",
                )
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await
            }
            NodeFilter::ActiveIn(parent_id) => {
                sqlx::query_as::<_, Node>(
                    "SELECT * FROM nodes WHERE owner_id = $1 AND parent_id = $2 \
                     AND is_trash = FALSE ORDER BY is_folder DESC, name ASC",
                )
                .bind(owner_id)
                .bind(parent_id)
                .fetch_all(&self.pool)
                .await
            }
            NodeFilter::Starred => {
                sqlx::query_as::<_, Node>(
                    "SELECT * FROM nodes WHERE owner_id = $1 AND is_starred = TRUE \
                     AND is_trash = FALSE ORDER BY name ASC",
                )
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await
            }
            NodeFilter::Trash => {
                sqlx::query_as::<_, Node>(
                    "SELECT * FROM nodes WHERE owner_id = $1 AND is_trash = TRUE \
                     ORDER BY trashed_at DESC",
                )
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await
            }
            NodeFilter::Search(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Node>(
                    "SELECT * FROM nodes WHERE owner_id = $1 AND is_trash = FALSE \
                     AND (name ILIKE $2 OR (description IS NOT NULL AND description ILIKE $2)) \
                     ORDER BY name ASC",
                )
                .bind(owner_id)
                .bind(pattern)
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list nodes", e))
    }

    async fn trash_many(
        &self,
        owner_id: &str,
        ids: &[Uuid],
        trashed_at: DateTime<Utc>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE nodes SET is_trash = TRUE, trashed_at = $3, updated_at = NOW() \
             WHERE owner_id = $1 AND id = ANY($2)",
        )
        .bind(owner_id)
        .bind(ids)
        .bind(trashed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to trash nodes", e))?;

        Ok(result.rows_affected())
    }

    async fn restore(&self, owner_id: &str, id: Uuid) -> AppResult<Option<Node>> {
        sqlx::query_as::<_, Node>(
            "UPDATE nodes SET is_trash = FALSE, trashed_at = NULL, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND is_trash = TRUE RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to restore node", e))
    }

    async fn restore_all(&self, owner_id: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE nodes SET is_trash = FALSE, trashed_at = NULL, updated_at = NOW() \
             WHERE owner_id = $1 AND is_trash = TRUE",
        )
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to restore nodes", e))?;

        Ok(result.rows_affected())
    }

    async fn find_trashed(&self, owner_id: &str) -> AppResult<Vec<Node>> {
        sqlx::query_as::<_, Node>(
            "SELECT * FROM nodes WHERE owner_id = $1 AND is_trash = TRUE ORDER BY id ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list trashed nodes", e))
    }

    async fn delete(&self, owner_id: &str, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM nodes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete node", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_many(&self, owner_id: &str, ids: &[Uuid]) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM nodes WHERE owner_id = $1 AND id = ANY($2)")
            .bind(owner_id)
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete nodes", e))?;

        Ok(result.rows_affected())
    }
}
