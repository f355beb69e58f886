//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use cloudnest_core::config::AppConfig;
use cloudnest_core::traits::{BlobStore, IdentityProvider};
use cloudnest_database::store::NodeStore;
use cloudnest_service::node::{LifecycleService, QueryService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Node persistence
    pub node_store: Arc<dyn NodeStore>,
    /// External blob store
    pub blob_store: Arc<dyn BlobStore>,
    /// Token verifier
    pub identity: Arc<dyn IdentityProvider>,

    /// Lifecycle transitions (star, trash, restore, delete)
    pub lifecycle_service: Arc<LifecycleService>,
    /// Browsing and search
    pub query_service: Arc<QueryService>,
    /// Folder creation, uploads, image generation
    pub upload_service: Arc<UploadService>,
}
