//! Application builder — wires providers, services, and routes into an
//! Axum app and runs it.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use cloudnest_ai::GenAiClient;
use cloudnest_auth::HttpIdentityProvider;
use cloudnest_core::config::AppConfig;
use cloudnest_core::error::AppError;
use cloudnest_core::traits::{Captioner, IdentityProvider};
use cloudnest_database::repositories::node::PgNodeStore;
use cloudnest_database::store::NodeStore;
use cloudnest_service::node::{LifecycleService, QueryService, UploadService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the full application state from configuration and a pool.
pub fn build_state(config: Arc<AppConfig>, db_pool: PgPool) -> Result<AppState, AppError> {
    let node_store: Arc<dyn NodeStore> = Arc::new(PgNodeStore::new(db_pool.clone()));

    tracing::info!(provider = %config.blob.provider, "Initializing blob store");
    let blob_store = cloudnest_storage::build_provider(&config.blob)?;

    let identity: Arc<dyn IdentityProvider> = Arc::new(HttpIdentityProvider::new(&config.auth)?);

    let captioner: Option<Arc<dyn Captioner>> = if config.ai.captions_enabled {
        tracing::info!(model = %config.ai.caption_model, "Caption generation enabled");
        Some(Arc::new(GenAiClient::new(&config.ai)?))
    } else {
        tracing::info!("Caption generation disabled");
        None
    };

    let lifecycle_service = Arc::new(LifecycleService::new(
        Arc::clone(&node_store),
        Arc::clone(&blob_store),
    ));
    let query_service = Arc::new(QueryService::new(Arc::clone(&node_store)));
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&node_store),
        Arc::clone(&blob_store),
        captioner,
    ));

    Ok(AppState {
        config,
        db_pool,
        node_store,
        blob_store,
        identity,
        lifecycle_service,
        query_service,
        upload_service,
    })
}

/// Runs the CloudNest server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let config = Arc::new(config);
    let state = build_state(Arc::clone(&config), db_pool)?;
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "CloudNest listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CloudNest server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
