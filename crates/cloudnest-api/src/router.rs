//! Route definitions for the CloudNest HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(node_routes())
        .merge(folder_routes())
        .merge(ai_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Node browsing, upload, and lifecycle endpoints.
fn node_routes() -> Router<AppState> {
    Router::new()
        .route("/nodes", get(handlers::node::list_nodes))
        .route("/nodes/starred", get(handlers::node::list_starred))
        .route("/nodes/trash", get(handlers::node::list_trash))
        .route("/nodes/trash", delete(handlers::node::empty_trash))
        .route("/nodes/search", get(handlers::node::search_nodes))
        .route("/nodes/restore-all", patch(handlers::node::restore_all))
        .route("/nodes/upload", post(handlers::node::upload_node))
        .route("/nodes/{id}", get(handlers::node::get_node))
        .route("/nodes/{id}", patch(handlers::node::update_node))
        .route("/nodes/{id}", delete(handlers::node::delete_node))
        .route("/nodes/{id}/star", patch(handlers::node::toggle_star))
        .route("/nodes/{id}/trash", patch(handlers::node::trash_node))
        .route("/nodes/{id}/restore", patch(handlers::node::restore_node))
}

/// Folder creation.
fn folder_routes() -> Router<AppState> {
    Router::new().route("/folders", post(handlers::folder::create_folder))
}

/// Image generation.
fn ai_routes() -> Router<AppState> {
    Router::new().route("/ai/images", post(handlers::ai::generate_image))
}

/// Liveness probe, unauthenticated.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
