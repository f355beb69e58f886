//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use cloudnest_database::connection;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
///
/// Always answers 200; the body reports whether the database responded.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match connection::ping(&state.db_pool).await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Database did not answer health ping");
            "unavailable"
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    }))
}
