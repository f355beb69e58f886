//! Folder creation handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::CreateFolderRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state
        .upload_service
        .create_folder(&auth, &req.name, req.parent_id)
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}
