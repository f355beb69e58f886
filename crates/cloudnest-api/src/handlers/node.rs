//! Node browsing, upload, and lifecycle handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use bytes::Bytes;
use uuid::Uuid;

use cloudnest_core::error::AppError;
use cloudnest_core::types::NavigationIntent;
use cloudnest_service::node::upload::FileUpload;

use crate::dto::request::{ListNodesParams, SearchParams, UpdateNodeRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/nodes?parent_id=...
pub async fn list_nodes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListNodesParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let intent = match params.parent_id {
        Some(id) => NavigationIntent::Folder(id),
        None => NavigationIntent::Root,
    };
    let nodes = state.query_service.browse(&auth, intent).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": nodes })))
}

/// GET /api/nodes/starred
pub async fn list_starred(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let nodes = state
        .query_service
        .browse(&auth, NavigationIntent::Starred)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": nodes })))
}

/// GET /api/nodes/trash
pub async fn list_trash(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let nodes = state
        .query_service
        .browse(&auth, NavigationIntent::Trash)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": nodes })))
}

/// GET /api/nodes/search?q=term
pub async fn search_nodes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let nodes = state
        .query_service
        .browse(&auth, NavigationIntent::Search(params.q))
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": nodes })))
}

/// GET /api/nodes/{id}
pub async fn get_node(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let node = state.lifecycle_service.get_node(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": node })))
}

/// POST /api/nodes/upload — multipart upload
pub async fn upload_node(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut parent_id: Option<Uuid> = None;
    let mut file_name: Option<String> = None;
    let mut mime_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "parent_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                parent_id = Some(
                    Uuid::parse_str(&text)
                        .map_err(|_| AppError::validation("Invalid parent_id"))?,
                );
            }
            "file" => {
                file_name = field.file_name().map(String::from);
                mime_type = field.content_type().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let file_name = file_name.ok_or_else(|| AppError::validation("file is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file data is required"))?;

    let node = state
        .upload_service
        .upload_file(
            &auth,
            FileUpload {
                name: file_name,
                parent_id,
                mime_type: mime_type.unwrap_or_else(|| "application/octet-stream".to_string()),
                data,
            },
        )
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": node })))
}

/// PATCH /api/nodes/{id}
pub async fn update_node(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNodeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let node = state
        .upload_service
        .update_node(
            &auth,
            id,
            cloudnest_entity::node::NodePatch {
                name: req.name,
                description: req.description,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": node })))
}

/// PATCH /api/nodes/{id}/star
pub async fn toggle_star(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let node = state.lifecycle_service.toggle_star(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": node })))
}

/// PATCH /api/nodes/{id}/trash
pub async fn trash_node(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = state.lifecycle_service.trash(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "affected": affected } }),
    ))
}

/// PATCH /api/nodes/{id}/restore
pub async fn restore_node(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let node = state.lifecycle_service.restore(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": node })))
}

/// PATCH /api/nodes/restore-all
pub async fn restore_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = state.lifecycle_service.restore_all(&auth).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "affected": affected } }),
    ))
}

/// DELETE /api/nodes/{id} — permanent, trashed nodes only
pub async fn delete_node(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.lifecycle_service.delete_forever(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Node deleted" } }),
    ))
}

/// DELETE /api/nodes/trash — empty the trash
pub async fn empty_trash(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = state.lifecycle_service.empty_trash(&auth).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "affected": affected } }),
    ))
}
