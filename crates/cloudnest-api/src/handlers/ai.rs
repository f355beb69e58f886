//! Image generation handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::GenerateImageRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/ai/images
pub async fn generate_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GenerateImageRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let name = req
        .name
        .unwrap_or_else(|| derived_file_name(&req.prompt));

    let node = state
        .upload_service
        .generate_image(&auth, &req.prompt, &name, req.parent_id)
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": node })))
}

/// Derive a file name from the first few words of the prompt.
fn derived_file_name(prompt: &str) -> String {
    let stem: String = prompt
        .split_whitespace()
        .take(5)
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase();

    if stem.is_empty() {
        "generated.png".to_string()
    } else {
        format!("{stem}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_file_name_uses_prompt_words() {
        assert_eq!(
            derived_file_name("A lighthouse at dusk, oil painting"),
            "a-lighthouse-at-dusk-oil.png"
        );
    }

    #[test]
    fn test_derived_file_name_falls_back_when_empty() {
        assert_eq!(derived_file_name("???"), "generated.png");
    }
}
