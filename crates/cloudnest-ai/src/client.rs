//! Generative API client (Gemini-style `generateContent` endpoint).

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use serde::Deserialize;
use tracing::debug;

use cloudnest_core::config::ai::AiConfig;
use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::Captioner;

/// [`Captioner`] backed by a hosted generative model API.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    client: reqwest::Client,
    api_base_url: String,
    api_key: String,
    caption_model: String,
    image_model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

impl GenAiClient {
    /// Create a new client from configuration.
    pub fn new(config: &AiConfig) -> AppResult<Self> {
        if config.api_base_url.is_empty() {
            return Err(AppError::configuration("ai.api_base_url is not set"));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            caption_model: config.caption_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    async fn generate(&self, model: &str, body: serde_json::Value) -> AppResult<GenerateResponse> {
        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.api_base_url, model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Generative API request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Generative API returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Malformed generative response: {e}")))
    }
}

#[async_trait]
impl Captioner for GenAiClient {
    async fn caption(&self, content_ref: &str) -> AppResult<String> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": "Describe this image in one short sentence for a file search index." },
                    { "fileData": { "fileUri": content_ref } }
                ]
            }]
        });

        let parsed = self.generate(&self.caption_model, body).await?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::external_service("Caption response had no text"))?;

        debug!(content_ref = %content_ref, "Caption generated");
        Ok(text)
    }

    async fn generate_image(&self, prompt: &str) -> AppResult<Bytes> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["IMAGE"] }
        });

        let parsed = self.generate(&self.image_model, body).await?;

        let encoded = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts)
            .unwrap_or_default()
            .into_iter()
            .find_map(|p| p.inline_data)
            .map(|d| d.data)
            .ok_or_else(|| AppError::external_service("Image response had no inline data"))?;

        let bytes = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| AppError::external_service(format!("Invalid image payload: {e}")))?;

        Ok(Bytes::from(bytes))
    }
}
