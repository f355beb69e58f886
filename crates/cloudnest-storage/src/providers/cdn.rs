//! HTTP CDN blob store provider.
//!
//! Talks to an ImageKit-style upload/management API: multipart-free JSON
//! upload of base64 content, single delete by file id, and batched delete.
//! The returned file id is the opaque `content_ref` kept on node records.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use cloudnest_core::config::blob::CdnConfig;
use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::{BlobHandle, BlobStore};

/// Blob store backed by an external CDN HTTP API.
#[derive(Debug, Clone)]
pub struct CdnBlobStore {
    client: reqwest::Client,
    api_base_url: String,
    private_key: String,
}

/// Upload response body from the CDN.
#[derive(Debug, Deserialize)]
struct CdnUploadResponse {
    #[serde(rename = "fileId")]
    file_id: String,
    #[serde(rename = "thumbnailUrl")]
    thumbnail_url: Option<String>,
    size: i64,
}

impl CdnBlobStore {
    /// Create a new CDN provider from configuration.
    pub fn new(config: &CdnConfig) -> AppResult<Self> {
        if config.api_base_url.is_empty() {
            return Err(AppError::configuration("CDN api_base_url is not set"));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            private_key: config.private_key.clone(),
        })
    }

    /// Basic auth header value: the private key as username, empty password.
    fn auth_header(&self) -> String {
        format!("Basic {}", BASE64.encode(format!("{}:", self.private_key)))
    }
}

#[async_trait]
impl BlobStore for CdnBlobStore {
    fn provider_type(&self) -> &str {
        "cdn"
    }

    async fn upload(&self, data: Bytes, name: &str, folder_hint: &str) -> AppResult<BlobHandle> {
        let body = serde_json::json!({
            "file": BASE64.encode(&data),
            "fileName": name,
            "folder": folder_hint,
        });

        let response = self
            .client
            .post(format!("{}/files/upload", self.api_base_url))
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::with_source(
                cloudnest_core::error::ErrorKind::Storage,
                format!("CDN upload request failed: {e}"),
                e,
            ))?;

        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "CDN upload failed with status {}",
                response.status()
            )));
        }

        let parsed: CdnUploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::storage(format!("Malformed CDN upload response: {e}")))?;

        info!(file_id = %parsed.file_id, size = parsed.size, "Blob uploaded to CDN");

        Ok(BlobHandle {
            content_ref: parsed.file_id,
            thumbnail_ref: parsed.thumbnail_url,
            size_bytes: parsed.size,
        })
    }

    async fn delete(&self, content_ref: &str) -> AppResult<()> {
        let response = self
            .client
            .delete(format!("{}/files/{}", self.api_base_url, content_ref))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| AppError::storage(format!("CDN delete request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "CDN delete failed with status {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn bulk_delete(&self, content_refs: &[String]) -> AppResult<()> {
        if content_refs.is_empty() {
            return Ok(());
        }

        let body = serde_json::json!({ "fileIds": content_refs });

        let response = self
            .client
            .post(format!("{}/files/batch/deleteByFileIds", self.api_base_url))
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::storage(format!("CDN bulk delete request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "CDN bulk delete failed with status {}",
                response.status()
            )));
        }

        info!(count = content_refs.len(), "Blobs bulk-deleted from CDN");
        Ok(())
    }
}
