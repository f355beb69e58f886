//! Token introspection client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use cloudnest_core::config::auth::AuthConfig;
use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::IdentityProvider;

/// [`IdentityProvider`] backed by an HTTP token-introspection endpoint.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    introspection_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    active: bool,
    owner_id: Option<String>,
}

impl HttpIdentityProvider {
    /// Create a new provider from configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        if config.introspection_url.is_empty() {
            return Err(AppError::configuration(
                "auth.introspection_url is not set",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            introspection_url: config.introspection_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn verify(&self, token: &str) -> AppResult<String> {
        let response = self
            .client
            .post(&self.introspection_url)
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await
            .map_err(|e| AppError::unauthenticated(format!("Introspection request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::unauthenticated(format!(
                "Introspection rejected with status {}",
                response.status()
            )));
        }

        let parsed: IntrospectionResponse = response
            .json()
            .await
            .map_err(|e| AppError::unauthenticated(format!("Malformed introspection response: {e}")))?;

        match (parsed.active, parsed.owner_id) {
            (true, Some(owner_id)) if !owner_id.is_empty() => {
                debug!(owner_id = %owner_id, "Token verified");
                Ok(owner_id)
            }
            _ => Err(AppError::unauthenticated("Token is not active")),
        }
    }
}
