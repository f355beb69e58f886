//! Identity provider configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external identity provider.
///
/// CloudNest never verifies credentials itself; it sends the bearer token
/// to the provider's introspection endpoint and trusts the owner id that
/// comes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token introspection endpoint URL.
    #[serde(default)]
    pub introspection_url: String,
    /// API key sent along with introspection requests.
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    10
}
