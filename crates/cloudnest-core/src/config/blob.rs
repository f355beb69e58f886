//! Blob store (CDN) configuration.

use serde::{Deserialize, Serialize};

/// Top-level blob store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobStoreConfig {
    /// Which provider to use: `"cdn"` or `"local"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// CDN provider configuration.
    #[serde(default)]
    pub cdn: CdnConfig,
    /// Local filesystem provider configuration.
    #[serde(default)]
    pub local: LocalBlobConfig,
}

/// Configuration for the HTTP CDN provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CdnConfig {
    /// Base URL of the CDN upload/management API.
    #[serde(default)]
    pub api_base_url: String,
    /// Private API key.
    #[serde(default)]
    pub private_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Configuration for the local filesystem provider (development only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalBlobConfig {
    /// Root path for locally stored blobs.
    #[serde(default = "default_local_root")]
    pub root_path: String,
}

impl Default for LocalBlobConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_local_root() -> String {
    "./data/blobs".to_string()
}
