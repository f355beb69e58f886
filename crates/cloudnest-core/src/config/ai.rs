//! Caption / image generation configuration.

use serde::{Deserialize, Serialize};

/// Settings for the generative AI provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Whether caption generation is attempted for image uploads.
    #[serde(default = "default_true")]
    pub captions_enabled: bool,
    /// Base URL of the generative API.
    #[serde(default)]
    pub api_base_url: String,
    /// API key.
    #[serde(default)]
    pub api_key: String,
    /// Model name used for captioning.
    #[serde(default = "default_caption_model")]
    pub caption_model: String,
    /// Model name used for image generation.
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_true() -> bool {
    true
}

fn default_caption_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.0-flash-exp-image-generation".to_string()
}

fn default_timeout() -> u64 {
    60
}
