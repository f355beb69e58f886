//! Caption / image generation trait for the external generative API.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the external text/image producer.
#[async_trait]
pub trait Captioner: Send + Sync + std::fmt::Debug + 'static {
    /// Generate a short description for the image behind `content_ref`.
    ///
    /// Best-effort: callers log failures and proceed with no description.
    async fn caption(&self, content_ref: &str) -> AppResult<String>;

    /// Generate an image from a text prompt.
    async fn generate_image(&self, prompt: &str) -> AppResult<Bytes>;
}
