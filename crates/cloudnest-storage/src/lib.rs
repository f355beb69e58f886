//! # cloudnest-storage
//!
//! [`BlobStore`] providers for CloudNest: an HTTP CDN provider for
//! production and a local filesystem provider for development.
//!
//! [`BlobStore`]: cloudnest_core::traits::BlobStore

pub mod providers;

use std::sync::Arc;

use cloudnest_core::config::blob::BlobStoreConfig;
use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::BlobStore;

/// Build the configured blob store provider.
pub fn build_provider(config: &BlobStoreConfig) -> AppResult<Arc<dyn BlobStore>> {
    match config.provider.as_str() {
        "cdn" => Ok(Arc::new(providers::cdn::CdnBlobStore::new(&config.cdn)?)),
        "local" => Ok(Arc::new(providers::local::LocalBlobStore::new(
            &config.local.root_path,
        ))),
        other => Err(AppError::configuration(format!(
            "Unknown blob provider '{other}'"
        ))),
    }
}
