//! Local filesystem blob store for development.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::{BlobHandle, BlobStore};

/// Blob store writing to a directory tree under `root`.
///
/// `content_ref` is the path relative to the root, so handles stay opaque
/// to callers the same way CDN file ids do.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local provider rooted at the given path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, content_ref: &str) -> AppResult<PathBuf> {
        // Reject refs that could escape the root.
        if content_ref.contains("..") || Path::new(content_ref).is_absolute() {
            return Err(AppError::storage(format!(
                "Invalid blob reference '{content_ref}'"
            )));
        }
        Ok(self.root.join(content_ref))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn upload(&self, data: Bytes, name: &str, folder_hint: &str) -> AppResult<BlobHandle> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        let relative = format!("{}/{}{}", folder_hint.trim_matches('/'), Uuid::new_v4(), extension);
        let path = self.resolve(&relative)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let size_bytes = data.len() as i64;
        tokio::fs::write(&path, &data).await?;

        debug!(path = %path.display(), size = size_bytes, "Blob written locally");

        Ok(BlobHandle {
            content_ref: relative,
            thumbnail_ref: None,
            size_bytes,
        })
    }

    async fn delete(&self, content_ref: &str) -> AppResult<()> {
        let path = self.resolve(content_ref)?;
        tokio::fs::remove_file(&path).await?;
        Ok(())
    }

    async fn bulk_delete(&self, content_refs: &[String]) -> AppResult<()> {
        for content_ref in content_refs {
            self.delete(content_ref).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_then_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());

        let handle = store
            .upload(Bytes::from_static(b"hello"), "a.txt", "user_1")
            .await
            .unwrap();
        assert_eq!(handle.size_bytes, 5);
        assert!(handle.content_ref.starts_with("user_1/"));
        assert!(handle.content_ref.ends_with(".txt"));

        store.delete(&handle.content_ref).await.unwrap();
        assert!(!dir.path().join(&handle.content_ref).exists());
    }

    #[tokio::test]
    async fn rejects_escaping_refs() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());

        assert!(store.delete("../etc/passwd").await.is_err());
        assert!(store.delete("/etc/passwd").await.is_err());
    }
}
