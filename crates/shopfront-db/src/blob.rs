//! # Blob Store
//!
//! Filesystem-backed storage for product images.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Blob Store Layout                                │
//! │                                                                         │
//! │  <root>/                                                                │
//! │  └── product/                                                           │
//! │      ├── elf-bar-front.png                                              │
//! │      └── juul-side.jpg                                                  │
//! │                                                                         │
//! │  Product documents store only the relative path                         │
//! │  ("product/elf-bar-front.png"); the screens resolve a path to a        │
//! │  servable URL with `download_url` when rendering.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Handle for blob operations under one root directory.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Creates a blob store rooted at `root`. The directory is created
    /// lazily on first upload.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        BlobStore { root: root.into() }
    }

    /// Returns the root directory for this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` at the given relative path (e.g. `product/front.png`)
    /// and returns that path. Uploading to an existing path overwrites it.
    pub async fn upload(&self, path: &str, bytes: &[u8]) -> DbResult<String> {
        let full = self.root.join(path);

        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::blob_io(path, e))?;
        }

        fs::write(&full, bytes)
            .await
            .map_err(|e| DbError::blob_io(path, e))?;

        info!(path = %path, size = bytes.len(), "Blob uploaded");
        Ok(path.to_string())
    }

    /// Resolves a stored path to a URL the UI can render.
    ///
    /// Returns [`DbError::BlobNotFound`] when nothing is stored at the path.
    pub async fn download_url(&self, path: &str) -> DbResult<String> {
        let full = self.root.join(path);

        let exists = fs::try_exists(&full)
            .await
            .map_err(|e| DbError::blob_io(path, e))?;
        if !exists {
            return Err(DbError::BlobNotFound {
                path: path.to_string(),
            });
        }

        debug!(path = %path, "Resolved blob URL");
        Ok(format!("file://{}", full.display()))
    }

    /// Reads a blob's bytes back (for diagnostics and tests).
    pub async fn download(&self, path: &str) -> DbResult<Vec<u8>> {
        let full = self.root.join(path);
        match fs::read(&full).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DbError::BlobNotFound {
                path: path.to_string(),
            }),
            Err(e) => Err(DbError::blob_io(path, e)),
        }
    }

    /// Deletes a blob. Deleting a missing blob is a no-op.
    pub async fn delete(&self, path: &str) -> DbResult<()> {
        let full = self.root.join(path);
        match fs::remove_file(&full).await {
            Ok(()) => {
                debug!(path = %path, "Blob deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DbError::blob_io(path, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> BlobStore {
        let root = std::env::temp_dir().join(format!("shopfront-blob-{}", Uuid::new_v4()));
        BlobStore::new(root)
    }

    #[tokio::test]
    async fn test_upload_and_download() {
        let store = temp_store();

        let path = store.upload("product/front.png", b"png-bytes").await.unwrap();
        assert_eq!(path, "product/front.png");

        let bytes = store.download(&path).await.unwrap();
        assert_eq!(bytes, b"png-bytes");
    }

    #[tokio::test]
    async fn test_download_url_for_stored_blob() {
        let store = temp_store();

        store.upload("product/side.jpg", b"jpg").await.unwrap();
        let url = store.download_url("product/side.jpg").await.unwrap();

        assert!(url.starts_with("file://"));
        assert!(url.ends_with("product/side.jpg"));
    }

    #[tokio::test]
    async fn test_download_url_missing_blob() {
        let store = temp_store();

        let err = store.download_url("product/missing.png").await.unwrap_err();
        assert!(matches!(err, DbError::BlobNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_noop_when_missing() {
        let store = temp_store();

        store.upload("product/x.png", b"x").await.unwrap();
        store.delete("product/x.png").await.unwrap();
        assert!(store.download("product/x.png").await.is_err());

        // Second delete: no error.
        store.delete("product/x.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_overwrites() {
        let store = temp_store();

        store.upload("product/a.png", b"v1").await.unwrap();
        store.upload("product/a.png", b"v2").await.unwrap();

        assert_eq!(store.download("product/a.png").await.unwrap(), b"v2");
    }
}
