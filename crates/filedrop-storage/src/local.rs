use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use filedrop_core::StorageBackend;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage
    /// * `base_url` - Base URL for serving files (e.g., "http://localhost:4000/files")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert a storage key to a filesystem path, rejecting keys that could
    /// escape the base storage directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }
        Ok(self.base_path.join(key))
    }

    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        let path = self.key_to_path(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        }

        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        file.write_all(&data)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        tracing::info!(
            key = %key,
            size_bytes = data.len() as u64,
            "Local upload successful"
        );

        Ok(())
    }

    async fn download(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(key.to_string()));
        }

        fs::read(&path)
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))
    }

    async fn presigned_get_url(&self, key: &str, _expires_in: Duration) -> StorageResult<String> {
        // Local files are served directly; the URL carries no signature.
        self.key_to_path(key)?;
        Ok(self.generate_url(key))
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let storage = LocalStorage::new(dir.path(), "http://localhost:4000/files".to_string())
            .await
            .expect("create storage");
        (dir, storage)
    }

    #[tokio::test]
    async fn put_then_download_round_trips() {
        let (_dir, storage) = test_storage().await;
        storage.put("report.pdf", b"content".to_vec()).await.unwrap();
        let data = storage.download("report.pdf").await.unwrap();
        assert_eq!(data, b"content");
        assert!(storage.exists("report.pdf").await.unwrap());
    }

    #[tokio::test]
    async fn put_overwrites_same_key() {
        let (_dir, storage) = test_storage().await;
        storage.put("report.pdf", b"first".to_vec()).await.unwrap();
        storage.put("report.pdf", b"second".to_vec()).await.unwrap();
        let data = storage.download("report.pdf").await.unwrap();
        assert_eq!(data, b"second");
    }

    #[tokio::test]
    async fn rejects_path_traversal_keys() {
        let (_dir, storage) = test_storage().await;
        let err = storage.put("../escape", b"x".to_vec()).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
        let err = storage.download("/etc/passwd").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn download_missing_key_is_not_found() {
        let (_dir, storage) = test_storage().await;
        let err = storage.download("nope.txt").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn presigned_url_points_at_base_url() {
        let (_dir, storage) = test_storage().await;
        let url = storage
            .presigned_get_url("report.pdf", Duration::from_secs(604_800))
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:4000/files/report.pdf");
    }
}
