//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use filedrop_core::StorageBackend;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait so
/// the upload coordinator can work with any backend without coupling to
/// implementation details.
///
/// **Key format:** the key is the uploaded file name, unchanged. Keys must
/// not contain `..` or a leading `/`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key`, silently overwriting any existing object.
    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Read the object stored under `key`.
    async fn download(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Generate a presigned/temporary URL for direct GET access.
    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String>;

    /// Check if an object exists under `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
