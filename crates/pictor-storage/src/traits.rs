//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use bytes::Bytes;
use pictor_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Blob not found: {0}")]
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
/// All storage backends (S3, local filesystem) must implement this trait.
/// A successful `put` means the blob is durably written and retrievable at
/// the returned URL from that point forward; the ingestion pipeline relies
/// on this to insert metadata rows only after their blobs exist.
///
/// There is deliberately no delete operation: nothing in this system removes
/// blobs, and orphans left by aborted ingestions are reconciled out-of-band.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Durably write `data` at `key` with the given content type.
    /// Returns the publicly retrievable URL for the blob.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<String>;

    /// Check whether a blob exists at `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
