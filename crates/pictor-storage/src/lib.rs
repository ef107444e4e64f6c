//! Pictor Storage Library
//!
//! This crate provides the blob storage abstraction and its backends. It
//! includes the `Storage` trait and implementations for S3-compatible object
//! stores and the local filesystem.
//!
//! # Storage key format
//!
//! Each media record owns two keys derived from its identifier:
//!
//! - **Original**: `media/{id}/original`
//! - **Thumbnail**: `media/{id}/thumbnail`
//!
//! Keys must not contain `..` or a leading `/`. Key generation is centralized
//! in the `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{original_key, thumbnail_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use pictor_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
