//! Pictor Core Library
//!
//! This crate provides the domain model, error types, identifier generation,
//! and configuration shared across all Pictor components.

pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use id::new_media_id;
pub use models::{Medium, MediumResponse, NewMedium, ThumbnailInfo};
pub use storage_types::StorageBackend;
