//! Pictor Processing Library
//!
//! Image probing and thumbnail derivation. All functions here are synchronous
//! and CPU-bound; async callers wrap them in `tokio::task::spawn_blocking`.

mod error;
pub mod probe;
pub mod thumbnail;

pub use error::ProcessingError;
pub use probe::probe_dimensions;
pub use thumbnail::{
    DerivedThumbnail, Thumbnailer, THUMBNAIL_CONTENT_TYPE, THUMBNAIL_MAX_DIMENSION, WEBP_QUALITY,
};
