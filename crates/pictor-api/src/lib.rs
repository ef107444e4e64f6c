//! Pictor API Library
//!
//! This crate provides the HTTP handlers, auth middleware, and application
//! setup for the media ingestion service.

// Module declarations
mod api_doc;
mod handlers;
mod utils;

// Public modules
pub mod auth;
pub mod error;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
