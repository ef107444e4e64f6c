//! Token-based authentication and scope checks.

pub mod middleware;
pub mod models;

pub use middleware::{auth_middleware, AuthState};
pub use models::{AccessClaims, Principal, SCOPE_MEDIA_WRITE};
