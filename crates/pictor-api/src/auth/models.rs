use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::Json;
use pictor_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ErrorResponse;

/// Capability required to create or modify media records.
pub const SCOPE_MEDIA_WRITE: &str = "write:media";

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Account the token acts for. Service tokens carry no subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<Uuid>,
    /// Space-delimited capability list, e.g. "read:media write:media".
    #[serde(default)]
    pub scope: String,
    pub exp: i64, // expiration timestamp
}

/// Authenticated principal extracted from a verified token and stored in
/// request extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct Principal {
    pub account_id: Option<Uuid>,
    pub scopes: Vec<String>,
}

impl Principal {
    pub fn from_claims(claims: &AccessClaims) -> Self {
        Principal {
            account_id: claims.sub,
            scopes: claims
                .scope
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Reject with 403 unless the token granted `scope`.
    pub fn require_scope(&self, scope: &str) -> Result<(), AppError> {
        if self.has_scope(scope) {
            Ok(())
        } else {
            Err(AppError::Unauthorized(format!(
                "Missing required scope: {}",
                scope
            )))
        }
    }

    /// Account id for operations that must run on behalf of a user; service
    /// tokens without a subject are rejected with 401.
    pub fn require_account(&self) -> Result<Uuid, AppError> {
        self.account_id.ok_or_else(|| {
            AppError::Unauthenticated("This method requires an authenticated user".to_string())
        })
    }
}

// Implement FromRequestParts for Principal to work with Multipart.
// Extension cannot be used with Multipart, so we extract directly from request parts
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new(
                        "Missing authentication context",
                        "UNAUTHENTICATED",
                    )),
                )
            })
    }
}
