use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use pictor_core::AppError;
use std::sync::Arc;

use crate::auth::models::{AccessClaims, Principal};
use crate::error::HttpAppError;

/// Shared verification state for the auth middleware.
pub struct AuthState {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthState {
    pub fn new(jwt_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        AuthState {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Validate and decode an access token.
    fn decode_token(&self, token: &str) -> Result<AccessClaims, AppError> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token validation failed");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::Unauthenticated("Token has expired".to_string())
                    }
                    _ => AppError::Unauthenticated("Invalid or expired token".to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthenticated(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    if !auth_header.starts_with("Bearer ") {
        return HttpAppError(AppError::Unauthenticated(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix

    let claims = match auth_state.decode_token(token) {
        Ok(claims) => claims,
        Err(e) => return HttpAppError(e).into_response(),
    };

    request.extensions_mut().insert(Principal::from_claims(&claims));
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    const SECRET: &str = "test-secret-key-for-token-checks";

    fn mint(sub: Option<Uuid>, scope: &str, exp: i64) -> String {
        let claims = AccessClaims {
            sub,
            scope: scope.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        (std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600) as i64
    }

    #[test]
    fn valid_token_decodes_claims() {
        let state = AuthState::new(SECRET);
        let sub = Uuid::new_v4();
        let token = mint(Some(sub), "write:media", future_exp());

        let claims = state.decode_token(&token).unwrap();
        assert_eq!(claims.sub, Some(sub));
        assert_eq!(claims.scope, "write:media");
    }

    #[test]
    fn token_without_subject_decodes() {
        let state = AuthState::new(SECRET);
        let token = mint(None, "write:media", future_exp());

        let claims = state.decode_token(&token).unwrap();
        assert_eq!(claims.sub, None);
    }

    #[test]
    fn expired_token_is_rejected() {
        let state = AuthState::new(SECRET);
        let token = mint(Some(Uuid::new_v4()), "write:media", 1_000);

        let err = state.decode_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated(msg) if msg.contains("expired")));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let state = AuthState::new("a-different-secret-entirely");
        let token = mint(Some(Uuid::new_v4()), "write:media", future_exp());

        assert!(state.decode_token(&token).is_err());
    }
}
