//! Bearer-token auth carried in the `x-auth-token` header.
//!
//! `AuthUser` rejects requests without a valid token; `OptionalAuthUser`
//! never rejects, so guest-mode routes can attach an owner when a token
//! happens to be present and fall back to anonymous otherwise.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

pub const AUTH_HEADER: &str = "x-auth-token";

/// Sessions last a week; clients re-authenticate after that.
const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id.
    sub: String,
    /// Expiry as a unix timestamp.
    exp: i64,
}

/// Issues a signed token for `user_id`.
pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::Error::from(e)))
}

/// Verifies a token and returns the user id it names.
pub fn verify_token(token: &str, secret: &str) -> Option<Uuid> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()?;
    Uuid::parse_str(&data.claims.sub).ok()
}

/// Authenticated caller. Extraction fails with 401 when the header is
/// missing or the token does not verify.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("No token, authorization denied".to_string()))?;

        let user_id = verify_token(token, &state.config.jwt_secret)
            .ok_or_else(|| AppError::Unauthorized("Token is not valid".to_string()))?;
        Ok(AuthUser { user_id })
    }
}

/// Guest-mode extractor: a valid token yields the caller, anything else
/// (absent header, bad token) yields `None` without rejecting.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|token| verify_token(token, &state.config.jwt_secret))
            .map(|user_id| AuthUser { user_id });
        Ok(OptionalAuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, "secret").unwrap();
        assert_eq!(verify_token(&token, "secret"), Some(user_id));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "secret").unwrap();
        assert_eq!(verify_token(&token, "other-secret"), None);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert_eq!(verify_token("not-a-jwt", "secret"), None);
    }
}
