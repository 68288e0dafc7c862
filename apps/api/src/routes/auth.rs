//! Register/login issuing the bearer token used by the protected routes.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::jwt::issue_token;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

fn validate_credentials(req: &CredentialsRequest) -> Result<(), AppError> {
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }
    if req.password.len() < 6 {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    validate_credentials(&req)?;

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("User already exists".to_string()));
    }

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
        .map_err(anyhow::Error::from)?;
    let user_id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(&req.email)
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await?;

    info!("Registered user {user_id}");
    let token = issue_token(user_id, &state.config.jwt_secret)?;
    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth/login
/// Unknown email and wrong password return the same message, so the
/// endpoint does not leak which accounts exist.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;

    let Some(user) = user else {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    };
    let valid = bcrypt::verify(&req.password, &user.password_hash).map_err(anyhow::Error::from)?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = issue_token(user.id, &state.config.jwt_secret)?;
    Ok(Json(TokenResponse { token }))
}

/// GET /api/auth/me: resolves the caller's profile from their token.
pub async fn handle_me(
    State(state): State<AppState>,
    user: crate::middleware::jwt::AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user.user_id)
        .fetch_optional(&state.db)
        .await?;
    let Some(row) = row else {
        return Err(AppError::NotFound("User not found".to_string()));
    };
    Ok(Json(json!({ "id": row.id, "email": row.email })))
}
