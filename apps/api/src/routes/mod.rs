pub mod auth;
pub mod health;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handle_register))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/me", get(auth::handle_me))
        // Resumes
        .route(
            "/api/resume",
            post(resumes::handle_create).get(resumes::handle_list),
        )
        .route(
            "/api/resume/:id",
            get(resumes::handle_get)
                .put(resumes::handle_update)
                .delete(resumes::handle_delete),
        )
        .route("/api/resume/ai-suggest", post(resumes::handle_ai_suggest))
        .route("/api/resume/export/pdf", post(resumes::handle_export_pdf))
        .with_state(state)
}
