pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::render::handlers::handle_generate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/tailor", post(handlers::handle_tailor))
        .route("/api/v1/evaluate-resume", post(handlers::handle_evaluate))
        .route(
            "/api/v1/generate-cover-letter",
            post(handlers::handle_cover_letter),
        )
        .route(
            "/api/v1/interview/generate",
            post(handlers::handle_interview),
        )
        .route("/api/v1/generate", post(handle_generate))
        .with_state(state)
}
