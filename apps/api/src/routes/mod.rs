pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::interview::handlers as interview;
use crate::skillsheet::handlers as skillsheet;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route(
            "/api/v1/interview/question",
            get(interview::handle_initial_question),
        )
        .route(
            "/api/v1/interview/next",
            post(interview::handle_next_question),
        )
        .route("/api/v1/interview/summary", post(interview::handle_summary))
        // Skill sheet API
        .route(
            "/api/v1/skillsheet",
            post(skillsheet::handle_upload)
                .get(skillsheet::handle_get_latest)
                .delete(skillsheet::handle_clear)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
