pub mod cvs;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes());

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/cvs/parse", post(cvs::handle_parse))
        .route("/api/v1/cvs/upload", post(cvs::handle_upload))
        .layer(body_limit)
        .with_state(state)
}
