pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as content;
use crate::publishing::handlers as publishing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content API
        .route("/api/v1/content/generate", post(content::handle_generate))
        .route("/api/v1/content/analyze", post(content::handle_analyze))
        .route("/api/v1/content/export", post(content::handle_export))
        // Publish API
        .route("/api/v1/publish/wordpress", post(publishing::handle_publish))
        .with_state(state)
}
