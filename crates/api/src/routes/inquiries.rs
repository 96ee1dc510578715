use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::inquiries;
use crate::state::AppState;

/// Public inquiry submission, mounted at `/inquiries`.
///
/// ```text
/// POST   /    submit_inquiry
/// ```
///
/// Raises the body limit to `MAX_REQUEST_BYTES` so multi-file forms fit;
/// each file is capped separately by the handler.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route("/", post(inquiries::submit_inquiry))
        .layer(DefaultBodyLimit::max(config.max_request_bytes))
}
