use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::admin_inquiries;
use crate::state::AppState;

/// Admin inquiry management, mounted at `/admin`. Every handler requires the
/// admin key.
///
/// ```text
/// GET    /inquiries                    list_inquiries
/// GET    /inquiries/{id}               get_inquiry
/// DELETE /inquiries/{id}               delete_inquiry
/// GET    /inquiries/{id}/files         list_files
/// PATCH  /inquiries/{id}/status        update_status
/// GET    /inquiries/file/{file_id}     download_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/inquiries", get(admin_inquiries::list_inquiries))
        .route(
            "/inquiries/{id}",
            get(admin_inquiries::get_inquiry).delete(admin_inquiries::delete_inquiry),
        )
        .route("/inquiries/{id}/files", get(admin_inquiries::list_files))
        .route("/inquiries/{id}/status", patch(admin_inquiries::update_status))
        .route(
            "/inquiries/file/{file_id}",
            get(admin_inquiries::download_file),
        )
}
