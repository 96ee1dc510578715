pub mod admin;
pub mod content;
pub mod health;
pub mod inquiries;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /inquiries                                       submit inquiry (POST, multipart)
///
/// /services                                        list active services
/// /services/{id}/image                             service image bytes
/// /projects                                        list active projects
/// /projects/{id}/image                             project image bytes
///
/// /admin/inquiries                                 list (admin key)
/// /admin/inquiries/{id}                            get, delete
/// /admin/inquiries/{id}/files                      attachment metadata
/// /admin/inquiries/{id}/status                     set status (PATCH)
/// /admin/inquiries/file/{file_id}                  download attachment
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/inquiries", inquiries::router(config))
        .merge(content::router())
        .nest("/admin", admin::router())
}
