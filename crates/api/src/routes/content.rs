use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Public content listings.
///
/// ```text
/// GET    /services               list_services
/// GET    /services/{id}/image    service_image
/// GET    /projects               list_projects
/// GET    /projects/{id}/image    project_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(content::list_services))
        .route("/services/{id}/image", get(content::service_image))
        .route("/projects", get(content::list_projects))
        .route("/projects/{id}/image", get(content::project_image))
}
