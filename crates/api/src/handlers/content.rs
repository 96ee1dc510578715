//! Handlers for the public service and project listings.
//!
//! Services and projects share one table shape, so each pair of handlers
//! delegates to a kind-parameterized helper.

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fabsite_core::content::{ContentKind, DEFAULT_IMAGE_TYPE};
use fabsite_db::models::content::{ContentImage, ContentRow};
use fabsite_db::repositories::ContentRepo;

use crate::error::AppResult;
use crate::middleware::path_id::PathId;
use crate::state::AppState;

/// `Cache-Control` sent with content images.
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=3600";

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<ContentRow>>> {
    list_active(&state, ContentKind::Service).await
}

/// GET /api/services/{id}/image
pub async fn service_image(
    State(state): State<AppState>,
    id: PathId,
) -> AppResult<Response> {
    image(&state, ContentKind::Service, id).await
}

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<ContentRow>>> {
    list_active(&state, ContentKind::Project).await
}

/// GET /api/projects/{id}/image
pub async fn project_image(
    State(state): State<AppState>,
    id: PathId,
) -> AppResult<Response> {
    image(&state, ContentKind::Project, id).await
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

async fn list_active(state: &AppState, kind: ContentKind) -> AppResult<Json<Vec<ContentRow>>> {
    let rows = ContentRepo::list_active(&state.pool, kind)
        .await?
        .into_iter()
        .map(|item| item.into_row(kind))
        .collect();
    Ok(Json(rows))
}

/// Raw image bytes of an active item. Inactive items and items without an
/// image are reported as not found.
async fn image(state: &AppState, kind: ContentKind, path: PathId) -> AppResult<Response> {
    let image: Option<ContentImage> = match path.0 {
        Some(id) => ContentRepo::find_active_image(&state.pool, kind, id).await?,
        None => None,
    };
    let (content_type, bytes) = image
        .and_then(ContentImage::into_parts)
        .ok_or_else(|| path.not_found(kind.entity()))?;

    let content_type = HeaderValue::from_str(&content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_IMAGE_TYPE));

    Ok((
        [
            (CONTENT_TYPE, content_type),
            (CACHE_CONTROL, HeaderValue::from_static(IMAGE_CACHE_CONTROL)),
        ],
        bytes,
    )
        .into_response())
}
