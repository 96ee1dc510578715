//! Handlers for the `/admin/inquiries` resource.
//!
//! Every handler takes [`RequireAdmin`], so requests without a valid admin
//! key never reach the database.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fabsite_core::inquiry::{InquiryStatus, DEFAULT_ATTACHMENT_CONTENT_TYPE, INVALID_STATUS_MESSAGE};
use fabsite_db::models::inquiry::{Inquiry, InquiryAttachment, UpdateInquiryStatus};
use fabsite_db::repositories::{AttachmentRepo, InquiryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::middleware::path_id::PathId;
use crate::response::{attachment_disposition, MutationResponse};
use crate::state::AppState;

/// GET /api/admin/inquiries
///
/// All inquiries regardless of status, newest first.
pub async fn list_inquiries(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Inquiry>>> {
    let inquiries = InquiryRepo::list_all(&state.pool).await?;
    Ok(Json(inquiries))
}

/// GET /api/admin/inquiries/{id}
pub async fn get_inquiry(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    path: PathId,
) -> AppResult<Json<Inquiry>> {
    let inquiry = match path.0 {
        Some(id) => InquiryRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    inquiry.map(Json).ok_or_else(|| path.not_found("Inquiry"))
}

/// GET /api/admin/inquiries/{id}/files
///
/// Attachment metadata only. An unknown inquiry yields an empty list.
pub async fn list_files(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Vec<InquiryAttachment>>> {
    let files = match id {
        Some(id) => AttachmentRepo::list_by_inquiry(&state.pool, id).await?,
        None => Vec::new(),
    };
    Ok(Json(files))
}

/// GET /api/admin/inquiries/file/{file_id}
///
/// Streams the stored bytes back as a download under the original filename.
pub async fn download_file(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    path: PathId,
) -> AppResult<Response> {
    let file = match path.0 {
        Some(file_id) => AttachmentRepo::find_file(&state.pool, file_id).await?,
        None => None,
    }
    .ok_or_else(|| path.not_found("Attachment"))?;

    let content_type = HeaderValue::from_str(&file.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_ATTACHMENT_CONTENT_TYPE));
    let disposition = HeaderValue::from_str(&attachment_disposition(&file.original_name))
        .map_err(|e| AppError::InternalError(format!("Invalid Content-Disposition: {e}")))?;

    tracing::debug!(file_id = file.id, size = file.file_data.len(), "Serving attachment");

    Ok((
        [
            (CONTENT_TYPE, content_type),
            (CONTENT_LENGTH, HeaderValue::from(file.file_data.len())),
            (CONTENT_DISPOSITION, disposition),
        ],
        file.file_data,
    )
        .into_response())
}

/// PATCH /api/admin/inquiries/{id}/status
///
/// Body: `{"status": "new" | "read" | "closed"}`. Any other body, including a
/// missing status, is rejected with 400 and leaves the row unchanged.
pub async fn update_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    PathId(id): PathId,
    payload: Result<Json<UpdateInquiryStatus>, JsonRejection>,
) -> AppResult<Json<MutationResponse>> {
    let status = payload
        .ok()
        .and_then(|Json(body)| body.status)
        .and_then(|s| InquiryStatus::parse(&s).ok())
        .ok_or_else(|| AppError::BadRequest(INVALID_STATUS_MESSAGE.to_string()))?;

    let Some(id) = id else {
        return Ok(Json(MutationResponse::affected(0)));
    };
    let affected = InquiryRepo::update_status(&state.pool, id, status).await?;
    tracing::info!(inquiry_id = id, %status, affected, "Inquiry status updated");

    Ok(Json(MutationResponse::affected(affected)))
}

/// DELETE /api/admin/inquiries/{id}
///
/// Attachments are removed with the inquiry. Deleting an unknown id reports
/// `affected: 0`.
pub async fn delete_inquiry(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<MutationResponse>> {
    let Some(id) = id else {
        return Ok(Json(MutationResponse::affected(0)));
    };
    let affected = InquiryRepo::delete(&state.pool, id).await?;
    tracing::info!(inquiry_id = id, affected, "Inquiry deleted");

    Ok(Json(MutationResponse::affected(affected)))
}
