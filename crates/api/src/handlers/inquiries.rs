//! Handler for the public inquiry form.

use std::collections::HashMap;

use axum::extract::multipart::{Field, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::Json;
use fabsite_core::inquiry::{AttachmentUpload, InquirySubmission, MAX_ATTACHMENT_BYTES};
use fabsite_db::repositories::InquiryRepo;

use crate::error::{AppError, AppResult};
use crate::response::InquiryCreatedResponse;
use crate::state::AppState;

/// Text fields read from the form. Anything else is ignored.
const TEXT_FIELDS: &[&str] = &[
    "full_name",
    "email",
    "contact_number",
    "requirement",
    "message",
];

/// POST /api/inquiries
///
/// Accepts `multipart/form-data` with the contact fields and any number of
/// `files` parts. The inquiry and its attachments are stored in a single
/// transaction. A body that is not multipart at all gets a JSON 400.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<InquiryCreatedResponse>> {
    let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let mut text: HashMap<String, String> = HashMap::new();
    let mut uploads: Vec<AttachmentUpload> = Vec::new();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "files" | "files[]" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = read_capped(&mut field, MAX_ATTACHMENT_BYTES).await?;

                // An untouched file input still posts an empty, unnamed part.
                if data.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
                    continue;
                }
                uploads.push(AttachmentUpload::new(
                    file_name.as_deref(),
                    content_type.as_deref(),
                    data,
                ));
            }
            n if TEXT_FIELDS.contains(&n) => {
                let value = field.text().await?;
                text.insert(name, value);
            }
            _ => {}
        }
    }

    let submission = InquirySubmission::new(
        text_field(&text, "full_name"),
        text_field(&text, "email"),
        text_field(&text, "contact_number"),
        text_field(&text, "requirement"),
        text_field(&text, "message"),
    );
    submission.check()?;

    let stored = InquiryRepo::create_with_attachments(&state.pool, &submission, &uploads).await?;

    tracing::info!(
        inquiry_id = stored.inquiry.id,
        attachments = stored.attachment_ids.len(),
        "Inquiry saved"
    );

    Ok(Json(InquiryCreatedResponse::new(stored.inquiry.id)))
}

fn text_field<'a>(text: &'a HashMap<String, String>, key: &str) -> &'a str {
    text.get(key).map(String::as_str).unwrap_or("")
}

/// Buffer a file part, failing as soon as it grows past `limit` bytes.
async fn read_capped(field: &mut Field<'_>, limit: usize) -> AppResult<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await? {
        if data.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "Each file must be at most {} MiB",
                limit / (1024 * 1024)
            )));
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}
