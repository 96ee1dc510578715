//! Shared response bodies for mutating endpoints and download headers.
//!
//! List endpoints return bare JSON arrays; mutations return a small
//! `{ "success": true, ... }` object the site's pages check before updating.

use fabsite_core::types::DbId;
use serde::Serialize;

/// Message sent back after a stored inquiry.
pub const INQUIRY_SAVED_MESSAGE: &str = "Inquiry saved successfully.";

/// Body of `POST /api/inquiries`.
#[derive(Debug, Serialize)]
pub struct InquiryCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub inquiry_id: DbId,
}

impl InquiryCreatedResponse {
    pub fn new(inquiry_id: DbId) -> Self {
        Self {
            success: true,
            message: INQUIRY_SAVED_MESSAGE,
            inquiry_id,
        }
    }
}

/// Body of status updates and deletes. `affected == 0` means the id did not
/// exist, which is not an error.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub affected: u64,
}

impl MutationResponse {
    pub fn affected(affected: u64) -> Self {
        Self {
            success: true,
            affected,
        }
    }
}

/// Build a `Content-Disposition` value that downloads under `filename`.
///
/// The quoted `filename` is an ASCII fallback with quotes, backslashes and
/// control characters replaced; `filename*` carries the exact UTF-8 name.
pub fn attachment_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c == ' ' || (c.is_ascii_graphic() && c != '"' && c != '\\') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded = urlencoding::encode(filename);
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
