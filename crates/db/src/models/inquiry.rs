//! Inquiry and inquiry attachment models.

use fabsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    #[serde(rename = "inquiry_id")]
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub requirement: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Attachment metadata without the payload, for listings.
///
/// Serialized with the PascalCase keys the admin page reads (`FileID`,
/// `OriginalName`, `FileExt`, `FileSizeBytes`, `CreatedAt`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryAttachment {
    #[serde(rename = "FileID")]
    pub id: DbId,
    #[serde(rename = "InquiryID")]
    pub inquiry_id: DbId,
    pub original_name: String,
    pub content_type: String,
    pub file_ext: String,
    pub file_size_bytes: i64,
    pub created_at: Timestamp,
}

/// An attachment with its payload, for downloads.
#[derive(Debug, Clone, FromRow)]
pub struct AttachmentFile {
    pub id: DbId,
    pub original_name: String,
    pub content_type: String,
    pub file_data: Vec<u8>,
}

/// Result of a stored submission.
#[derive(Debug, Clone)]
pub struct StoredInquiry {
    pub inquiry: Inquiry,
    pub attachment_ids: Vec<DbId>,
}

/// DTO for `PATCH /admin/inquiries/{id}/status`. The value is checked by the
/// handler so that a missing or unknown status gets one error message.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInquiryStatus {
    #[serde(default)]
    pub status: Option<String>,
}
