//! Inquiry vocabulary: status values, form validation, and attachment rules.

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Per-file ceiling for inquiry attachments (20 MiB).
pub const MAX_ATTACHMENT_BYTES: usize = 20 * 1024 * 1024;

/// Filename recorded when a file part arrives without one.
pub const DEFAULT_ATTACHMENT_NAME: &str = "attachment";

/// Content type recorded when a file part arrives without one.
pub const DEFAULT_ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// Client-facing message for a submission with any contact field missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";

/// Client-facing message for a present but malformed email. Addresses are
/// checked for syntax, so a form that only fills the field with free text is
/// rejected instead of stored.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";

/// Client-facing message for an unrecognized status value.
pub const INVALID_STATUS_MESSAGE: &str = "Invalid status.";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Review state of an inquiry. Stored as lowercase text in `inquiries.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Read,
    Closed,
}

const VALID_STATUS_STRINGS: &[&str] = &["new", "read", "closed"];

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Closed => "closed",
        }
    }

    /// Parse a status from its stored form. Matching is exact (lowercase).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "closed" => Ok(Self::Closed),
            _ => Err(CoreError::Validation(format!(
                "Invalid status '{s}'. Must be one of: {}",
                VALID_STATUS_STRINGS.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Contact fields of a public inquiry form submission.
///
/// Build with [`InquirySubmission::new`], which trims every field, then call
/// [`InquirySubmission::check`] before touching the database.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct InquirySubmission {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub contact_number: String,
    #[validate(length(min = 1))]
    pub requirement: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl InquirySubmission {
    pub fn new(
        full_name: &str,
        email: &str,
        contact_number: &str,
        requirement: &str,
        message: &str,
    ) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            contact_number: contact_number.trim().to_string(),
            requirement: requirement.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Reject the submission if any field is empty or the email is malformed.
    ///
    /// Missing fields take precedence over a malformed email so the client
    /// always sees [`MISSING_FIELDS_MESSAGE`] for an incomplete form.
    pub fn check(&self) -> Result<(), CoreError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|e| e.code == "length");

        if missing {
            Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()))
        } else {
            Err(CoreError::Validation(INVALID_EMAIL_MESSAGE.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

/// A file received with an inquiry, fully buffered and within the size cap.
#[derive(Debug, Clone)]
pub struct AttachmentUpload {
    pub original_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl AttachmentUpload {
    pub fn new(original_name: Option<&str>, content_type: Option<&str>, data: Vec<u8>) -> Self {
        let original_name = original_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_ATTACHMENT_NAME)
            .to_string();
        let content_type = content_type
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_ATTACHMENT_CONTENT_TYPE)
            .to_string();
        Self {
            original_name,
            content_type,
            data,
        }
    }

    pub fn file_ext(&self) -> String {
        file_extension(&self.original_name)
    }

    pub fn size_bytes(&self) -> i64 {
        self.data.len() as i64
    }
}

/// Lower-cased extension of `name` including the leading dot.
///
/// Returns an empty string when there is no extension. Dotfiles such as
/// `.env` have no extension; a trailing dot yields `"."`.
pub fn file_extension(name: &str) -> String {
    match Path::new(name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}
