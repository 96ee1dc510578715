//! Service and project content models.

use fabsite_core::content::{ContentKind, DEFAULT_IMAGE_TYPE};
use fabsite_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Listing fields of a `services` or `projects` row (no image payload).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentItem {
    #[serde(skip)]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_alt: String,
    pub sort_order: i32,
    pub is_active: bool,
}

impl ContentItem {
    /// Attach the kind-specific identifier field for the wire.
    pub fn into_row(self, kind: ContentKind) -> ContentRow {
        match kind {
            ContentKind::Service => ContentRow::Service {
                service_id: self.id,
                item: self,
            },
            ContentKind::Project => ContentRow::Project {
                project_id: self.id,
                item: self,
            },
        }
    }
}

/// A listing row as served to the public pages.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ContentRow {
    Service {
        service_id: DbId,
        #[serde(flatten)]
        item: ContentItem,
    },
    Project {
        project_id: DbId,
        #[serde(flatten)]
        item: ContentItem,
    },
}

/// Image payload of a content row.
#[derive(Debug, Clone, FromRow)]
pub struct ContentImage {
    pub image: Option<Vec<u8>>,
    pub image_type: Option<String>,
}

impl ContentImage {
    /// The image bytes with their content type, if any bytes are stored.
    pub fn into_parts(self) -> Option<(String, Vec<u8>)> {
        let bytes = self.image.filter(|b| !b.is_empty())?;
        let content_type = self
            .image_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());
        Some((content_type, bytes))
    }
}

/// DTO for inserting a content row.
#[derive(Debug, Clone)]
pub struct CreateContentItem {
    pub title: String,
    pub description: String,
    pub image_alt: String,
    pub image: Option<Vec<u8>>,
    pub image_type: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}
