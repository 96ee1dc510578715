//! Public content kinds (services and projects).
//!
//! Both kinds share one table shape; [`ContentKind`] selects the table and
//! the identifiers used in logs, errors, and JSON rows.

/// Fallback image content type when a row has none stored.
pub const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Service,
    Project,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Service, ContentKind::Project];

    /// Backing table name. Only ever one of two literals, so safe to
    /// interpolate into SQL.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Service => "services",
            Self::Project => "projects",
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Project => "Project",
        }
    }
}

/// Guess an image content type from a file path's extension.
pub fn image_type_for_path(path: &str) -> &'static str {
    match crate::inquiry::file_extension(path).as_str() {
        ".png" => "image/png",
        ".webp" => "image/webp",
        ".gif" => "image/gif",
        ".svg" => "image/svg+xml",
        _ => DEFAULT_IMAGE_TYPE,
    }
}
