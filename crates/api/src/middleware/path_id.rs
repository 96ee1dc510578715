//! Lenient numeric path id extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use fabsite_core::error::CoreError;
use fabsite_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of an entity route.
///
/// A segment that does not parse as a [`DbId`] (`abc`, `undefined`, an
/// overflowing number) cannot name a stored row, so it extracts as `None`
/// and handlers answer it exactly like an unknown id: 404 for lookups, an
/// empty list for collections, `affected: 0` for mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub Option<DbId>);

impl PathId {
    /// JSON 404 for a lookup that found nothing under this id.
    pub fn not_found(self, entity: &'static str) -> AppError {
        match self.0 {
            Some(id) => AppError::Core(CoreError::NotFound { entity, id }),
            None => AppError::NotFound(format!("{entity} not found")),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PathId {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(PathId(Some(id))),
            Err(rejection) => {
                tracing::debug!(
                    path = %parts.uri.path(),
                    reason = %rejection.body_text(),
                    "Path id is not a valid id"
                );
                Ok(PathId(None))
            }
        }
    }
}
