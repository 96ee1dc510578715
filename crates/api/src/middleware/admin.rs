//! Admin API key extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use fabsite_core::access::verify_admin_key;
use fabsite_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried a valid admin API key.
///
/// Add it as a handler parameter to guard the route:
///
/// ```ignore
/// async fn list_inquiries(_admin: RequireAdmin, State(state): State<AppState>) { ... }
/// ```
///
/// When no key digest is configured the whole admin surface answers 403.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state.config.admin_key_sha256.as_deref().ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "Admin access is not configured".into(),
            ))
        })?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let key = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <key>".into(),
            ))
        })?;

        if !verify_admin_key(key.trim(), expected) {
            tracing::warn!(path = %parts.uri.path(), "Rejected admin request with invalid key");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin key".into(),
            )));
        }

        Ok(RequireAdmin)
    }
}
