//! Admin guard extractor for mutating handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use folio_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::auth::ADMIN_ROLE;
use crate::error::AppError;
use crate::state::AppState;

/// Admin session proven by a JWT Bearer token.
///
/// When the server runs without admin auth configured the guard admits every
/// request.
///
/// ```ignore
/// async fn my_handler(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth) = &state.config.auth else {
            return Ok(RequireAdmin);
        };

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &auth.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.role != ADMIN_ROLE {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Admin role required".into(),
            )));
        }

        tracing::debug!(jti = %claims.jti, "Admin token accepted");
        Ok(RequireAdmin)
    }
}
