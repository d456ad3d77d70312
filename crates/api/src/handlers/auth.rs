//! Handler for the `/auth` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use serde::Deserialize;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::auth::{ADMIN_ROLE, ADMIN_SUBJECT};
use crate::error::{AppError, AppResult};
use crate::response::LoginResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/v1/auth/login
///
/// Exchange the admin password for a short-lived access token.
///
/// With admin auth disabled every caller is admitted and no token is issued,
/// since the mutating endpoints are open anyway.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(input) = payload?;

    let Some(auth) = state.config.auth.as_ref() else {
        tracing::debug!("Admin auth disabled, admitting login without a token");
        return Ok(Json(LoginResponse::open()));
    };

    let password_valid = verify_password(&input.password, &auth.admin_password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let issued = generate_access_token(ADMIN_SUBJECT, ADMIN_ROLE, &auth.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    tracing::info!(expires_at = issued.expires_at, "Admin token issued");

    Ok(Json(LoginResponse::from(issued)))
}
