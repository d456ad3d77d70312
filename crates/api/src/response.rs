//! Response envelopes for the project API.
//!
//! Every successful body carries `"success": true` next to its payload;
//! failures are rendered by [`crate::error::AppError`] with `"success": false`.

use folio_core::project::ProjectRecord;
use serde::Serialize;

use crate::auth::jwt::IssuedToken;

/// `{ "success": true, "projects": [...] }`
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub projects: Vec<ProjectRecord>,
}

impl ProjectListResponse {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self {
            success: true,
            projects,
        }
    }
}

/// `{ "success": true, "project": {...} }`
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub success: bool,
    pub project: ProjectRecord,
}

impl ProjectResponse {
    pub fn new(project: ProjectRecord) -> Self {
        Self {
            success: true,
            project,
        }
    }
}

/// `{ "success": true }`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "success": true, "token": "...", "expires_at": 1700000000 }`
///
/// Both `token` and `expires_at` are omitted when admin auth is disabled.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl LoginResponse {
    /// Session admitted without credentials on an open server.
    pub fn open() -> Self {
        Self {
            success: true,
            token: None,
            expires_at: None,
        }
    }
}

impl From<IssuedToken> for LoginResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            success: true,
            token: Some(issued.token),
            expires_at: Some(issued.expires_at),
        }
    }
}
