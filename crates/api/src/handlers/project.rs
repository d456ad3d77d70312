//! Handlers for the `/projects` resource.
//!
//! Create and update both upsert at `project:<id>`; delete never reports a
//! missing id.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use folio_core::project::ProjectInput;
use folio_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::response::{ProjectListResponse, ProjectResponse, SuccessResponse};
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ProjectListResponse>> {
    let projects = ProjectRepo::list(state.store.as_ref()).await?;
    Ok(Json(ProjectListResponse::new(projects)))
}

/// POST /api/v1/projects
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: Result<Json<ProjectInput>, JsonRejection>,
) -> AppResult<Json<ProjectResponse>> {
    let Json(input) = payload?;
    let record = input.into_new_record()?;
    let project = ProjectRepo::upsert(state.store.as_ref(), record).await?;
    tracing::info!(project_id = %project.id, "Project created");
    Ok(Json(ProjectResponse::new(project)))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProjectInput>, JsonRejection>,
) -> AppResult<Json<ProjectResponse>> {
    let Json(input) = payload?;
    let record = input.into_record_with_id(&id)?;
    let project = ProjectRepo::upsert(state.store.as_ref(), record).await?;
    tracing::info!(project_id = %project.id, "Project updated");
    Ok(Json(ProjectResponse::new(project)))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    ProjectRepo::delete(state.store.as_ref(), &id).await?;
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(SuccessResponse::ok()))
}
