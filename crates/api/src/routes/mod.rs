pub mod auth;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /health                  service health (also mounted at the root)
///
/// /auth/login              exchange admin password for a token
///
/// /projects                list, create
/// /projects/{id}           update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
}
