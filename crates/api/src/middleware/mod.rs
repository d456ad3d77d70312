//! Request extractors guarding the project endpoints.
//!
//! - [`auth::RequireAdmin`] -- Requires an admin bearer token when admin auth is configured.

pub mod auth;
