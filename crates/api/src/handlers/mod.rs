pub mod auth;
pub mod project;
