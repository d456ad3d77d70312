//! Admin authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod jwt;
pub mod password;

/// Subject claim carried by admin tokens.
pub const ADMIN_SUBJECT: &str = "admin";

/// Role claim required by mutating project endpoints.
pub const ADMIN_ROLE: &str = "admin";
