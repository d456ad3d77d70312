#![allow(dead_code)]

use std::sync::Arc;

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use folio_api::auth::jwt::JwtConfig;
use folio_api::config::{AuthConfig, CorsOrigins, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::{KvStore, MemoryKvStore, StoreError};

pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults: any CORS origin, no
/// database, admin auth disabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        database: None,
        auth: None,
    }
}

/// Admin auth keyed to [`ADMIN_PASSWORD`], hashed with cheap Argon2 params.
pub fn test_auth_config() -> AuthConfig {
    let salt = SaltString::encode_b64(b"folio-test-salt").unwrap();
    let params = Params::new(1024, 1, 1, None).unwrap();
    let admin_password_hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
        .unwrap()
        .to_string();

    AuthConfig {
        admin_password_hash,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(store: Arc<dyn KvStore>, auth: Option<AuthConfig>) -> Router {
    let config = ServerConfig {
        auth,
        ..test_config()
    };
    build_app_router(AppState::new(store, config))
}

/// App over a fresh in-memory store with auth disabled. The store is
/// returned so tests can inspect what the handlers wrote.
pub fn memory_app() -> (Router, Arc<MemoryKvStore>) {
    let store = Arc::new(MemoryKvStore::new());
    (build_test_app(store.clone(), None), store)
}

/// Backend whose every operation fails with `offline`.
pub struct FailingStore;

#[async_trait]
impl KvStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(offline())
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
        Err(offline())
    }

    async fn del(&self, _key: &str) -> Result<(), StoreError> {
        Err(offline())
    }

    async fn get_by_prefix(&self, _prefix: &str) -> Result<Vec<Value>, StoreError> {
        Err(offline())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(offline())
    }
}

fn offline() -> StoreError {
    StoreError::Backend("offline".into())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
