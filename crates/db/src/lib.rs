//! Key-value persistence for folio.
//!
//! [`kv::KvStore`] is the generic collaborator the project store runs on.
//! Two backends ship with the crate: [`postgres::PgKvStore`] for deployments
//! and [`memory::MemoryKvStore`] for local development and tests.
//! [`repositories::ProjectRepo`] namespaces project records on top of it.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod kv;
pub mod memory;
pub mod postgres;
pub mod repositories;

pub use error::StoreError;
pub use kv::KvStore;
pub use memory::MemoryKvStore;
pub use postgres::PgKvStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
