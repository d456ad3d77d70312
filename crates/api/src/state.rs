use std::sync::Arc;

use folio_db::{KvStore, MemoryKvStore, PgKvStore, StoreError};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Key-value backend holding the project records.
    pub store: Arc<dyn KvStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Open the key-value backend selected by `config`.
///
/// With a database configured this connects, checks health, and applies
/// migrations; otherwise an empty in-memory store is returned.
pub async fn connect_store(config: &ServerConfig) -> Result<Arc<dyn KvStore>, StoreError> {
    let Some(database) = &config.database else {
        tracing::warn!("DATABASE_URL not set, using volatile in-memory store");
        return Ok(Arc::new(MemoryKvStore::new()));
    };

    let pool = folio_db::create_pool(&database.url, database.max_connections).await?;
    tracing::info!("Database connection pool created");

    folio_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    folio_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgKvStore::new(pool)))
}
