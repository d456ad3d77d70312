/// Failure of the underlying key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A backend-specific failure that is neither SQL nor JSON.
    #[error("Storage backend error: {0}")]
    Backend(String),
}
