//! PostgreSQL-backed [`KvStore`].

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;

use crate::error::StoreError;
use crate::kv::KvStore;
use crate::DbPool;

/// Key-value table stored in `kv_store` (see `migrations/`).
#[derive(Debug, Clone)]
pub struct PgKvStore {
    pool: DbPool,
}

impl PgKvStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let row: Option<(Json<Value>,)> = sqlx::query_as("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(Json(value),)| value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(key)
        .bind(Json(value))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM kv_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<(Json<Value>,)> = sqlx::query_as(
            r"SELECT value FROM kv_store
              WHERE key LIKE $1 ESCAPE '\'
              ORDER BY created_at, key",
        )
        .bind(format!("{}%", escape_like(prefix)))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(Json(value),)| value).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

/// Escape `LIKE` metacharacters so `prefix` matches literally.
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prefix_is_unchanged() {
        assert_eq!(escape_like("project:"), "project:");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(escape_like(r"a%b_c\d"), r"a\%b\_c\\d");
    }
}
