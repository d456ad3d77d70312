//! The generic key-value collaborator.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// Minimal JSON key-value store.
///
/// Implementations provide atomic per-key `get`/`set`/`del` but no
/// transaction spanning several keys: two writers to the same key race and
/// the last write wins.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored at `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` at `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn del(&self, key: &str) -> Result<(), StoreError>;

    /// Return every value whose key starts with `prefix`, in insertion order.
    ///
    /// This is a full scan; there is no pagination.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
