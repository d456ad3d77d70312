//! Repository for project records stored under the `project:` prefix.

use folio_core::project::{project_key, ProjectRecord, PROJECT_KEY_PREFIX};

use crate::error::StoreError;
use crate::kv::KvStore;

/// Provides the four project operations over a [`KvStore`].
///
/// Create and update are both upserts: no existence or uniqueness check is
/// made before writing.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List every stored project in backend order.
    ///
    /// Values under the prefix that do not decode as a project are skipped.
    pub async fn list(store: &dyn KvStore) -> Result<Vec<ProjectRecord>, StoreError> {
        let values = store.get_by_prefix(PROJECT_KEY_PREFIX).await?;
        let projects = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<ProjectRecord>(value) {
                Ok(project) => Some(project),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed project record");
                    None
                }
            })
            .collect();
        Ok(projects)
    }

    /// Write `project` at `project:<id>`, replacing any previous value.
    pub async fn upsert(
        store: &dyn KvStore,
        project: ProjectRecord,
    ) -> Result<ProjectRecord, StoreError> {
        let value = serde_json::to_value(&project)?;
        store.set(&project.storage_key(), value).await?;
        Ok(project)
    }

    /// Remove `project:<id>`. Succeeds whether or not the key existed.
    pub async fn delete(store: &dyn KvStore, id: &str) -> Result<(), StoreError> {
        store.del(&project_key(id)).await
    }
}
