use async_trait::async_trait;
use folio_core::project::ProjectRecord;

use crate::error::ClientError;

/// The remote project store as seen by [`crate::ProjectCatalog`].
///
/// Every call is one request/response round trip; none is retried.
#[async_trait]
pub trait ProjectsBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ClientError>;

    /// Store a new record. Returns the record as stored.
    async fn create(&self, project: &ProjectRecord) -> Result<ProjectRecord, ClientError>;

    /// Replace the record at `id`. Returns the record as stored.
    async fn update(&self, id: &str, project: &ProjectRecord)
        -> Result<ProjectRecord, ClientError>;

    async fn delete(&self, id: &str) -> Result<(), ClientError>;

    /// Exchange the admin password for credentials used by later mutations.
    async fn login(&self, password: &str) -> Result<(), ClientError>;

    /// Forget any credentials obtained by [`ProjectsBackend::login`].
    async fn logout(&self);
}
