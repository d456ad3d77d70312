//! Client side of the folio portfolio.
//!
//! [`catalog::ProjectCatalog`] is the state manager the page drives: it loads
//! the project list once, seeds an empty store with the default entries, and
//! applies create/update/delete results to its local snapshot.
//! [`api::HttpProjectsApi`] talks to the folio API server over HTTP.

pub mod api;
pub mod backend;
pub mod catalog;
pub mod draft;
pub mod error;

pub use api::HttpProjectsApi;
pub use backend::ProjectsBackend;
pub use catalog::{BootstrapOutcome, DeleteOutcome, ProjectCatalog, Prompt};
pub use draft::ProjectDraft;
pub use error::ClientError;
