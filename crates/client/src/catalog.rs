//! Local project list kept in step with the remote store.

use folio_core::defaults::default_projects;
use folio_core::project::ProjectRecord;

use crate::backend::ProjectsBackend;
use crate::draft::ProjectDraft;
use crate::error::ClientError;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this project?";
pub const SAVE_FAILED_ALERT: &str = "Failed to save project. Please try again.";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete project. Please try again.";
pub const LOGIN_FAILED_ALERT: &str = "Incorrect password";

/// Blocking user interaction hooks.
pub trait Prompt: Send + Sync {
    /// Ask a yes/no question. `true` means proceed.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);
}

/// How [`ProjectCatalog::bootstrap`] obtained its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The store already held this many records.
    Loaded(usize),
    /// The store was empty and the defaults were written to it.
    Seeded,
    /// The store was empty but writing the defaults failed part way, usually
    /// because the server wants a login first. The defaults are shown
    /// unpersisted and seeding is retried after [`ProjectCatalog::login`].
    SeedFailed,
    /// The store could not be listed; defaults adopted without persisting.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

/// Ordered project list plus the loading and admin flags of the page.
///
/// Mutations go to the backend first and are applied locally only after it
/// answers; a failed call alerts through [`Prompt`] and leaves the list as it
/// was.
pub struct ProjectCatalog<B, P> {
    backend: B,
    prompt: P,
    projects: Vec<ProjectRecord>,
    loading: bool,
    admin: bool,
    seed_pending: bool,
}

impl<B: ProjectsBackend, P: Prompt> ProjectCatalog<B, P> {
    /// A catalog that has not loaded yet (`is_loading()` is `true`).
    pub fn new(backend: B, prompt: P) -> Self {
        Self {
            backend,
            prompt,
            projects: Vec::new(),
            loading: true,
            admin: false,
            seed_pending: false,
        }
    }

    /// Latest snapshot, in display order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Whether the defaults still have to be written to the store.
    pub fn is_seed_pending(&self) -> bool {
        self.seed_pending
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the list, seeding an empty store with the default projects.
    ///
    /// Never fails: any backend error falls back to the defaults so the page
    /// always has something to show.
    pub async fn bootstrap(&mut self) -> BootstrapOutcome {
        self.loading = true;
        self.seed_pending = false;

        let outcome = match self.backend.list().await {
            Ok(projects) if projects.is_empty() => {
                self.projects = default_projects();
                if self.seed_defaults().await {
                    BootstrapOutcome::Seeded
                } else {
                    self.seed_pending = true;
                    BootstrapOutcome::SeedFailed
                }
            }
            Ok(projects) => {
                let count = projects.len();
                self.projects = projects;
                BootstrapOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load projects, using defaults");
                self.projects = default_projects();
                BootstrapOutcome::Fallback
            }
        };

        self.loading = false;
        tracing::debug!(?outcome, count = self.projects.len(), "Catalog bootstrapped");
        outcome
    }

    /// Enter admin mode by authenticating against the backend.
    ///
    /// Seeding that failed during [`Self::bootstrap`] is retried once the
    /// session is admitted.
    pub async fn login(&mut self, password: &str) -> Result<(), ClientError> {
        match self.backend.login(password).await {
            Ok(()) => {
                self.admin = true;
                if self.seed_pending && self.seed_defaults().await {
                    self.seed_pending = false;
                    tracing::info!("Default projects seeded after login");
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Admin login failed");
                self.prompt.alert(LOGIN_FAILED_ALERT);
                Err(e)
            }
        }
    }

    pub async fn logout(&mut self) {
        self.backend.logout().await;
        self.admin = false;
    }

    /// Submit the editor: update `editing` if given, otherwise create.
    pub async fn save(
        &mut self,
        draft: ProjectDraft,
        editing: Option<&str>,
    ) -> Result<ProjectRecord, ClientError> {
        let record = match draft.into_record(editing) {
            Ok(record) => record,
            Err(e) => {
                self.prompt.alert(&e.to_string());
                return Err(e);
            }
        };

        match editing {
            Some(_) => self.update(record).await,
            None => self.create(record).await,
        }
    }

    /// Create `project` remotely and append the stored record.
    pub async fn create(&mut self, project: ProjectRecord) -> Result<ProjectRecord, ClientError> {
        self.require_admin()?;

        match self.backend.create(&project).await {
            Ok(stored) => {
                self.projects.push(stored.clone());
                Ok(stored)
            }
            Err(e) => {
                tracing::error!(error = %e, project_id = %project.id, "Error saving project");
                self.prompt.alert(SAVE_FAILED_ALERT);
                Err(e)
            }
        }
    }

    /// Replace `project` remotely and swap the stored record in by id.
    pub async fn update(&mut self, project: ProjectRecord) -> Result<ProjectRecord, ClientError> {
        self.require_admin()?;

        match self.backend.update(&project.id, &project).await {
            Ok(stored) => {
                for existing in self.projects.iter_mut().filter(|p| p.id == stored.id) {
                    *existing = stored.clone();
                }
                Ok(stored)
            }
            Err(e) => {
                tracing::error!(error = %e, project_id = %project.id, "Error saving project");
                self.prompt.alert(SAVE_FAILED_ALERT);
                Err(e)
            }
        }
    }

    /// Delete `id` after the user confirms.
    pub async fn delete(&mut self, id: &str) -> Result<DeleteOutcome, ClientError> {
        self.require_admin()?;

        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.backend.delete(id).await {
            Ok(()) => {
                self.projects.retain(|p| p.id != id);
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                tracing::error!(error = %e, project_id = %id, "Error deleting project");
                self.prompt.alert(DELETE_FAILED_ALERT);
                Err(e)
            }
        }
    }

    /// Create each default record in order, stopping at the first failure.
    /// Returns `true` when all of them were stored.
    async fn seed_defaults(&self) -> bool {
        for project in default_projects() {
            if let Err(e) = self.backend.create(&project).await {
                tracing::error!(error = %e, project_id = %project.id, "Failed to seed default project");
                return false;
            }
        }
        true
    }

    fn require_admin(&self) -> Result<(), ClientError> {
        if self.admin {
            Ok(())
        } else {
            Err(ClientError::AdminRequired)
        }
    }
}
