//! Project record model, request DTO, and validation rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Key prefix namespacing project records in the key-value store.
pub const PROJECT_KEY_PREFIX: &str = "project:";

/// Placeholder image stored when a record arrives without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1614294148960-9aa740632a87?w=800";

/// Message carried by the validation error for a missing required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// A single portfolio entry as persisted in the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectRecord {
    /// Storage key for this record (`project:<id>`).
    pub fn storage_key(&self) -> String {
        project_key(&self.id)
    }
}

/// Build the storage key for a project id.
pub fn project_key(id: &str) -> String {
    format!("{PROJECT_KEY_PREFIX}{id}")
}

fn default_image() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

/// Body of a create or update request. Every field is optional on the wire
/// so that missing fields surface as a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub link: Option<String>,
}

impl ProjectInput {
    /// Validate a create request. The id must be supplied in the body.
    pub fn into_new_record(mut self) -> Result<ProjectRecord, CoreError> {
        let id = self
            .id
            .take()
            .filter(|id| !id.is_empty())
            .ok_or_else(missing_fields)?;
        self.into_record(id)
    }

    /// Validate an update request for `id`. Any id in the body is ignored.
    ///
    /// The result replaces the stored record wholesale: fields left out of
    /// the body fall back to their defaults rather than the previous value.
    pub fn into_record_with_id(self, id: &str) -> Result<ProjectRecord, CoreError> {
        if id.is_empty() {
            return Err(missing_fields());
        }
        self.into_record(id.to_string())
    }

    fn into_record(self, id: String) -> Result<ProjectRecord, CoreError> {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(missing_fields)?;
        let description = self
            .description
            .filter(|d| !d.is_empty())
            .ok_or_else(missing_fields)?;

        Ok(ProjectRecord {
            id,
            title,
            description,
            image: self
                .image
                .filter(|i| !i.is_empty())
                .unwrap_or_else(default_image),
            tags: self.tags.unwrap_or_default(),
            link: self.link.filter(|l| !l.is_empty()),
        })
    }
}

impl From<ProjectRecord> for ProjectInput {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: Some(record.id),
            title: Some(record.title),
            description: Some(record.description),
            image: Some(record.image),
            tags: Some(record.tags),
            link: record.link,
        }
    }
}

fn missing_fields() -> CoreError {
    CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string())
}
