//! Editor form state for creating or editing a project.

use folio_core::project::{ProjectRecord, DEFAULT_IMAGE_URL};

use crate::error::ClientError;

/// Message shown when the form is submitted without title or description.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Unsaved contents of the project editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Empty means "use the placeholder image".
    pub image: String,
    pub tags: Vec<String>,
    /// Empty means "no link".
    pub link: String,
}

impl ProjectDraft {
    /// Pre-fill the editor from an existing record.
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            image: record.image.clone(),
            tags: record.tags.clone(),
            link: record.link.clone().unwrap_or_default(),
        }
    }

    /// Add a trimmed tag. Returns `false` for blank input or a duplicate.
    pub fn add_tag(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Build the record to submit.
    ///
    /// `existing_id` keeps the id of the record being edited; a new record
    /// gets a timestamp id from [`generate_project_id`].
    pub fn into_record(self, existing_id: Option<&str>) -> Result<ProjectRecord, ClientError> {
        if self.title.is_empty() || self.description.is_empty() {
            return Err(ClientError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        let id = existing_id
            .map(str::to_string)
            .unwrap_or_else(generate_project_id);
        let image = if self.image.is_empty() {
            DEFAULT_IMAGE_URL.to_string()
        } else {
            self.image
        };
        let link = Some(self.link).filter(|l| !l.is_empty());

        Ok(ProjectRecord {
            id,
            title: self.title,
            description: self.description,
            image,
            tags: self.tags,
            link,
        })
    }
}

/// Fresh project id: milliseconds since the Unix epoch, in decimal.
pub fn generate_project_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn filled() -> ProjectDraft {
        ProjectDraft {
            title: "Title".into(),
            description: "Desc".into(),
            ..Default::default()
        }
    }

    #[test]
    fn duplicate_and_blank_tags_are_ignored() {
        let mut draft = ProjectDraft::default();
        assert!(draft.add_tag("  RPG "));
        assert!(!draft.add_tag("RPG"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("City"));
        assert_eq!(draft.tags, ["RPG", "City"]);

        draft.remove_tag("RPG");
        assert_eq!(draft.tags, ["City"]);
    }

    #[test]
    fn missing_title_is_rejected() {
        let draft = ProjectDraft {
            title: String::new(),
            ..filled()
        };
        assert_matches!(
            draft.into_record(None),
            Err(ClientError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE
        );
    }

    #[test]
    fn whitespace_title_is_kept() {
        let draft = ProjectDraft {
            title: " ".into(),
            ..filled()
        };
        assert_eq!(draft.into_record(None).unwrap().title, " ");
    }

    #[test]
    fn new_record_gets_timestamp_id_and_placeholder() {
        let before = chrono::Utc::now().timestamp_millis();
        let record = filled().into_record(None).unwrap();
        let id: i64 = record.id.parse().unwrap();
        assert!(id >= before);
        assert_eq!(record.image, DEFAULT_IMAGE_URL);
        assert_eq!(record.link, None);
    }

    #[test]
    fn editing_keeps_existing_id() {
        let mut draft = filled();
        draft.link = "https://example.com".into();
        let record = draft.into_record(Some("42")).unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn from_record_round_trips_through_editor() {
        let original = ProjectRecord {
            id: "9".into(),
            title: "T".into(),
            description: "D".into(),
            image: "https://img.test/a.png".into(),
            tags: vec!["x".into()],
            link: None,
        };
        let record = ProjectDraft::from_record(&original)
            .into_record(Some("9"))
            .unwrap();
        assert_eq!(record, original);
    }
}
