//! Integration tests for `ProjectRepo` over the in-memory store.

use folio_core::project::{ProjectInput, ProjectRecord};
use folio_db::repositories::ProjectRepo;
use folio_db::{KvStore, MemoryKvStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn project(id: &str, title: &str, description: &str) -> ProjectRecord {
    ProjectInput {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        ..Default::default()
    }
    .into_new_record()
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_project_is_listed() {
    let store = MemoryKvStore::new();
    let mut created = project("10", "Title", "Desc");
    created.tags = vec!["a".into(), "b".into()];
    created.link = Some("https://example.com".into());

    let stored = ProjectRepo::upsert(&store, created.clone()).await.unwrap();
    assert_eq!(stored, created);

    let listed = ProjectRepo::list(&store).await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn records_are_namespaced_under_prefix() {
    let store = MemoryKvStore::new();
    ProjectRepo::upsert(&store, project("1", "T", "D"))
        .await
        .unwrap();

    assert!(store.get("project:1").await.unwrap().is_some());
    assert!(store.get("1").await.unwrap().is_none());
}

#[tokio::test]
async fn list_ignores_foreign_keys_and_malformed_values() {
    let store = MemoryKvStore::new();
    store.set("session:1", json!({"id": "1"})).await.unwrap();
    store.set("project:broken", json!({"nope": true})).await.unwrap();
    ProjectRepo::upsert(&store, project("2", "T", "D"))
        .await
        .unwrap();

    let listed = ProjectRepo::list(&store).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "2");
}

#[tokio::test]
async fn update_is_a_full_overwrite() {
    let store = MemoryKvStore::new();
    let mut original = project("5", "X", "Y");
    original.tags = vec!["keep?".into()];
    original.link = Some("https://example.com".into());
    ProjectRepo::upsert(&store, original).await.unwrap();

    let replacement = ProjectInput {
        title: Some("Z".into()),
        description: Some("Y".into()),
        ..Default::default()
    }
    .into_record_with_id("5")
    .unwrap();
    ProjectRepo::upsert(&store, replacement.clone()).await.unwrap();

    let listed = ProjectRepo::list(&store).await.unwrap();
    assert_eq!(listed, vec![replacement]);
    assert!(listed[0].tags.is_empty());
    assert_eq!(listed[0].link, None);
}

#[tokio::test]
async fn create_with_existing_id_overwrites_silently() {
    let store = MemoryKvStore::new();
    ProjectRepo::upsert(&store, project("1", "First", "D"))
        .await
        .unwrap();
    ProjectRepo::upsert(&store, project("1", "Second", "D"))
        .await
        .unwrap();

    let listed = ProjectRepo::list(&store).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Second");
}

#[tokio::test]
async fn delete_removes_and_tolerates_missing_ids() {
    let store = MemoryKvStore::new();
    ProjectRepo::upsert(&store, project("1", "T", "D"))
        .await
        .unwrap();

    ProjectRepo::delete(&store, "1").await.unwrap();
    ProjectRepo::delete(&store, "nonexistent").await.unwrap();

    assert!(ProjectRepo::list(&store).await.unwrap().is_empty());
    assert!(store.get("project:1").await.unwrap().is_none());
}
