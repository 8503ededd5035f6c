use database::{ItemPage, ItemRepository, NewItem, SqliteItemRepository, UpdateItem};
use std::sync::Arc;
use uuid::Uuid;

/// Contract tests that all ItemRepository implementations must pass
///
/// These tests verify that implementations correctly handle all operations
/// defined in the ItemRepository trait, including edge cases and error
/// conditions.
pub async fn test_repository_contract<R: ItemRepository + 'static>(repo: Arc<R>) {
    test_health_check(repo.clone()).await;
    test_create_contract(repo.clone()).await;
    test_get_contract(repo.clone()).await;
    test_update_contract(repo.clone()).await;
    test_delete_contract(repo.clone()).await;
    test_count_and_list_contract(repo.clone()).await;
    test_validation_errors_contract(repo.clone()).await;
}

async fn test_health_check<R: ItemRepository>(repo: Arc<R>) {
    assert!(
        repo.health_check().await.is_ok(),
        "Health check should pass for healthy repository"
    );
}

async fn test_create_contract<R: ItemRepository>(repo: Arc<R>) {
    let new_item = NewItem {
        title: "Contract Create Test".to_string(),
        description: Some("Verify create contract".to_string()),
        is_completed: false,
    };

    let created = repo.create(new_item).await.unwrap();

    // Verify client-supplied fields
    assert_eq!(created.title, "Contract Create Test");
    assert_eq!(created.description.as_deref(), Some("Verify create contract"));
    assert!(!created.is_completed);

    // Verify server-assigned fields
    assert!(!created.id.is_nil());
    assert!(created.created_at <= chrono::Utc::now());
    assert!(created.updated_at.is_none());
}

async fn test_get_contract<R: ItemRepository>(repo: Arc<R>) {
    let created = repo.create(NewItem::new("Contract Get Test")).await.unwrap();

    // Successful retrieval equals the create response
    let retrieved = repo.get(created.id).await.unwrap();
    assert_eq!(retrieved, Some(created));

    // Non-existent id returns None (not error)
    let not_found = repo.get(Uuid::new_v4()).await.unwrap();
    assert!(not_found.is_none());
}

async fn test_update_contract<R: ItemRepository>(repo: Arc<R>) {
    let created = repo
        .create(NewItem {
            title: "Original Title".to_string(),
            description: Some("Original description".to_string()),
            is_completed: false,
        })
        .await
        .unwrap();

    // Full update
    let updates = UpdateItem {
        title: Some("Updated Title".to_string()),
        description: Some(Some("Updated description".to_string())),
        is_completed: Some(true),
    };

    let updated = repo.update(created.id, updates).await.unwrap();
    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.description.as_deref(), Some("Updated description"));
    assert!(updated.is_completed);
    assert_eq!(updated.id, created.id); // Id never changes
    assert_eq!(updated.created_at, created.created_at); // Creation time never changes
    assert!(updated.updated_at.is_some());

    // Partial update leaves other fields untouched
    let partial = UpdateItem {
        title: Some("Partially Updated".to_string()),
        ..Default::default()
    };

    let partially_updated = repo.update(created.id, partial).await.unwrap();
    assert_eq!(partially_updated.title, "Partially Updated");
    assert_eq!(
        partially_updated.description.as_deref(),
        Some("Updated description")
    );
    assert!(partially_updated.is_completed);

    // Explicit null clears the description
    let clear = UpdateItem {
        description: Some(None),
        ..Default::default()
    };

    let cleared = repo.update(created.id, clear).await.unwrap();
    assert!(cleared.description.is_none());
    assert_eq!(cleared.title, "Partially Updated");

    // Empty update returns the current row unchanged
    let unchanged = repo.update(created.id, UpdateItem::default()).await.unwrap();
    assert_eq!(unchanged, cleared);

    // Unknown id is NotFound
    let err = repo
        .update(Uuid::new_v4(), UpdateItem { is_completed: Some(true), ..Default::default() })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

async fn test_delete_contract<R: ItemRepository>(repo: Arc<R>) {
    let created = repo.create(NewItem::new("Contract Delete Test")).await.unwrap();

    repo.delete(created.id).await.unwrap();

    // Deleted items are gone for good
    assert!(repo.get(created.id).await.unwrap().is_none());

    // Deleting again is NotFound
    let err = repo.delete(created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

async fn test_count_and_list_contract<R: ItemRepository>(repo: Arc<R>) {
    let before = repo.count().await.unwrap();

    let mut ids = Vec::new();
    for i in 0..3 {
        let created = repo.create(NewItem::new(format!("Count Test {i}"))).await.unwrap();
        ids.push(created.id);
    }

    assert_eq!(repo.count().await.unwrap(), before + 3);

    // A window wider than the table returns everything
    let all = repo.list(ItemPage::clamped(1, 100)).await.unwrap();
    assert_eq!(all.len() as i64, before + 3);

    for id in ids {
        repo.delete(id).await.unwrap();
    }
    assert_eq!(repo.count().await.unwrap(), before);
}

async fn test_validation_errors_contract<R: ItemRepository>(repo: Arc<R>) {
    // Empty title is rejected before touching the store
    let err = repo.create(NewItem::new("")).await.unwrap_err();
    assert!(err.is_validation());

    // Overlong title is rejected as well
    let err = repo.create(NewItem::new("a".repeat(256))).await.unwrap_err();
    assert!(err.is_validation());

    // Updates enforce the same title constraints
    let created = repo.create(NewItem::new("Validation Test")).await.unwrap();
    let err = repo
        .update(
            created.id,
            UpdateItem { title: Some(String::new()), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn sqlite_repository_satisfies_contract() {
    let repo = Arc::new(SqliteItemRepository::in_memory().await.unwrap());
    test_repository_contract(repo).await;
}
