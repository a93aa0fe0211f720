//! UserStore tests against an in-memory SQLite database.

use common::{AppError, DatabaseConfig};
use domain::{User, UserId, UserName};
use sea_orm::DatabaseConnection;

use user_service_lib::infra::Database;
use user_service_lib::repository::{UserRepository, UserStore};

async fn connect() -> DatabaseConnection {
    // One connection: every pooled connection would get its own memory database
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    Database::connect(&config)
        .await
        .expect("in-memory sqlite should connect")
        .get_connection()
}

fn user(id: &str, name: &str) -> User {
    User::new(UserId::new(id).unwrap(), UserName::new(name).unwrap())
}

#[tokio::test]
async fn test_save_then_find_by_id_and_name() {
    let store = UserStore::new(connect().await);
    let alice = user("id-1", "alice");

    store.save(&alice).await.unwrap();

    let by_id = store.find_by_id(alice.id()).await.unwrap();
    let by_name = store.find_by_name(alice.name()).await.unwrap();
    assert_eq!(by_id, Some(alice.clone()));
    assert_eq!(by_name, Some(alice));
}

#[tokio::test]
async fn test_lookups_miss_with_none() {
    let store = UserStore::new(connect().await);

    let by_id = store.find_by_id(&UserId::new("nobody").unwrap()).await.unwrap();
    let by_name = store.find_by_name(&UserName::new("nobody").unwrap()).await.unwrap();

    assert!(by_id.is_none());
    assert!(by_name.is_none());
}

#[tokio::test]
async fn test_unique_constraint_rejects_second_save_with_same_name() {
    let store = UserStore::new(connect().await);
    store.save(&user("id-1", "bob")).await.unwrap();

    // Bypasses the uniqueness service, as a concurrent writer would
    let err = store.save(&user("id-2", "bob")).await.unwrap_err();

    assert!(matches!(err, AppError::DuplicateName(ref name) if name == "bob"));
    assert!(store.find_by_id(&UserId::new("id-2").unwrap()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unique_constraint_rejects_rename_onto_taken_name() {
    let store = UserStore::new(connect().await);
    store.save(&user("id-1", "alice")).await.unwrap();
    store.save(&user("id-2", "bob")).await.unwrap();

    let mut bob = user("id-2", "bob");
    bob.change_name(UserName::new("alice").unwrap());
    let err = store.update(&bob).await.unwrap_err();

    assert!(matches!(err, AppError::DuplicateName(_)));
    let stored = store.find_by_id(bob.id()).await.unwrap().unwrap();
    assert_eq!(stored.name().as_str(), "bob");
}

#[tokio::test]
async fn test_update_overwrites_name() {
    let store = UserStore::new(connect().await);
    let mut alice = user("id-1", "alice");
    store.save(&alice).await.unwrap();

    alice.change_name(UserName::new("alicia").unwrap());
    store.update(&alice).await.unwrap();

    let stored = store.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(stored.name().as_str(), "alicia");
    assert!(store
        .find_by_name(&UserName::new("alice").unwrap())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_writes_to_missing_rows_succeed() {
    let store = UserStore::new(connect().await);
    let ghost = user("ghost", "casper");

    store.update(&ghost).await.unwrap();
    store.delete(&ghost).await.unwrap();

    assert!(store.find_by_id(ghost.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_row() {
    let store = UserStore::new(connect().await);
    let alice = user("id-1", "alice");
    store.save(&alice).await.unwrap();

    store.delete(&alice).await.unwrap();

    assert!(store.find_by_id(alice.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ping() {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = Database::connect(&config).await.unwrap();

    db.ping().await.unwrap();
}
