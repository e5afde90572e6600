mod common;

use reddit_api::entities::user;
use reddit_api::models::NewUser;
use reddit_api::utils::password::verify_password;
use reddit_api::{ApiError, RedditApi};
use sea_orm::{DatabaseBackend, DbErr, EntityTrait, MockDatabase};

fn new_user(username: &str, password: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_create_user_stores_hash_not_plaintext() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);

    let id = api.create_user(new_user("alice", "correct horse")).await.unwrap();

    let stored = user::Entity::find_by_id(id).one(&conn).await.unwrap().unwrap();
    assert_eq!(stored.username, "alice");
    assert_ne!(stored.password, "correct horse");
    assert!(verify_password("correct horse", &stored.password).unwrap());
    assert!(!verify_password("wrong horse", &stored.password).unwrap());
}

#[tokio::test]
async fn test_verify_password_through_facade() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);

    api.create_user(new_user("bob", "hunter2")).await.unwrap();

    assert!(api.verify_password("bob", "hunter2").await.unwrap());
    assert!(!api.verify_password("bob", "hunter3").await.unwrap());
    assert!(!api.verify_password("nobody", "hunter2").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_username_is_domain_error() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);

    let first = api.create_user(new_user("carol", "one")).await.unwrap();
    let second = api.create_user(new_user("carol", "two")).await;

    assert!(matches!(second, Err(ApiError::DuplicateUsername)));
    assert_eq!(
        second.unwrap_err().to_string(),
        "A user with this username already exists"
    );

    // The first registration is untouched
    let existing = api.get_user(first).await.unwrap().unwrap();
    assert_eq!(existing.username, "carol");
    assert!(api.verify_password("carol", "one").await.unwrap());
}

#[tokio::test]
async fn test_user_summary_never_exposes_password() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);

    let id = api.create_user(new_user("dave", "topsecret")).await.unwrap();
    let summary = api.get_user(id).await.unwrap().unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("topsecret"));

    let model = user::Entity::find_by_id(id).one(&conn).await.unwrap().unwrap();
    let json = serde_json::to_string(&model).unwrap();
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn test_get_user_missing() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);
    assert!(api.get_user(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_user_passes_through_unrecognised_storage_errors() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_errors([DbErr::Custom("disk I/O error".to_string())])
        .into_connection();
    let api = RedditApi::new(&db);

    let result = api.create_user(new_user("erin", "pw")).await;

    match result {
        Err(ApiError::Database(DbErr::Custom(message))) => assert_eq!(message, "disk I/O error"),
        other => panic!("expected the storage error unchanged, got {other:?}"),
    }
    assert_eq!(db.into_transaction_log().len(), 1);
}
