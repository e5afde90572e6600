mod common;

use reddit_api::models::NewPost;
use reddit_api::{ApiError, RedditApi};

#[tokio::test]
async fn test_create_post_returns_its_own_id() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);

    let user_id = common::seed_user(&conn, "alice").await;
    let subreddit_id = common::seed_subreddit(&api, "rust").await;
    // A second subreddit keeps post and subreddit ids from coinciding
    let other_subreddit = common::seed_subreddit(&api, "golang").await;

    let first = common::seed_post(&api, user_id, other_subreddit, "warm up").await;
    let id = api
        .create_post(NewPost {
            user_id,
            subreddit_id,
            title: "Ownership explained".to_string(),
            url: "https://example.com/ownership".to_string(),
        })
        .await
        .unwrap();

    assert_ne!(id, first);
    assert_ne!(id, subreddit_id);

    let post = api.get_post(id).await.unwrap().expect("post should exist");
    assert_eq!(post.id, id);
    assert_eq!(post.title, "Ownership explained");
    assert_eq!(post.url, "https://example.com/ownership");
    assert_eq!(post.user_id, user_id);
    assert_eq!(post.subreddit_id, subreddit_id);
}

#[tokio::test]
async fn test_create_post_in_missing_subreddit() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);

    let user_id = common::seed_user(&conn, "alice").await;

    let result = api
        .create_post(NewPost {
            user_id,
            subreddit_id: 999,
            title: "Lost".to_string(),
            url: "https://example.com/lost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::SubredditNotFound)));
    assert_eq!(result.unwrap_err().to_string(), "This subreddit does not exist");
}

#[tokio::test]
async fn test_create_post_with_missing_author_propagates_storage_error() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);

    let subreddit_id = common::seed_subreddit(&api, "rust").await;

    let result = api
        .create_post(NewPost {
            user_id: 999,
            subreddit_id,
            title: "Ghost".to_string(),
            url: "https://example.com/ghost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Database(_))));
}

#[tokio::test]
async fn test_get_post_missing() {
    let conn = common::setup().await;
    let api = RedditApi::new(&conn);
    assert!(api.get_post(1).await.unwrap().is_none());
}
