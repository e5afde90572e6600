#![allow(dead_code)]

use chrono::Utc;
use reddit_api::models::{NewPost, NewSubreddit};
use reddit_api::repositories::UserRepository;
use reddit_api::{storage, RedditApi};
use sea_orm::DatabaseConnection;

pub async fn setup() -> DatabaseConnection {
    storage::open_in_memory().await.expect("in-memory database")
}

/// Insert a user without paying for a bcrypt hash.
pub async fn seed_user(conn: &DatabaseConnection, username: &str) -> i32 {
    UserRepository::create(conn, username, "not-a-real-hash".to_string(), Utc::now())
        .await
        .expect("seed user")
}

pub async fn seed_subreddit(api: &RedditApi<'_, DatabaseConnection>, name: &str) -> i32 {
    api.create_subreddit(NewSubreddit {
        name: name.to_string(),
        description: Some(format!("All about {name}")),
    })
    .await
    .expect("seed subreddit")
}

pub async fn seed_post(api: &RedditApi<'_, DatabaseConnection>, user_id: i32, subreddit_id: i32, title: &str) -> i32 {
    api.create_post(NewPost {
        user_id,
        subreddit_id,
        title: title.to_string(),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
    })
    .await
    .expect("seed post")
}
