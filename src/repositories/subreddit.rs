//! Subreddit repository for database operations.

use sea_orm::{prelude::DateTimeUtc, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::entities::subreddit;

/// Repository for subreddit-related database operations.
pub struct SubredditRepository;

impl SubredditRepository {
    /// Insert a subreddit, returning the new id.
    pub async fn create<C>(conn: &C, name: &str, description: Option<String>, now: DateTimeUtc) -> Result<i32, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = subreddit::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = subreddit::Entity::insert(model).exec(conn).await?;
        Ok(result.last_insert_id)
    }

    /// Get a single subreddit by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<subreddit::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        subreddit::Entity::find_by_id(id).one(conn).await
    }

    /// Get the most recently created subreddits, newest first.
    pub async fn get_recent<C>(conn: &C, limit: u64) -> Result<Vec<subreddit::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        subreddit::Entity::find()
            .order_by_desc(subreddit::Column::CreatedAt)
            .order_by_desc(subreddit::Column::Id)
            .limit(limit)
            .all(conn)
            .await
    }
}
