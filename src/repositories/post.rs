//! Post repository for database operations, including the ranked feed.

use sea_orm::{
    prelude::DateTimeUtc, ActiveValue, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, Statement,
};

use crate::entities::post;
use crate::models::{PostFeedEntry, PostSummary, SubredditSummary, UserSummary};

/// Flat row produced by the feed query, one per post.
#[derive(Debug, Clone, FromQueryResult)]
pub struct FeedRow {
    pub score: i64,
    pub post_id: i32,
    pub post_title: String,
    pub post_url: String,
    pub post_created_at: DateTimeUtc,
    pub post_updated_at: DateTimeUtc,
    pub user_id: i32,
    pub user_username: String,
    pub user_created_at: DateTimeUtc,
    pub user_updated_at: DateTimeUtc,
    pub subreddit_id: i32,
    pub subreddit_name: String,
    pub subreddit_description: Option<String>,
    pub subreddit_created_at: DateTimeUtc,
    pub subreddit_updated_at: DateTimeUtc,
}

impl From<FeedRow> for PostFeedEntry {
    fn from(row: FeedRow) -> Self {
        Self {
            score: row.score,
            post: PostSummary {
                id: row.post_id,
                title: row.post_title,
                url: row.post_url,
                created_at: row.post_created_at,
                updated_at: row.post_updated_at,
            },
            user: UserSummary {
                id: row.user_id,
                username: row.user_username,
                created_at: row.user_created_at,
                updated_at: row.user_updated_at,
            },
            subreddit: SubredditSummary {
                id: row.subreddit_id,
                name: row.subreddit_name,
                description: row.subreddit_description,
                created_at: row.subreddit_created_at,
                updated_at: row.subreddit_updated_at,
            },
        }
    }
}

/// Repository for post-related database operations.
pub struct PostRepository;

impl PostRepository {
    /// Insert a post, returning the new post's id.
    pub async fn create<C>(
        conn: &C,
        user_id: i32,
        subreddit_id: i32,
        title: &str,
        url: &str,
        now: DateTimeUtc,
    ) -> Result<i32, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = post::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            subreddit_id: ActiveValue::Set(subreddit_id),
            title: ActiveValue::Set(title.to_string()),
            url: ActiveValue::Set(url.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = post::Entity::insert(model).exec(conn).await?;
        Ok(result.last_insert_id)
    }

    /// Get a single post by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<post::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        post::Entity::find_by_id(id).one(conn).await
    }

    /// Get the feed: posts joined with their author and subreddit, scored by
    /// the sum of their votes, highest score first.
    ///
    /// Grouping is per post so that posts without any vote each keep their
    /// own row with a score of 0. Ties go to the newer post.
    pub async fn get_feed<C>(conn: &C, limit: u64) -> Result<Vec<FeedRow>, DbErr>
    where
        C: ConnectionTrait,
    {
        let sql = format!(
            r"
            SELECT
                COALESCE(SUM(votes.vote_direction), 0) AS score,
                posts.id AS post_id,
                posts.title AS post_title,
                posts.url AS post_url,
                posts.created_at AS post_created_at,
                posts.updated_at AS post_updated_at,
                users.id AS user_id,
                users.username AS user_username,
                users.created_at AS user_created_at,
                users.updated_at AS user_updated_at,
                subreddits.id AS subreddit_id,
                subreddits.name AS subreddit_name,
                subreddits.description AS subreddit_description,
                subreddits.created_at AS subreddit_created_at,
                subreddits.updated_at AS subreddit_updated_at
            FROM posts
            JOIN users ON users.id = posts.user_id
            JOIN subreddits ON subreddits.id = posts.subreddit_id
            LEFT JOIN votes ON votes.post_id = posts.id
            GROUP BY posts.id, users.id, subreddits.id
            ORDER BY score DESC, posts.created_at DESC, posts.id DESC
            LIMIT {limit}
            "
        );

        FeedRow::find_by_statement(Statement::from_string(conn.get_database_backend(), sql))
            .all(conn)
            .await
    }
}
