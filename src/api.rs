//! Repository facade over a caller-owned connection.
//!
//! [`RedditApi`] borrows a connection for its whole lifetime and never opens,
//! pools or closes connections itself. Every operation is a single request to
//! the store (two for [`RedditApi::create_post`] when a reference check is
//! needed to classify a failure). Uniqueness and referential integrity are
//! enforced by the store; the facade only translates the violations it
//! recognises into [`ApiError`] variants and passes everything else through.

use chrono::Utc;
use log::{debug, warn};
use sea_orm::ConnectionTrait;

use crate::constants::{FEED_LIMIT, SUBREDDIT_LIST_LIMIT};
use crate::entities::{post, subreddit, vote};
use crate::error::{is_foreign_key_violation, is_unique_violation, ApiError, Result};
use crate::models::{NewPost, NewSubreddit, NewUser, NewVote, PostFeedEntry, UserSummary, VoteDirection};
use crate::repositories::{PostRepository, SubredditRepository, UserRepository, VoteRepository};
use crate::utils::password;

/// Data-access facade for users, subreddits, posts and votes.
///
/// # Example
/// ```rust,no_run
/// use reddit_api::api::RedditApi;
/// use reddit_api::models::{NewSubreddit, NewUser};
///
/// # async fn example() -> anyhow::Result<()> {
/// let conn = reddit_api::storage::open_in_memory().await?;
/// let api = RedditApi::new(&conn);
///
/// let user_id = api
///     .create_user(NewUser { username: "alice".into(), password: "s3cret".into() })
///     .await?;
/// let subreddit_id = api
///     .create_subreddit(NewSubreddit { name: "rust".into(), description: None })
///     .await?;
/// # let _ = (user_id, subreddit_id);
/// # Ok(())
/// # }
/// ```
pub struct RedditApi<'a, C> {
    conn: &'a C,
}

impl<'a, C> RedditApi<'a, C>
where
    C: ConnectionTrait,
{
    /// Wrap an existing connection. The caller keeps ownership of it.
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Register a user and return the generated id.
    ///
    /// The password is hashed before it leaves this function; only the hash
    /// is stored.
    ///
    /// # Errors
    /// [`ApiError::DuplicateUsername`] when the username is taken.
    pub async fn create_user(&self, user: NewUser) -> Result<i32> {
        debug!("Creating user '{}'", user.username);

        let NewUser { username, password: plain } = user;
        let hashed = tokio::task::spawn_blocking(move || password::hash_password(&plain)).await??;

        match UserRepository::create(self.conn, &username, hashed, Utc::now()).await {
            Ok(id) => {
                debug!("Created user '{}' with id {}", username, id);
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => {
                warn!("Rejected duplicate username '{}'", username);
                Err(ApiError::DuplicateUsername)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Create a subreddit and return the generated id.
    ///
    /// # Errors
    /// [`ApiError::DuplicateSubreddit`] when the name is taken.
    pub async fn create_subreddit(&self, subreddit: NewSubreddit) -> Result<i32> {
        debug!("Creating subreddit '{}'", subreddit.name);

        match SubredditRepository::create(self.conn, &subreddit.name, subreddit.description, Utc::now()).await {
            Ok(id) => {
                debug!("Created subreddit '{}' with id {}", subreddit.name, id);
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => {
                warn!("Rejected duplicate subreddit name '{}'", subreddit.name);
                Err(ApiError::DuplicateSubreddit)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Create a post and return the new post's id.
    ///
    /// # Errors
    /// [`ApiError::SubredditNotFound`] when `subreddit_id` references nothing.
    /// A missing author is not translated and surfaces as the raw storage error.
    pub async fn create_post(&self, post: NewPost) -> Result<i32> {
        debug!("Creating post '{}' in subreddit {}", post.title, post.subreddit_id);

        let err = match PostRepository::create(
            self.conn,
            post.user_id,
            post.subreddit_id,
            &post.title,
            &post.url,
            Utc::now(),
        )
        .await
        {
            Ok(id) => {
                debug!("Created post {}", id);
                return Ok(id);
            }
            Err(err) => err,
        };

        // The store reports which constraint failed, not which reference.
        if is_foreign_key_violation(&err)
            && SubredditRepository::get_by_id(self.conn, post.subreddit_id)
                .await?
                .is_none()
        {
            warn!("Rejected post for missing subreddit {}", post.subreddit_id);
            return Err(ApiError::SubredditNotFound);
        }

        Err(err.into())
    }

    /// Record a vote, replacing any earlier vote by the same user on the same post.
    ///
    /// # Errors
    /// [`ApiError::InvalidVote`] for a direction outside {-1, 0, 1}, raised
    /// before the store is contacted. Storage failures are returned as-is.
    pub async fn create_vote(&self, vote: NewVote) -> Result<()> {
        let direction = VoteDirection::try_from(vote.vote_direction)?;
        debug!(
            "User {} voting {} on post {}",
            vote.user_id, vote.vote_direction, vote.post_id
        );

        VoteRepository::upsert(self.conn, vote.post_id, vote.user_id, direction.into()).await?;
        Ok(())
    }

    /// Get up to 25 posts with their score, author and subreddit, highest score first.
    pub async fn get_all_posts(&self) -> Result<Vec<PostFeedEntry>> {
        let rows = PostRepository::get_feed(self.conn, FEED_LIMIT).await?;
        debug!("Loaded {} feed entries", rows.len());
        Ok(rows.into_iter().map(PostFeedEntry::from).collect())
    }

    /// Get up to 25 subreddits, newest first.
    pub async fn get_all_subreddits(&self) -> Result<Vec<subreddit::Model>> {
        Ok(SubredditRepository::get_recent(self.conn, SUBREDDIT_LIST_LIMIT).await?)
    }

    /// Get a single post by id.
    pub async fn get_post(&self, id: i32) -> Result<Option<post::Model>> {
        Ok(PostRepository::get_by_id(self.conn, id).await?)
    }

    /// Get a user's public fields by id.
    pub async fn get_user(&self, id: i32) -> Result<Option<UserSummary>> {
        Ok(UserRepository::get_by_id(self.conn, id)
            .await?
            .map(UserSummary::from))
    }

    /// Get the vote a user cast on a post.
    pub async fn get_vote(&self, post_id: i32, user_id: i32) -> Result<Option<vote::Model>> {
        Ok(VoteRepository::get(self.conn, post_id, user_id).await?)
    }

    /// Count the votes recorded for a post.
    pub async fn count_votes(&self, post_id: i32) -> Result<u64> {
        Ok(VoteRepository::count_for_post(self.conn, post_id).await?)
    }

    /// Check a candidate password against the stored hash. Unknown users never match.
    pub async fn verify_password(&self, username: &str, candidate: &str) -> Result<bool> {
        let Some(user) = UserRepository::get_by_username(self.conn, username).await? else {
            return Ok(false);
        };

        let candidate = candidate.to_string();
        let matches =
            tokio::task::spawn_blocking(move || password::verify_password(&candidate, &user.password)).await??;
        Ok(matches)
    }
}
