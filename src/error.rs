//! Domain errors surfaced by [`crate::api::RedditApi`].

use sea_orm::{DbErr, SqlErr};

use crate::constants::{ERROR_DUPLICATE_SUBREDDIT, ERROR_DUPLICATE_USERNAME, ERROR_SUBREDDIT_NOT_FOUND};

/// Result alias for facade operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by the repository facade.
///
/// Constraint violations the facade recognises are translated into their own
/// variants; every other storage failure is carried unchanged in
/// [`ApiError::Database`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", ERROR_DUPLICATE_USERNAME)]
    DuplicateUsername,

    #[error("{}", ERROR_DUPLICATE_SUBREDDIT)]
    DuplicateSubreddit,

    #[error("{}", ERROR_SUBREDDIT_NOT_FOUND)]
    SubredditNotFound,

    #[error("Invalid vote direction {0}: expected -1, 0 or 1")]
    InvalidVote(i32),

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// True when the store rejected a write because of a unique key.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// True when the store rejected a write because a referenced row is missing.
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
