//! Input and output shapes for the repository facade.
//!
//! Inputs are plain structs mirroring what a caller submits. Outputs that are
//! assembled from joins (the post feed) get explicit nested types instead of
//! loosely-shaped maps.

use sea_orm::prelude::DateTimeUtc;
use serde::{Deserialize, Serialize};

use crate::entities::{subreddit, user};
use crate::error::ApiError;

/// Fields required to register a user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Fields required to create a subreddit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewSubreddit {
    pub name: String,
    pub description: Option<String>,
}

/// Fields required to submit a post to a subreddit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: i32,
    pub subreddit_id: i32,
    pub title: String,
    pub url: String,
}

/// A vote as submitted by a caller; `vote_direction` is validated on use.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewVote {
    pub post_id: i32,
    pub user_id: i32,
    pub vote_direction: i32,
}

/// A validated vote direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum VoteDirection {
    Down,
    Neutral,
    Up,
}

impl TryFrom<i32> for VoteDirection {
    type Error = ApiError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Down),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Up),
            other => Err(ApiError::InvalidVote(other)),
        }
    }
}

impl From<VoteDirection> for i32 {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Down => -1,
            VoteDirection::Neutral => 0,
            VoteDirection::Up => 1,
        }
    }
}

/// Public view of a user; never carries the password hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl From<user::Model> for UserSummary {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Subreddit fields embedded in a feed entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubredditSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl From<subreddit::Model> for SubredditSummary {
    fn from(subreddit: subreddit::Model) -> Self {
        Self {
            id: subreddit.id,
            name: subreddit.name,
            description: subreddit.description,
            created_at: subreddit.created_at,
            updated_at: subreddit.updated_at,
        }
    }
}

/// Post fields embedded in a feed entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// One ranked entry of the post feed.
///
/// `score` is the sum of every vote direction cast on the post; a post
/// nobody voted on scores 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostFeedEntry {
    pub score: i64,
    pub post: PostSummary,
    pub user: UserSummary,
    pub subreddit: SubredditSummary,
}
