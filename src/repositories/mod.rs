//! Repository layer for database operations.
//!
//! Each repository is a stateless struct whose functions take the connection
//! as an argument, so the same query code runs against a pooled connection,
//! a transaction or a mock. Repositories return raw [`sea_orm::DbErr`]s;
//! translating constraint violations is left to the facade.

pub mod post;
pub mod subreddit;
pub mod user;
pub mod vote;

pub use post::{FeedRow, PostRepository};
pub use subreddit::SubredditRepository;
pub use user::UserRepository;
pub use vote::VoteRepository;
