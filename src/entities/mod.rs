pub mod post;
pub mod subreddit;
pub mod user;
pub mod vote;

pub use post::Entity as Post;
pub use subreddit::Entity as Subreddit;
pub use user::Entity as User;
pub use vote::Entity as Vote;
