//! Constants used throughout the crate
//!
//! Centralises limits, cost factors and user-facing error text.

/// bcrypt work factor applied to every stored password
pub const HASH_ROUNDS: u32 = 10;

/// Maximum number of entries returned by the post feed
pub const FEED_LIMIT: u64 = 25;

/// Maximum number of entries returned by the subreddit listing
pub const SUBREDDIT_LIST_LIMIT: u64 = 25;

// Domain error messages
pub const ERROR_DUPLICATE_USERNAME: &str = "A user with this username already exists";
pub const ERROR_DUPLICATE_SUBREDDIT: &str = "A subreddit with this name already exists";
pub const ERROR_SUBREDDIT_NOT_FOUND: &str = "This subreddit does not exist";

// Configuration
pub const CONFIG_FILE_NAME: &str = "reddit-api.toml";
pub const CONFIG_DIR_NAME: &str = "reddit-api";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
/// Only the SQLite driver is compiled in
pub const SQLITE_URL_SCHEME: &str = "sqlite:";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://reddit.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const MAX_CONNECTIONS_LIMIT: u32 = 100;

/// Timestamp layout used in log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
