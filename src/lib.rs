//! reddit-api - data-access layer for a small reddit-style backend
//!
//! This library turns application-level calls (register a user, create a
//! subreddit, submit a post, vote, read the feed) into parameterised queries
//! against a relational store, shapes the results into nested domain values
//! and maps constraint violations to domain errors.
//!
//! # Modules
//!
//! * [`api`] - The repository facade, [`api::RedditApi`]
//! * [`config`] - Application configuration management
//! * [`storage`] - Connection setup and schema bootstrap
//! * [`repositories`] - One query per function, generic over the connection
//! * [`models`] - Input shapes and the feed's nested output types

/// Repository facade exposing the data-access operations
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Domain error type
pub mod error;

/// Logging setup
pub mod logger;

/// Input and output shapes for the facade
pub mod models;

/// Repository layer for database operations
pub mod repositories;

/// Connection and schema management
pub mod storage;

/// Utility functions such as password hashing
pub mod utils;

pub use api::RedditApi;
pub use entities::{post, subreddit, user, vote};
pub use error::{ApiError, Result};
