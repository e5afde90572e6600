//! Connection setup and schema bootstrap
//!
//! The facade never opens or closes connections itself. This module is the
//! caller-side helper that does: it turns a [`crate::config::DatabaseConfig`]
//! into a live [`sea_orm::DatabaseConnection`] and can create the tables the
//! entities describe.

pub mod db;

pub use db::{connect, init_schema, open_in_memory};
