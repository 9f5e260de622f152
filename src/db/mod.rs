//! Database module
//!
//! Handles SQLite connection and migrations.

pub mod connection;
pub mod migrations;

pub use connection::{date_column, Database, DbError, DbResult, DATE_FORMAT};
