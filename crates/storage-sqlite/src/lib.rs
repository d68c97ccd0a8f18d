//! SQLite storage implementation for the journal service.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `journal-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for entries and goals
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` and the HTTP server are database-agnostic and work with traits.
//!
//! ```text
//!   server (http)
//!       │
//!       ▼
//!  core (domain)
//!       │
//!       ▼
//!  storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod entries;
pub mod goals;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, ping, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from journal-core for convenience
pub use journal_core::errors::{DatabaseError, Error, Result};
