//! Journal Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules of the journal service.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod entries;
pub mod errors;
pub mod goals;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
