//! Storage layer for the roster seed-and-report CLI
//!
//! This module provides a clean abstraction over the remote PostgreSQL
//! database, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `seed`: Fixed sample rosters and batched inserts
//! - `queries`: Report query operations

pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::{Credentials, RosterDatabase};
