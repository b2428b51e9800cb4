//! Hockey Roster Seed-and-Report CLI Library
//!
//! A small Rust library for rebuilding a two-table hockey roster schema on a
//! remote PostgreSQL database, seeding it with a fixed sample data set, and
//! reporting derived facts about it.
//!
//! ## Features
//!
//! - **Schema Reset**: Drop and recreate the `teams` and `players` tables
//! - **Seed Data**: Batched, parameterized inserts of the sample rosters
//! - **Report Queries**: Team list, league-wide youngest players, oldest
//!   player per team, and an average-age comparison between teams
//! - **Typed Errors**: Configuration, connection, statement, and integrity
//!   failures are distinguished and mapped to process exit codes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rink_roster::commands::run::handle_run;
//!
//! # async fn example() -> rink_roster::Result<()> {
//! // Connect, rebuild the schema, seed it, and print the report.
//! handle_run(false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Credentials for the remote database are read from the environment:
//! ```bash
//! export COMPOSE_USERNAME=aws_user
//! export COMPOSE_PASSWORD=secret
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Shoots, TeamId};
pub use error::{Result, RosterError};
pub use storage::RosterDatabase;

pub const USERNAME_ENV_VAR: &str = "COMPOSE_USERNAME";
pub const PASSWORD_ENV_VAR: &str = "COMPOSE_PASSWORD";
