//! Command implementations for the roster seed-and-report CLI

pub mod run;
