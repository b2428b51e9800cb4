//! Type-safe wrappers and enums for roster data.

pub mod ids;
pub mod shoots;

pub use ids::TeamId;
pub use shoots::Shoots;
