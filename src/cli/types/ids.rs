//! ID types for roster entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for team IDs.
///
/// Team IDs are externally assigned small integers (they are the `teams`
/// primary key), and every seeded player references one of them. The
/// wrapper keeps them from being mixed up with other numeric values such
/// as jersey numbers or ages.
///
/// # Examples
///
/// ```rust
/// use rink_roster::TeamId;
///
/// let team_id = TeamId::new(1);
/// assert_eq!(team_id.as_i32(), 1);
/// assert_eq!(team_id.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i32);

impl TeamId {
    /// Create a new TeamId from an i32 value.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
