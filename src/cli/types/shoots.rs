//! Shooting-hand type for players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side a player shoots from.
///
/// Stored in the `players.shoots` column as a single character, `L` or `R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shoots {
    Left,
    Right,
}

impl Shoots {
    /// The single-character column value for this hand.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shoots::Left => "L",
            Shoots::Right => "R",
        }
    }
}

impl fmt::Display for Shoots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_values() {
        assert_eq!(Shoots::Left.as_str(), "L");
        assert_eq!(Shoots::Right.as_str(), "R");
        assert_eq!(Shoots::Left.to_string(), "L");
    }
}
