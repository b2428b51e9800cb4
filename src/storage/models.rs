//! Data models for the storage layer

use crate::cli::types::{Shoots, TeamId};
use serde::{Deserialize, Serialize};

/// A team row as stored in the `teams` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub division: String,
    pub founding_year: i32,
}

/// A player to be inserted into the `players` table.
///
/// The row id is assigned by the database sequence, so the seed shape
/// carries everything except `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub name: String,
    pub number: i32,
    pub age: i32,
    pub shoots: Shoots,
    pub team_id: TeamId,
}

/// One row of the league-wide youngest-players report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoungestPlayer {
    pub player: String,
    pub age: i32,
    pub team: String,
}

/// The oldest player on a team, when the team has any players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OldestPlayer {
    pub name: String,
    pub age: i32,
}

/// A team's average player age. `average` is `None` for a team with no
/// players (SQL `AVG` over zero rows is NULL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAverage {
    pub team: String,
    pub average: Option<f64>,
}
