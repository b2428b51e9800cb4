//! Report rendering
//!
//! Pure formatting of query results into the stdout report lines. Keeping
//! this free of I/O lets the exact output be unit tested without a
//! database connection.

use crate::storage::models::{OldestPlayer, Team, TeamAverage, YoungestPlayer};

/// Separator printed after each report section.
pub const SEPARATOR: &str = "----";

/// The team-list section: header, one line per team, separator.
pub fn teams_section(teams: &[Team]) -> Vec<String> {
    let mut lines = vec!["The teams:".to_string()];
    for team in teams {
        lines.push(format!(
            " The {} were founded in {}.",
            team.name, team.founding_year
        ));
    }
    lines.push(SEPARATOR.to_string());
    lines
}

/// The youngest-players section: header, one line per row, separator.
pub fn youngest_section(players: &[YoungestPlayer]) -> Vec<String> {
    let mut lines = vec!["The five youngest players are:".to_string()];
    for row in players {
        lines.push(format!(
            " {} is {} and plays for the {}.",
            row.player, row.age, row.team
        ));
    }
    lines.push(SEPARATOR.to_string());
    lines
}

/// The oldest-player-per-team section. A team without players gets an
/// explicit absence line rather than being skipped.
pub fn oldest_section(oldest: &[(String, Option<OldestPlayer>)]) -> Vec<String> {
    let mut lines = Vec::with_capacity(oldest.len() + 1);
    for (team, player) in oldest {
        lines.push(match player {
            Some(player) => format!(
                "The oldest player on the {} is {}. He is {}.",
                team, player.name, player.age
            ),
            None => format!("The {} have no players on the roster.", team),
        });
    }
    lines.push(SEPARATOR.to_string());
    lines
}

/// The average-age comparison between two teams.
///
/// The team with the strictly lower average is reported younger; equal
/// averages are reported as a tie, and a team without players is named
/// instead of compared.
pub fn comparison_line(first: &TeamAverage, second: &TeamAverage) -> String {
    match (first.average, second.average) {
        (Some(a), Some(b)) if a < b => {
            format!("The {} have younger players on average.", first.team)
        }
        (Some(a), Some(b)) if b < a => {
            format!("The {} have younger players on average.", second.team)
        }
        (Some(_), Some(_)) => format!(
            "The {} and the {} have the same average age.",
            first.team, second.team
        ),
        (None, Some(_)) => format!("The {} have no players to compare.", first.team),
        (Some(_), None) => format!("The {} have no players to compare.", second.team),
        (None, None) => format!(
            "Neither the {} nor the {} have any players to compare.",
            first.team, second.team
        ),
    }
}
