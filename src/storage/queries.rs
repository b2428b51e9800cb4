//! Report query operations
//!
//! All five report queries are read-only and independent of one another.
//! Ordering is explicit everywhere (`teams` by id, players by age with the
//! row id as tiebreak) so report output is reproducible run to run.

use super::models::{OldestPlayer, Team, TeamAverage, YoungestPlayer};
use super::schema::RosterDatabase;
use crate::cli::types::TeamId;
use crate::error::Result;
use sqlx::Row;

impl RosterDatabase {
    /// Every team row, ordered by id.
    pub async fn list_teams(&mut self) -> Result<Vec<Team>> {
        let rows = sqlx::query(
            "SELECT id, name, division, founding_year
             FROM teams
             ORDER BY id",
        )
        .fetch_all(&mut self.conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Team {
                id: TeamId::new(row.get("id")),
                name: row.get("name"),
                division: row.get("division"),
                founding_year: row.get("founding_year"),
            })
            .collect())
    }

    /// The `limit` youngest players across the league, joined to their
    /// team names, youngest first.
    pub async fn youngest_players(&mut self, limit: i64) -> Result<Vec<YoungestPlayer>> {
        let rows = sqlx::query(
            "SELECT p.name AS player, p.age, t.name AS team
             FROM players AS p
             JOIN teams AS t ON t.id = p.team_id
             ORDER BY p.age ASC, p.id ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&mut self.conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| YoungestPlayer {
                player: row.get("player"),
                age: row.get("age"),
                team: row.get("team"),
            })
            .collect())
    }

    /// The oldest player on one team, or `None` when the team has no
    /// players. Absence is a reportable fact, not an error.
    pub async fn oldest_player(&mut self, team: TeamId) -> Result<Option<OldestPlayer>> {
        let row = sqlx::query(
            "SELECT name, age
             FROM players
             WHERE team_id = $1
             ORDER BY age DESC, id ASC
             LIMIT 1",
        )
        .bind(team.as_i32())
        .fetch_optional(&mut self.conn)
        .await?;

        Ok(row.map(|row| OldestPlayer {
            name: row.get("name"),
            age: row.get("age"),
        }))
    }

    /// Mean player age on one team; `None` when the team has no players.
    ///
    /// Postgres `AVG` over integers yields NUMERIC, so the cast keeps the
    /// value in double precision end to end.
    pub async fn average_age(&mut self, team: TeamId) -> Result<Option<f64>> {
        let average: Option<f64> = sqlx::query_scalar(
            "SELECT CAST(AVG(age) AS DOUBLE PRECISION)
             FROM players
             WHERE team_id = $1",
        )
        .bind(team.as_i32())
        .fetch_one(&mut self.conn)
        .await?;

        Ok(average)
    }

    /// Average age for each of the given teams, in the given order.
    pub async fn team_averages(&mut self, teams: &[Team]) -> Result<Vec<TeamAverage>> {
        let mut averages = Vec::with_capacity(teams.len());
        for team in teams {
            let average = self.average_age(team.id).await?;
            averages.push(TeamAverage {
                team: team.name.clone(),
                average,
            });
        }
        Ok(averages)
    }

    /// Row count of the `teams` table.
    pub async fn team_count(&mut self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&mut self.conn)
            .await?;
        Ok(count)
    }

    /// Row count of the `players` table.
    pub async fn player_count(&mut self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
            .fetch_one(&mut self.conn)
            .await?;
        Ok(count)
    }
}
