//! Fixed sample rosters and batched insert operations

use super::models::{PlayerSeed, Team};
use super::schema::{self, RosterDatabase};
use crate::cli::types::{Shoots, TeamId};
use crate::error::Result;
use sqlx::{Connection, PgConnection};

/// Team identities for the sample data set.
pub const SABRES: TeamId = TeamId(1);
pub const LEAFS: TeamId = TeamId(2);

/// The two seeded teams.
pub fn sample_teams() -> Vec<Team> {
    vec![
        Team {
            id: SABRES,
            name: "Buffalo Sabres".to_string(),
            division: "Atlantic".to_string(),
            founding_year: 1970,
        },
        Team {
            id: LEAFS,
            name: "Toronto Maple Leafs".to_string(),
            division: "Atlantic".to_string(),
            founding_year: 1917,
        },
    ]
}

/// The fourteen seeded players, seven per team.
pub fn sample_players() -> Vec<PlayerSeed> {
    fn player(name: &str, number: i32, age: i32, shoots: Shoots, team_id: TeamId) -> PlayerSeed {
        PlayerSeed {
            name: name.to_string(),
            number,
            age,
            shoots,
            team_id,
        }
    }

    vec![
        player("Jack Eichel", 15, 19, Shoots::Right, SABRES),
        player("Zemgus Girgensons", 28, 21, Shoots::Left, SABRES),
        player("David Legwand", 17, 35, Shoots::Left, SABRES),
        player("Cody McCormick", 8, 32, Shoots::Right, SABRES),
        player("Cal O'Reilly", 19, 29, Shoots::Left, SABRES),
        player("Ryan O'Reilly", 90, 24, Shoots::Left, SABRES),
        player("Sam Reinhart", 23, 20, Shoots::Right, SABRES),
        player("Tyler Bozak", 42, 29, Shoots::Right, LEAFS),
        player("Byron Froese", 56, 24, Shoots::Right, LEAFS),
        player("Peter Holland", 24, 24, Shoots::Left, LEAFS),
        player("Nazem Kadri", 43, 25, Shoots::Left, LEAFS),
        player("Leo Komarov", 47, 28, Shoots::Left, LEAFS),
        player("Shawn Matthias", 23, 27, Shoots::Left, LEAFS),
        player("Nick Spaling", 16, 27, Shoots::Left, LEAFS),
    ]
}

impl RosterDatabase {
    /// Reset the schema and load both sample tables in one transaction, so
    /// a mid-sequence failure cannot leave the schema half-built.
    pub async fn reset_and_seed(&mut self, teams: &[Team], players: &[PlayerSeed]) -> Result<()> {
        let mut tx = self.conn.begin().await?;
        schema::reset_schema_on(&mut *tx).await?;
        insert_teams_on(&mut *tx, teams).await?;
        insert_players_on(&mut *tx, players).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Insert team rows as one batched statement.
    ///
    /// Not idempotent: team ids are the primary key, so inserting over
    /// existing rows fails with an integrity error.
    pub async fn insert_teams(&mut self, teams: &[Team]) -> Result<()> {
        insert_teams_on(&mut self.conn, teams).await
    }

    /// Insert player rows as one batched statement; ids are assigned by
    /// the database sequence.
    pub async fn insert_players(&mut self, players: &[PlayerSeed]) -> Result<()> {
        insert_players_on(&mut self.conn, players).await
    }
}

/// Build the placeholder list for a multi-row insert:
/// `($1, $2, ...), ($k+1, ...), ...`
pub(crate) fn values_clause(columns: usize, rows: usize) -> String {
    let mut clause = String::new();
    let mut n = 1;
    for row in 0..rows {
        if row > 0 {
            clause.push_str(", ");
        }
        clause.push('(');
        for column in 0..columns {
            if column > 0 {
                clause.push_str(", ");
            }
            clause.push('$');
            clause.push_str(&n.to_string());
            n += 1;
        }
        clause.push(')');
    }
    clause
}

pub(crate) async fn insert_teams_on(conn: &mut PgConnection, teams: &[Team]) -> Result<()> {
    if teams.is_empty() {
        return Ok(());
    }
    let sql = format!(
        "INSERT INTO teams (id, name, division, founding_year) VALUES {}",
        values_clause(4, teams.len())
    );
    let mut query = sqlx::query(&sql);
    for team in teams {
        query = query
            .bind(team.id.as_i32())
            .bind(&team.name)
            .bind(&team.division)
            .bind(team.founding_year);
    }
    query.execute(&mut *conn).await?;
    log::debug!("inserted {} team rows", teams.len());
    Ok(())
}

pub(crate) async fn insert_players_on(conn: &mut PgConnection, players: &[PlayerSeed]) -> Result<()> {
    if players.is_empty() {
        return Ok(());
    }
    let sql = format!(
        "INSERT INTO players (name, number, age, shoots, team_id) VALUES {}",
        values_clause(5, players.len())
    );
    let mut query = sqlx::query(&sql);
    for player in players {
        query = query
            .bind(&player.name)
            .bind(player.number)
            .bind(player.age)
            .bind(player.shoots.as_str())
            .bind(player.team_id.as_i32());
    }
    query.execute(&mut *conn).await?;
    log::debug!("inserted {} player rows", players.len());
    Ok(())
}
