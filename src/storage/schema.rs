//! Database connection and schema management

use crate::error::{Result, RosterError};
use crate::{PASSWORD_ENV_VAR, USERNAME_ENV_VAR};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{Connection, PgConnection};

/// Remote database endpoint. Everything except the credentials is fixed.
pub const DB_HOST: &str = "aws-us-east-1-portal.9.dblayer.com";
pub const DB_PORT: u16 = 10366;
pub const DB_NAME: &str = "compose";

/// Credentials read from the process environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Read both required variables, failing before any network activity
    /// if either is absent.
    pub fn from_env() -> Result<Self> {
        let username = std::env::var(USERNAME_ENV_VAR)
            .map_err(|_| RosterError::MissingCredential {
                env_var: USERNAME_ENV_VAR,
            })?;
        let password = std::env::var(PASSWORD_ENV_VAR)
            .map_err(|_| RosterError::MissingCredential {
                env_var: PASSWORD_ENV_VAR,
            })?;
        Ok(Self { username, password })
    }
}

/// Database connection manager for roster data.
///
/// Owns the one connection for the run; no pooling, no sharing.
pub struct RosterDatabase {
    pub(crate) conn: PgConnection,
}

impl RosterDatabase {
    /// Open the single TLS connection to the fixed remote endpoint.
    pub async fn connect(credentials: &Credentials) -> Result<Self> {
        log::info!("connecting to {DB_NAME} at {DB_HOST}:{DB_PORT}");
        let options = PgConnectOptions::new()
            .host(DB_HOST)
            .port(DB_PORT)
            .database(DB_NAME)
            .username(&credentials.username)
            .password(&credentials.password)
            .ssl_mode(PgSslMode::Require);
        let conn = PgConnection::connect_with(&options)
            .await
            .map_err(RosterError::Connection)?;
        Ok(Self { conn })
    }

    /// Open a connection from a URL instead of the fixed endpoint.
    ///
    /// Used by the database integration tests, which point at a disposable
    /// local Postgres via `DATABASE_URL`.
    pub async fn connect_url(url: &str) -> Result<Self> {
        let conn = PgConnection::connect(url)
            .await
            .map_err(RosterError::Connection)?;
        Ok(Self { conn })
    }

    /// Gracefully close the connection at the end of a run.
    ///
    /// Dropping a `RosterDatabase` also releases the connection, so early
    /// error returns do not leak it; this is the success-path close.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }

    /// Drop and recreate both tables.
    ///
    /// `players` holds a foreign key into `teams`, so it is dropped first;
    /// both drops are `IF EXISTS` so a first run on an empty database
    /// succeeds. Safe to run repeatedly: two resets in a row leave both
    /// tables present and empty.
    pub async fn reset_schema(&mut self) -> Result<()> {
        let mut tx = self.conn.begin().await?;
        reset_schema_on(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}

/// Run the four reset statements on a connection or open transaction.
pub(crate) async fn reset_schema_on(conn: &mut PgConnection) -> Result<()> {
    log::debug!("dropping and recreating tables");
    sqlx::query("DROP TABLE IF EXISTS players")
        .execute(&mut *conn)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS teams")
        .execute(&mut *conn)
        .await?;
    sqlx::query(
        "CREATE TABLE teams (
            id INTEGER PRIMARY KEY,
            name VARCHAR(100),
            division VARCHAR(20),
            founding_year INTEGER
        )",
    )
    .execute(&mut *conn)
    .await?;
    sqlx::query(
        "CREATE TABLE players (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100),
            number INTEGER,
            age INTEGER,
            shoots CHAR(1),
            team_id INTEGER REFERENCES teams
        )",
    )
    .execute(&mut *conn)
    .await?;
    Ok(())
}
