//! The seed-and-report workflow

use crate::report;
use crate::storage::schema::{DB_HOST, DB_NAME, DB_PORT};
use crate::storage::seed::{sample_players, sample_teams};
use crate::storage::{Credentials, RosterDatabase};
use crate::Result;

/// Run the whole workflow: connect, rebuild and seed the schema, print the
/// report, and close the connection.
///
/// Credentials are checked before any network activity. On every error
/// path the connection handle is dropped, which releases it; the explicit
/// close only happens on the clean path.
pub async fn handle_run(verbose: bool) -> Result<()> {
    let credentials = Credentials::from_env()?;

    let mut db = RosterDatabase::connect(&credentials).await?;
    if verbose {
        println!("✓ Connected to {} at {}:{}", DB_NAME, DB_HOST, DB_PORT);
    }

    db.reset_and_seed(&sample_teams(), &sample_players())
        .await?;
    if verbose {
        println!("✓ Schema reset and sample rosters loaded");
    }

    print_report(&mut db).await?;

    db.close().await?;
    Ok(())
}

/// Run the five report queries and print their sections to stdout.
pub async fn print_report(db: &mut RosterDatabase) -> Result<()> {
    let teams = db.list_teams().await?;
    for line in report::teams_section(&teams) {
        println!("{line}");
    }

    let youngest = db.youngest_players(5).await?;
    for line in report::youngest_section(&youngest) {
        println!("{line}");
    }

    let mut oldest = Vec::with_capacity(teams.len());
    for team in &teams {
        oldest.push((team.name.clone(), db.oldest_player(team.id).await?));
    }
    for line in report::oldest_section(&oldest) {
        println!("{line}");
    }

    let averages = db.team_averages(&teams).await?;
    if let [first, second] = &averages[..] {
        println!("{}", report::comparison_line(first, second));
    } else {
        log::warn!(
            "average-age comparison needs exactly two teams, found {}",
            averages.len()
        );
    }

    Ok(())
}
