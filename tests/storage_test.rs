//! Workflow tests against a real PostgreSQL database
//!
//! These need a disposable database; point `DATABASE_URL` at one and run
//! them single-threaded, since they all rebuild the same two tables:
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/rink_test cargo test -- --ignored --test-threads=1
//! ```

use rink_roster::storage::seed::{sample_players, sample_teams, LEAFS, SABRES};
use rink_roster::storage::{RosterDatabase, Team};
use rink_roster::{RosterError, TeamId};

async fn connect() -> RosterDatabase {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    RosterDatabase::connect_url(&url)
        .await
        .expect("database connection failed")
}

#[tokio::test]
#[ignore = "requires database"]
async fn reset_and_seed_populates_both_tables() -> anyhow::Result<()> {
    let mut db = connect().await;
    db.reset_and_seed(&sample_teams(), &sample_players()).await?;

    assert_eq!(db.team_count().await?, 2);
    assert_eq!(db.player_count().await?, 14);

    let teams = db.list_teams().await?;
    let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Buffalo Sabres", "Toronto Maple Leafs"]);

    db.close().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires database"]
async fn youngest_players_are_sorted_and_limited() -> anyhow::Result<()> {
    let mut db = connect().await;
    db.reset_and_seed(&sample_teams(), &sample_players()).await?;

    let youngest = db.youngest_players(5).await?;
    assert_eq!(youngest.len(), 5);
    for pair in youngest.windows(2) {
        assert!(pair[0].age <= pair[1].age);
    }

    // Rerunning produces the same rows in the same order.
    assert_eq!(db.youngest_players(5).await?, youngest);

    db.close().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires database"]
async fn oldest_and_average_match_the_seed_set() -> anyhow::Result<()> {
    let mut db = connect().await;
    db.reset_and_seed(&sample_teams(), &sample_players()).await?;

    let oldest = db.oldest_player(SABRES).await?.expect("sabres have players");
    assert_eq!(oldest.name, "David Legwand");
    assert_eq!(oldest.age, 35);
    for player in sample_players().iter().filter(|p| p.team_id == SABRES) {
        assert!(oldest.age >= player.age);
    }

    let sabres = db.average_age(SABRES).await?.expect("sabres have players");
    let leafs = db.average_age(LEAFS).await?.expect("leafs have players");
    assert!((sabres - 180.0 / 7.0).abs() < 1e-9);
    assert!((leafs - 184.0 / 7.0).abs() < 1e-9);
    assert!(sabres < leafs);

    db.close().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires database"]
async fn playerless_team_reports_absence_not_error() -> anyhow::Result<()> {
    let mut db = connect().await;
    db.reset_and_seed(&sample_teams(), &sample_players()).await?;

    let tigers = Team {
        id: TeamId::new(3),
        name: "Hamilton Tigers".to_string(),
        division: "Defunct".to_string(),
        founding_year: 1919,
    };
    db.insert_teams(std::slice::from_ref(&tigers)).await?;

    assert_eq!(db.oldest_player(tigers.id).await?, None);
    assert_eq!(db.average_age(tigers.id).await?, None);

    db.close().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires database"]
async fn reset_twice_leaves_empty_tables() -> anyhow::Result<()> {
    let mut db = connect().await;
    db.reset_and_seed(&sample_teams(), &sample_players()).await?;

    db.reset_schema().await?;
    db.reset_schema().await?;

    assert_eq!(db.team_count().await?, 0);
    assert_eq!(db.player_count().await?, 0);

    db.close().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires database"]
async fn reseeding_without_reset_is_an_integrity_error() -> anyhow::Result<()> {
    let mut db = connect().await;
    db.reset_and_seed(&sample_teams(), &sample_players()).await?;

    let err = db
        .insert_teams(&sample_teams())
        .await
        .expect_err("duplicate team ids must violate the primary key");
    assert!(matches!(err, RosterError::Integrity(_)));

    db.close().await?;
    Ok(())
}
