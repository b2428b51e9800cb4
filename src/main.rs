//! Entry point: parse CLI and run the seed-and-report workflow.

use clap::Parser;
use rink_roster::{cli::RinkRoster, commands::run::handle_run};

/// Run the CLI.
#[tokio::main]
async fn main() {
    env_logger::init();
    let app = RinkRoster::parse();

    if let Err(err) = handle_run(app.verbose).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
