//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tourney_restore::{
    cli::{Commands, TourneyRestore},
    commands::{restore::handle_restore, standings::handle_standings, verify::handle_verify},
};

/// Run the CLI. Any error propagates here, gets printed with its full
/// chain, and terminates the process with a non-zero exit code.
fn main() -> anyhow::Result<()> {
    let app = TourneyRestore::parse();

    match app.command {
        Commands::Restore { db, no_verify } => handle_restore(db.database, no_verify)?,
        Commands::Verify { db, json } => handle_verify(db.database, json)?,
        Commands::Standings { db, json, limit } => handle_standings(db.database, json, limit)?,
    }

    Ok(())
}
