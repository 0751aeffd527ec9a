//! Bitola - residential wire gauge estimator.
//!
//! With no arguments this starts the interactive session (the entry form);
//! the subcommands give headless access to the same logic for scripting
//! and testing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use bitola::app;
use bitola::cli::{CheckArgs, ExitCode, ExportArgs, GaugesArgs, TypesArgs};
use bitola::config::Config;
use bitola::constants::{APP_BINARY_NAME, APP_NAME};
use bitola::ledger::RoomLedger;
use bitola::services::RoomsFile;

/// Residential wire gauge estimator (NBR 5410 minimums)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rooms file (TOML) to pre-populate the session ledger
    #[arg(value_name = "FILE")]
    rooms_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the recommended wire gauges for one room type
    Gauges(GaugesArgs),
    /// List the room-type catalog
    Types(TypesArgs),
    /// Validate a rooms file without exporting
    Check(CheckArgs),
    /// Export a rooms file to a spreadsheet, document, or JSON snapshot
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Command::Gauges(args) => args.execute(),
            Command::Types(args) => args.execute(),
            Command::Check(args) => args.execute(),
            Command::Export(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            process::exit(e.exit_code() as i32);
        }
        return;
    }

    if let Err(e) = run_interactive(cli.rooms_path) {
        eprintln!("Error: {e:#}");
        process::exit(ExitCode::IoError as i32);
    }
}

/// Starts the interactive session, optionally pre-populating the ledger
/// from a rooms file.
fn run_interactive(rooms_path: Option<PathBuf>) -> Result<()> {
    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!();

    let mut ledger = RoomLedger::new();

    if let Some(path) = rooms_path {
        if !path.exists() {
            eprintln!("Error: Rooms file not found: {}", path.display());
            eprintln!();
            eprintln!("Provide a TOML file with [[rooms]] entries, for example:");
            eprintln!("  {} my_rooms.toml", APP_BINARY_NAME);
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {} --help", APP_BINARY_NAME);
            process::exit(ExitCode::ValidationFailed as i32);
        }

        let file = RoomsFile::load(&path)?;
        let added = file.populate(&mut ledger)?;
        println!("Loaded {} room(s) from {}", added, path.display());
    }

    // A corrupted config should not block the session
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e}");
        Config::default()
    });

    app::run_session(&mut ledger, &config)
}
