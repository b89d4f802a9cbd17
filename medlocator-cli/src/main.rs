//! MedLocator CLI - command-line interface and terminal UI.
//!
//! This binary provides a command-line interface to the medlocator library:
//! quick one-shot queries (`list`, `search`, `distance`) and the interactive
//! locator dashboard (`run`).

mod commands;
mod error;
mod tui_app;
mod ui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "medlocator")]
#[command(version = medlocator::VERSION)]
#[command(about = "Locate hospitals and estimate straight-line distances", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all known hospitals.
    List,
    /// Search hospitals by name (case-insensitive substring).
    Search {
        /// Search text to match against hospital names.
        query: String,
    },
    /// Straight-line distance from a coordinate to a hospital.
    Distance {
        /// Hospital name (or unique fragment of it).
        #[arg(long)]
        hospital: String,
        /// Your latitude in decimal degrees.
        #[arg(long)]
        lat: f64,
        /// Your longitude in decimal degrees.
        #[arg(long)]
        lon: f64,
    },
    /// Interactive locator dashboard.
    Run {
        /// Simulated device fix as LAT,LON[,ACCURACY_M]; may repeat to
        /// script a sequence. Without any, geolocation is unsupported and
        /// the locate control stays disabled.
        #[arg(long = "fix", value_name = "LAT,LON[,ACCURACY]")]
        fixes: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::List => commands::list::run(),
        Command::Search { query } => commands::search::run(&query),
        Command::Distance { hospital, lat, lon } => commands::distance::run(&hospital, lat, lon),
        Command::Run { fixes } => commands::run::run(commands::run::RunArgs { fixes }),
    };

    if let Err(error) = result {
        error.exit();
    }
}
