//! Command-line interface for countermove.

use clap::{Parser, Subcommand};

/// Countermove - next-move oracle for tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "countermove")]
#[command(about = "Answers tic-tac-toe boards with the next move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Seed for opening-move randomness (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute the next move for a single board and exit
    Play {
        /// Board code: 9 characters from '-', 'O', 'X', row-major
        board: String,

        /// Seed for opening-move randomness
        #[arg(long)]
        seed: Option<u64>,
    },
}
