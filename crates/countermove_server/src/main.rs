//! Countermove - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use countermove::{Board, GameStatus, MoveSelector};
use countermove_server::{AppState, ServerConfig, router};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,countermove=debug")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            seed,
        } => run_http_server(config, host, port, seed).await,
        Command::Play { board, seed } => play(&board, seed),
    }
}

/// Run the HTTP server
#[instrument]
async fn run_http_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
) -> Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?.with_overrides(host, port, seed);
    info!(?config, "Starting countermove HTTP server");

    let app = router(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app).await?;

    Ok(())
}

/// Answer one board on stdout
#[instrument]
fn play(code: &str, seed: Option<u64>) -> Result<()> {
    let board: Board = code.parse()?;
    let mut selector = match seed {
        Some(seed) => MoveSelector::seeded(seed),
        None => MoveSelector::from_entropy(),
    };

    match selector.respond(&board) {
        Some(reply) => {
            println!(
                "{} plays {} ({})",
                reply.decision.player, reply.decision.position, reply.decision.tactic
            );
            println!("{}\n", reply.board.render_grid());
            println!("{}", reply.board);
        }
        None => {
            let verdict = match board.status() {
                GameStatus::Won { winner, line } => format!("{} won on {}", winner, line),
                GameStatus::Draw => "draw".to_string(),
                GameStatus::InProgress => "in progress".to_string(),
            };
            println!("No move available: {}", verdict);
            println!("{}", board.render_grid());
        }
    }

    Ok(())
}
