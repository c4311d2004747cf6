//! HTTP routes.

use crate::config::ServerConfig;
use crate::error::ServerError;
use axum::extract::{Query, RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use countermove::{Board, MoveSelector, Player, Position, Reply, Tactic};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Usage text served at `/`.
pub const HELP_TEXT: &str = "Available methods:\n\
/config?<board>  next board as a 9-character code\n\
/move?board=<board>  next move as JSON\n\
\n\
Boards are 9 characters from '-', 'O', 'X' in row-major order.\n";

/// Shared state for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    selector: Arc<Mutex<MoveSelector<StdRng>>>,
}

impl AppState {
    /// State seeded as configured.
    #[instrument(skip(config), fields(seed = ?config.seed()))]
    pub fn new(config: &ServerConfig) -> Self {
        let selector = match config.seed() {
            Some(seed) => MoveSelector::seeded(*seed),
            None => MoveSelector::from_entropy(),
        };
        Self {
            selector: Arc::new(Mutex::new(selector)),
        }
    }

    /// State with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            selector: Arc::new(Mutex::new(MoveSelector::seeded(seed))),
        }
    }

    /// Plays the next move on `board`.
    fn respond(&self, board: &Board) -> Result<Reply, ServerError> {
        // A panic while holding the lock cannot leave the generator invalid.
        let mut selector = self
            .selector
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        selector
            .respond(board)
            .ok_or(ServerError::NoMoveAvailable(*board))
    }
}

/// Query for `/move`.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveQuery {
    /// Board code.
    pub board: String,
}

/// JSON body returned by `/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Board after the move.
    pub board: Board,
    /// Side that moved.
    pub player: Player,
    /// Cell claimed.
    pub position: Position,
    /// Heuristic that chose the cell.
    pub tactic: Tactic,
}

impl From<Reply> for MoveResponse {
    fn from(reply: Reply) -> Self {
        Self {
            board: reply.board,
            player: reply.decision.player,
            position: reply.decision.position,
            tactic: reply.decision.tactic,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(help))
        .route("/config", get(next_config))
        .route("/move", get(next_move))
        .with_state(state)
}

/// Parses a board code, rejecting anything but nine characters.
fn parse_board(code: Option<&str>) -> Result<Board, ServerError> {
    let code = code.ok_or_else(|| ServerError::InvalidRequest("missing board code".to_string()))?;
    code.parse()
        .map_err(|e: countermove::BoardCodeError| ServerError::InvalidRequest(e.to_string()))
}

async fn help() -> &'static str {
    HELP_TEXT
}

#[instrument(skip(state))]
async fn next_config(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<String, ServerError> {
    let board = parse_board(query.as_deref())?;
    debug!(%board, "Board decoded");
    let reply = state.respond(&board)?;
    info!(from = %board, to = %reply.board, "Config answered");
    Ok(reply.board.encode())
}

#[instrument(skip(state))]
async fn next_move(
    State(state): State<AppState>,
    Query(query): Query<MoveQuery>,
) -> Result<Json<MoveResponse>, ServerError> {
    let board = parse_board(Some(&query.board))?;
    let reply = state.respond(&board)?;
    Ok(Json(reply.into()))
}
