//! Move pipeline: win, then defend, then attack.

use super::heuristics::{attacking_move, defensive_move, winning_move};
use crate::board::Board;
use crate::mark::{Mark, Player};
use crate::position::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Heuristic tier that produced a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Tactic {
    /// Completes one of the mover's lines.
    #[display("win")]
    Win,
    /// Blocks one of the opponent's lines.
    #[display("defend")]
    Defend,
    /// Develops the mover's own position.
    #[display("attack")]
    Attack,
}

/// A chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Side making the move.
    pub player: Player,
    /// Cell to claim.
    pub position: Position,
    /// Heuristic that picked the cell.
    pub tactic: Tactic,
}

/// A decision together with the board it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// The move played.
    pub decision: Decision,
    /// Board after the move.
    pub board: Board,
}

/// Picks the next move for `board` using `rng` for opening play.
///
/// The mover is [`Board::player_to_move`]. Returns `None` when no move is
/// available: the board already has a complete line, or it is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn next_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Decision> {
    if let Some(line) = board.line_completion() {
        debug!(%line, "Board already decided");
        return None;
    }

    let player = board.player_to_move();
    let (position, tactic) = winning_move(board, player)
        .map(|p| (p, Tactic::Win))
        .or_else(|| defensive_move(board, player).map(|p| (p, Tactic::Defend)))
        .or_else(|| attacking_move(board, player, rng).map(|p| (p, Tactic::Attack)))?;

    let decision = Decision {
        player,
        position,
        tactic,
    };
    debug!(?decision, "Move selected");
    Some(decision)
}

/// Move selection with an owned random source.
///
/// The generator is only consulted for an opening move when the center is
/// taken. Inject a seeded generator for reproducible play.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Selector seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Selector with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Wraps a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the next move; see [`next_move`].
    pub fn next_move(&mut self, board: &Board) -> Option<Decision> {
        next_move(board, &mut self.rng)
    }

    /// Picks the next move and applies it.
    ///
    /// Returns `None` when no move is available.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn respond(&mut self, board: &Board) -> Option<Reply> {
        let decision = self.next_move(board)?;
        let next = board.with_placement(decision.position, Mark::Occupied(decision.player))?;
        info!(
            from = %board,
            to = %next,
            player = %decision.player,
            position = %decision.position,
            tactic = %decision.tactic,
            "Move played"
        );
        Some(Reply {
            decision,
            board: next,
        })
    }
}
