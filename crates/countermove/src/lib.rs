//! Countermove - next-move oracle for tic-tac-toe.
//!
//! Given a board encoded as nine characters (`-`, `O`, `X`, row-major),
//! this crate decides whether the game is over and, if not, picks a cell
//! for the side to move using three heuristics in priority order:
//!
//! - **Win**: complete one of the mover's lines.
//! - **Defend**: block one of the opponent's lines.
//! - **Attack**: open in the center, or extend the mover's best line.
//!
//! Every operation is a pure function of the board it receives. The only
//! randomness, used for opening play when the center is taken, comes from
//! an injected [`rand::Rng`].
//!
//! # Example
//!
//! ```
//! use countermove::{Board, MoveSelector, Tactic};
//!
//! let board = Board::decode("O--O-----");
//! let reply = MoveSelector::seeded(1).respond(&board).unwrap();
//! assert_eq!(reply.decision.tactic, Tactic::Defend);
//! assert_eq!(reply.board.encode(), "O--O--X--");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod line;
mod mark;
mod position;
mod rules;
mod sequence;
mod strategy;

pub use board::{Board, BoardCodeError, GameStatus};
pub use line::{LINES, Line, LineKind};
pub use mark::{Mark, Player};
pub use position::{CELLS, Position, SIDE};
pub use rules::{check_winner, completed_line, is_draw, is_full};
pub use sequence::{PositionSequence, Positions};
pub use strategy::{
    Decision, MoveSelector, Reply, Tactic, attacking_move, defensive_move, next_move,
    ranked_lines, streak_score, winning_move,
};
