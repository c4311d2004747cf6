//! Move selection heuristics.
//!
//! Every heuristic ranks the eight lines by [`streak_score`] and picks the
//! first empty cell on the best qualifying line. [`next_move`] chains them
//! in priority order.

mod heuristics;
mod selector;
mod streak;

pub use heuristics::{attacking_move, defensive_move, winning_move};
pub use selector::{Decision, MoveSelector, Reply, Tactic, next_move};
pub use streak::{ranked_lines, streak_score};
