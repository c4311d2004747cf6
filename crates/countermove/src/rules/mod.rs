//! Game-ending rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so that the move heuristics can share them.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, completed_line};
