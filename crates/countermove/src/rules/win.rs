//! Line completion and win detection.

use crate::board::Board;
use crate::line::{LINES, Line};
use crate::mark::{Mark, Player};
use tracing::instrument;

/// Returns the first line, in canonical order, whose three cells hold the
/// same player's mark.
#[instrument(skip(board), fields(board = %board))]
pub fn completed_line(board: &Board) -> Option<Line> {
    LINES.iter().copied().find(|line| {
        let [a, b, c] = line.positions().map(|p| board.at(p));
        matches!(a, Some(Mark::Occupied(_))) && a == b && b == c
    })
}

/// Returns the owner of the first completed line, if any.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let line = completed_line(board)?;
    board.at(line.positions()[0]).and_then(Mark::player)
}
