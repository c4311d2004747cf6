//! Draw detection logic.

use crate::board::Board;
use crate::mark::Mark;
use tracing::instrument;

use super::win::completed_line;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board), fields(board = %board))]
pub fn is_full(board: &Board) -> bool {
    board.marks().iter().all(|m| *m != Mark::Empty)
}

/// A full board with no completed line.
#[instrument(skip(board), fields(board = %board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && completed_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::empty()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&Board::decode("XOXOXOXO-")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = Board::decode("XOXXOOOXX");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::decode("XXXOOXOXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
