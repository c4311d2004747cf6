//! The three move heuristics: win, defend, attack.

use super::streak::{first_empty, ranked_lines};
use crate::board::Board;
use crate::mark::{Mark, Player};
use crate::position::{CELLS, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Streak score of a line one mark short of completion.
const THREAT: u8 = 2;

/// Empty cell that completes one of `player`'s lines, if any.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    threat_cell(board, player)
}

/// Empty cell that blocks one of the opponent's lines, if any.
#[instrument(skip(board), fields(board = %board))]
pub fn defensive_move(board: &Board, player: Player) -> Option<Position> {
    threat_cell(board, player.opponent())
}

/// First empty cell on the best-scoring line of `owner` whose score is
/// exactly [`THREAT`].
fn threat_cell(board: &Board, owner: Player) -> Option<Position> {
    let ranked = ranked_lines(board, owner);
    let threats = ranked
        .iter()
        .filter(|(score, _)| *score == THREAT)
        .map(|(_, line)| line);
    let cell = first_empty(board, threats);
    debug!(?owner, ?cell, "Threat scan");
    cell
}

/// Cell that develops `player`'s position.
///
/// A player who has not moved yet takes the center, or failing that an
/// empty cell found by scanning from a start index drawn from `rng`.
/// Otherwise the player extends its best-scoring line.
///
/// Returns `None` on a finished or full board.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn attacking_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<Position> {
    if board.count(player) == 0 {
        if board.at(Position::CENTER) == Some(Mark::Empty) {
            debug!("Opening in the center");
            return Some(Position::CENTER);
        }
        if board.line_completion().is_some() || board.is_full() {
            debug!("No opening cell on a finished board");
            return None;
        }
        let start = rng.gen_range(0..CELLS);
        let cell = scan_from(board, start);
        debug!(start, ?cell, "Opening scan");
        return cell;
    }

    let ranked = ranked_lines(board, player);
    let cell = first_empty(board, ranked.iter().map(|(_, line)| line));
    debug!(?cell, best_score = ranked.first().map(|(s, _)| *s), "Extending best line");
    cell
}

/// First empty cell at or after `start`, wrapping around the board.
///
/// Each index is visited once, so a full board yields `None`.
fn scan_from(board: &Board, start: usize) -> Option<Position> {
    (0..CELLS)
        .filter_map(|offset| Position::from_index((start + offset) % CELLS))
        .find(|p| board.at(*p) == Some(Mark::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_winning_move_completes_row() {
        let board = Board::decode("XX-OO----");
        assert_eq!(winning_move(&board, Player::Red), Some(Position::new(2, 0)));
        assert_eq!(winning_move(&board, Player::Green), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_winning_move_none_without_threat() {
        assert_eq!(winning_move(&Board::empty(), Player::Green), None);
        assert_eq!(winning_move(&Board::decode("X-O------"), Player::Red), None);
    }

    #[test]
    fn test_winning_move_skips_blocked_line() {
        // Column 0 scores 2 for X but is already blocked.
        assert_eq!(winning_move(&Board::decode("X--X--O--"), Player::Red), None);
    }

    #[test]
    fn test_winning_move_first_line_wins_tie() {
        // Row 0 and column 2 both need one more X; rows come first.
        let board = Board::decode("XX---X--X");
        assert_eq!(winning_move(&board, Player::Red), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_defensive_move_blocks_column() {
        let board = Board::decode("O--O-----");
        assert_eq!(defensive_move(&board, Player::Red), Some(Position::new(0, 2)));
        assert_eq!(winning_move(&board, Player::Red), None);
    }

    #[test]
    fn test_defensive_move_blocks_diagonal() {
        let board = Board::decode("--X-X----");
        assert_eq!(defensive_move(&board, Player::Green), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_defensive_move_ignores_blocked_line() {
        // The main diagonal scores 2 for X but its last cell is taken.
        let board = Board::decode("X---X---O");
        assert_eq!(defensive_move(&board, Player::Green), None);
    }

    #[test]
    fn test_attacking_move_opens_center() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(attacking_move(&Board::empty(), Player::Green, &mut rng), Some(Position::CENTER));
    }

    #[test]
    fn test_attacking_move_scans_from_random_start() {
        let board = Board::decode("----O----");
        let mut rng = StepRng::new(0, 0);
        assert_eq!(attacking_move(&board, Player::Red, &mut rng), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_attacking_move_seeded_is_reproducible() {
        let board = Board::decode("O---O----");
        let first = attacking_move(&board, Player::Red, &mut StdRng::seed_from_u64(42));
        let second = attacking_move(&board, Player::Red, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        let cell = first.unwrap();
        assert_eq!(board.at(cell), Some(Mark::Empty));
    }

    #[test]
    fn test_scan_wraps_around() {
        let board = Board::decode("-OOOOOOOO");
        assert_eq!(scan_from(&board, 5), Some(Position::new(0, 0)));
        assert_eq!(scan_from(&Board::decode("OOOOOOOOO"), 3), None);
    }

    #[test]
    fn test_attacking_move_extends_best_line() {
        // Red has the center; row 1 is the first line where it scores best.
        let board = Board::decode("O---X----");
        let mut rng = StepRng::new(0, 0);
        assert_eq!(attacking_move(&board, Player::Red, &mut rng), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_attacking_move_on_full_board() {
        let mut rng = StepRng::new(0, 0);
        let board = Board::decode("XOXXOOOXX");
        assert_eq!(attacking_move(&board, Player::Green, &mut rng), None);
        assert_eq!(attacking_move(&board, Player::Red, &mut rng), None);
    }

    #[test]
    fn test_opening_refuses_finished_board() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(attacking_move(&Board::decode("OOO-O-O--"), Player::Red, &mut rng), None);
    }
}
