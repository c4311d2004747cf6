//! Streak scoring of a line for one player.

use crate::board::Board;
use crate::line::{LINES, Line};
use crate::mark::{Mark, Player};
use crate::position::Position;

/// Scores `line` for `player`.
///
/// Walks the line in traversal order keeping a running count. Before each
/// cell after the first, the count resets to zero if the previous cell holds
/// the opponent's mark. A cell holding `player`'s mark then adds one.
///
/// The result is not the number of matching cells: an opposing mark wipes
/// out everything counted before it.
pub fn streak_score(board: &Board, line: &Line, player: Player) -> u8 {
    let opposing = Some(Mark::Occupied(player.opponent()));
    let own = Some(Mark::Occupied(player));
    let mut count = 0;
    let mut previous: Option<Mark> = None;
    for &position in line.positions() {
        let current = board.at(position);
        if previous == opposing {
            count = 0;
        }
        if current == own {
            count += 1;
        }
        previous = current;
    }
    count
}

/// Every line paired with its score for `player`, best first.
///
/// The sort is stable, so lines with equal scores keep canonical order.
pub fn ranked_lines(board: &Board, player: Player) -> Vec<(u8, Line)> {
    let mut ranked: Vec<(u8, Line)> = LINES
        .iter()
        .map(|line| (streak_score(board, line, player), *line))
        .collect();
    ranked.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
    ranked
}

/// First empty cell across `lines`, scanning each line in order.
pub fn first_empty<'a>(
    board: &Board,
    lines: impl IntoIterator<Item = &'a Line>,
) -> Option<Position> {
    lines
        .into_iter()
        .flat_map(|line| line.positions().iter().copied())
        .find(|p| board.at(*p) == Some(Mark::Empty))
}
