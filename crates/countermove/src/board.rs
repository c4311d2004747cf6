//! Immutable 3x3 board snapshot and its code-string form.

use super::line::Line;
use super::mark::{Mark, Player};
use super::position::{CELLS, Position};
use super::rules;
use super::sequence::PositionSequence;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Error parsing a board code strictly.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardCodeError {
    /// The code does not have exactly nine characters.
    #[display("Board code must be 9 characters, got {}", length)]
    InvalidLength {
        /// Character count of the rejected code.
        length: usize,
    },
}

/// Overall state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and no line is complete.
    InProgress,
    /// A line is complete.
    Won {
        /// Owner of the completed line.
        winner: Player,
        /// First completed line in canonical order.
        line: Line,
    },
    /// Board is full with no complete line.
    Draw,
}

/// One board state: a mark per cell in row-major order.
///
/// Boards are plain values. Placing a mark returns a new board and
/// leaves the original untouched. Counts, completion and status are
/// computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    marks: [Mark; CELLS],
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            marks: [Mark::Empty; CELLS],
        }
    }

    /// Creates a board from marks in row-major order.
    pub fn from_marks(marks: [Mark; CELLS]) -> Self {
        Self { marks }
    }

    /// Decodes a board code leniently.
    ///
    /// `O` is green, `X` is red, anything else is empty. Length is not
    /// checked: characters past the ninth are ignored and missing ones
    /// stay empty. Use [`str::parse`] to reject codes of the wrong length.
    #[instrument]
    pub fn decode(code: &str) -> Self {
        let mut marks = [Mark::Empty; CELLS];
        for (slot, c) in marks.iter_mut().zip(code.chars()) {
            *slot = Mark::from_code(c);
        }
        Self { marks }
    }

    /// Encodes the board as a nine-character code (`-`, `O`, `X`).
    pub fn encode(&self) -> String {
        self.marks.iter().map(|m| m.code()).collect()
    }

    /// Mark at `position`, or `None` if the position is off the board.
    pub fn at(&self, position: Position) -> Option<Mark> {
        position.to_index().map(|index| self.marks[index])
    }

    /// Returns a copy of this board with `mark` at `position`.
    ///
    /// An occupied cell is overwritten. Returns `None` if the position is
    /// off the board.
    #[instrument(skip(self), fields(board = %self))]
    pub fn with_placement(&self, position: Position, mark: Mark) -> Option<Self> {
        let index = position.to_index()?;
        let mut marks = self.marks;
        marks[index] = mark;
        Some(Self { marks })
    }

    /// All marks in row-major order.
    pub fn marks(&self) -> &[Mark; CELLS] {
        &self.marks
    }

    /// Number of cells claimed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.marks
            .iter()
            .filter(|m| **m == Mark::Occupied(player))
            .count()
    }

    /// Number of green marks.
    pub fn green_count(&self) -> usize {
        self.count(Player::Green)
    }

    /// Number of red marks.
    pub fn red_count(&self) -> usize {
        self.count(Player::Red)
    }

    /// True when no cell is claimed.
    pub fn is_empty(&self) -> bool {
        self.marks.iter().all(|m| m.is_empty())
    }

    /// True when every cell is claimed.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        PositionSequence
            .into_iter()
            .filter(|p| self.at(*p) == Some(Mark::Empty))
    }

    /// First line, in canonical order, whose three cells share one
    /// player's mark. A complete line means the game is over.
    pub fn line_completion(&self) -> Option<Line> {
        rules::completed_line(self)
    }

    /// Owner of the first complete line.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Whether the game is running, won, or drawn.
    #[instrument(skip(self), fields(board = %self))]
    pub fn status(&self) -> GameStatus {
        if let (Some(line), Some(winner)) = (self.line_completion(), self.winner()) {
            return GameStatus::Won { winner, line };
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// The player due to move: whoever has fewer marks, green on a tie.
    pub fn player_to_move(&self) -> Player {
        if self.green_count() > self.red_count() {
            Player::Red
        } else {
            Player::Green
        }
    }

    /// Formats the board as three lines of three code characters.
    pub fn render_grid(&self) -> String {
        self.marks
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|m| m.code().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Board {
    type Err = BoardCodeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let length = code.chars().count();
        if length != CELLS {
            return Err(BoardCodeError::InvalidLength { length });
        }
        Ok(Self::decode(code))
    }
}

impl TryFrom<String> for Board {
    type Error = BoardCodeError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.encode(), "---------");
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_decode_maps_codes() {
        let board = Board::decode("O-X------");
        assert_eq!(board.at(Position::new(0, 0)), Some(Mark::Occupied(Player::Green)));
        assert_eq!(board.at(Position::new(1, 0)), Some(Mark::Empty));
        assert_eq!(board.at(Position::new(2, 0)), Some(Mark::Occupied(Player::Red)));
    }

    #[test]
    fn test_decode_is_lenient() {
        assert_eq!(Board::decode("o?x.O    ").encode(), "----O----");
        assert_eq!(Board::decode("XX").encode(), "XX-------");
        assert_eq!(Board::decode("OOOOOOOOOXXX").encode(), "OOOOOOOOO");
    }

    #[test]
    fn test_at_rejects_invalid_position() {
        let board = Board::decode("XXXXXXXXX");
        assert_eq!(board.at(Position::new(3, 0)), None);
        assert_eq!(board.at(Position::new(0, -1)), None);
    }

    #[test]
    fn test_with_placement_leaves_original() {
        let board = Board::empty();
        let placed = board
            .with_placement(Position::CENTER, Mark::Occupied(Player::Green))
            .unwrap();
        assert_eq!(board.encode(), "---------");
        assert_eq!(placed.encode(), "----O----");
    }

    #[test]
    fn test_with_placement_overwrites() {
        let board = Board::decode("----O----");
        let placed = board
            .with_placement(Position::CENTER, Mark::Occupied(Player::Red))
            .unwrap();
        assert_eq!(placed.encode(), "----X----");
        let cleared = placed.with_placement(Position::CENTER, Mark::Empty).unwrap();
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_with_placement_off_board() {
        let board = Board::empty();
        assert_eq!(board.with_placement(Position::new(1, 3), Mark::Empty), None);
    }

    #[test]
    fn test_counts() {
        let board = Board::decode("OXO-X-O--");
        assert_eq!(board.green_count(), 3);
        assert_eq!(board.red_count(), 2);
        assert_eq!(board.empty_positions().count(), 4);
    }

    #[test]
    fn test_player_to_move() {
        assert_eq!(Board::empty().player_to_move(), Player::Green);
        assert_eq!(Board::decode("----O----").player_to_move(), Player::Red);
        assert_eq!(Board::decode("X--------").player_to_move(), Player::Green);
        assert_eq!(Board::decode("O---X----").player_to_move(), Player::Green);
    }

    #[test]
    fn test_strict_parse_checks_length() {
        assert_eq!(
            "--------".parse::<Board>(),
            Err(BoardCodeError::InvalidLength { length: 8 })
        );
        assert_eq!(
            "----------".parse::<Board>(),
            Err(BoardCodeError::InvalidLength { length: 10 })
        );
        assert_eq!("O--O-----".parse::<Board>().unwrap().green_count(), 2);
    }

    #[test]
    fn test_status() {
        assert_eq!(Board::empty().status(), GameStatus::InProgress);
        assert_eq!(Board::decode("XOXXOOOXX").status(), GameStatus::Draw);
        match Board::decode("XXXOO----").status() {
            GameStatus::Won { winner, line } => {
                assert_eq!(winner, Player::Red);
                assert_eq!(line.to_string(), "row 0");
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_from_marks_row_major() {
        let mut marks = [Mark::Empty; CELLS];
        marks[2] = Mark::Occupied(Player::Red);
        marks[6] = Mark::Occupied(Player::Green);
        let board = Board::from_marks(marks);
        assert_eq!(board.encode(), "--X---O--");
        assert_eq!(board.marks(), &marks);
        assert_eq!(Board::from_marks([Mark::Empty; CELLS]), Board::empty());
    }

    #[test]
    fn test_winner() {
        assert_eq!(Board::decode("XXXOO----").winner(), Some(Player::Red));
        assert_eq!(Board::decode("O-XO-XO--").winner(), Some(Player::Green));
        assert_eq!(Board::decode("XOXXOOOXX").winner(), None);
        assert_eq!(Board::empty().winner(), None);
    }

    #[test]
    fn test_render_grid() {
        assert_eq!(Board::decode("XO--X---O").render_grid(), "X O -\n- X -\n- - O");
    }
}
