//! Cell coordinates on the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells along one side of the board.
pub const SIDE: i32 = 3;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A cell coordinate: `column` runs left to right, `row` top to bottom.
///
/// Coordinates are signed so that out-of-range positions can be
/// represented and rejected; see [`Position::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column (0-2 when valid).
    pub column: i32,
    /// Row (0-2 when valid).
    pub row: i32,
}

impl Position {
    /// The middle cell.
    pub const CENTER: Position = Position::new(1, 1);

    /// Creates a position. Out-of-range coordinates are allowed.
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// True when both coordinates lie on the board.
    pub fn is_valid(self) -> bool {
        (0..SIDE).contains(&self.column) && (0..SIDE).contains(&self.row)
    }

    /// Converts to a row-major board index (0-8).
    ///
    /// Returns `None` for positions off the board.
    #[instrument]
    pub fn to_index(self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        Some((self.row * SIDE + self.column) as usize)
    }

    /// Creates a position from a row-major board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELLS {
            return None;
        }
        let index = index as i32;
        Some(Self::new(index % SIDE, index / SIDE))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
