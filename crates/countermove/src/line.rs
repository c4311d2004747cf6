//! The eight three-cell lines that decide the game.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Orientation of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Horizontal.
    #[display("row")]
    Row,
    /// Vertical.
    #[display("column")]
    Column,
    /// Corner to corner.
    #[display("diagonal")]
    Diagonal,
}

/// Three positions in a fixed traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    ordinal: u8,
    positions: [Position; 3],
}

impl Line {
    const fn new(kind: LineKind, ordinal: u8, positions: [(i32, i32); 3]) -> Self {
        let [a, b, c] = positions;
        Self {
            kind,
            ordinal,
            positions: [
                Position::new(a.0, a.1),
                Position::new(b.0, b.1),
                Position::new(c.0, c.1),
            ],
        }
    }

    /// Row, column or diagonal.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Index of the line among those of the same kind.
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// The line's cells, in traversal order.
    pub fn positions(&self) -> &[Position; 3] {
        &self.positions
    }

    /// True when `position` lies on this line.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.ordinal())
    }
}

/// All lines in canonical order: rows, then columns, then the
/// top-left/bottom-right and top-right/bottom-left diagonals.
///
/// Searches return the first match in this order.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(LineKind::Row, 0, [(0, 0), (1, 0), (2, 0)]),
    Line::new(LineKind::Row, 1, [(0, 1), (1, 1), (2, 1)]),
    Line::new(LineKind::Row, 2, [(0, 2), (1, 2), (2, 2)]),
    // Columns
    Line::new(LineKind::Column, 0, [(0, 0), (0, 1), (0, 2)]),
    Line::new(LineKind::Column, 1, [(1, 0), (1, 1), (1, 2)]),
    Line::new(LineKind::Column, 2, [(2, 0), (2, 1), (2, 2)]),
    // Diagonals
    Line::new(LineKind::Diagonal, 0, [(0, 0), (1, 1), (2, 2)]),
    Line::new(LineKind::Diagonal, 1, [(2, 0), (1, 1), (0, 2)]),
];
