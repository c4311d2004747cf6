//! Row-major enumeration of every board position.

use super::position::{CELLS, Position};
use std::iter::FusedIterator;

/// The nine board positions in row-major order, column varying fastest.
///
/// Each call to [`IntoIterator::into_iter`] (or [`PositionSequence::iter`])
/// yields a fresh enumerator starting at `(0, 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionSequence;

impl PositionSequence {
    /// Starts a new enumeration.
    pub fn iter(self) -> Positions {
        Positions { next: 0 }
    }
}

impl IntoIterator for PositionSequence {
    type Item = Position;
    type IntoIter = Positions;

    fn into_iter(self) -> Positions {
        self.iter()
    }
}

/// Iterator over board positions, see [`PositionSequence`].
#[derive(Debug, Clone)]
pub struct Positions {
    next: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let position = Position::from_index(self.next)?;
        self.next += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CELLS.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}
