//! Players and cell marks.

use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Green, written `O`. Moves first on an empty board.
    #[display("Green")]
    Green,
    /// Red, written `X`.
    #[display("Red")]
    Red,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Green => Player::Red,
            Player::Red => Player::Green,
        }
    }

    /// Board code character for this player's mark.
    pub fn code(self) -> char {
        match self {
            Player::Green => 'O',
            Player::Red => 'X',
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Mark {
    /// Maps a code character to a mark.
    ///
    /// Only `O` and `X` are recognised; every other character,
    /// including `-`, decodes to [`Mark::Empty`].
    pub fn from_code(code: char) -> Self {
        match code {
            'O' => Mark::Occupied(Player::Green),
            'X' => Mark::Occupied(Player::Red),
            _ => Mark::Empty,
        }
    }

    /// Code character for this mark.
    pub fn code(self) -> char {
        match self {
            Mark::Empty => '-',
            Mark::Occupied(player) => player.code(),
        }
    }

    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// True for an unclaimed cell.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Occupied(player)
    }
}
