use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{GameStatus, PieceKind};

/// Upcoming pieces shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QueueState {
    /// Upcoming kinds in order; never shorter than the configured look-ahead.
    pub upcoming: Vec<PieceKind>,
    /// Reserved for a bag randomizer. Always empty today, but carried through
    /// serialization unchanged.
    #[serde(default)]
    pub bucket: Vec<PieceKind>,
}

impl QueueState {
    pub fn next(&self) -> Option<PieceKind> {
        self.upcoming.first().copied()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }
}

/// Derived state of one timeline viewed at a cursor. Recomputed on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    /// Piece waiting at the spawn row. `None` only when an earlier placement
    /// of the prefix was blocked.
    pub current: Option<Tetromino>,
    /// Reserved for a hold feature; always `None`.
    pub held: Option<PieceKind>,
    pub queue: QueueState,
    pub lines: u32,
    pub points: u32,
    pub status: GameStatus,
    /// Number of placements the board reflects.
    pub cursor: usize,
}

impl Game {
    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}
