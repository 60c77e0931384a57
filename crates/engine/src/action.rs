use serde::{Deserialize, Serialize};

use crate::core::Tetromino;

/// A high-level edit to the timeline. The only value ever appended to the
/// meta log; immutable once logged.
///
/// Serialized with an `action` tag (`DROP_PIECE`, `REORDER_MOVES`,
/// `TIME_TRAVEL_TO`, `RESTART`). An unknown tag fails to decode, so a log
/// can never hold a value outside these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "action",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum MetaAction {
    /// Commit a piece at its resolved column and rotation.
    DropPiece { piece: Tetromino },
    /// Move the placement at `old_index` to `new_index`, shifting the ones in
    /// between by one.
    ReorderMoves { old_index: usize, new_index: usize },
    /// Move the cursor to `index` (`index == len` is the frontier).
    TimeTravelTo { index: usize },
    /// Start over with a fresh seed. The seed is drawn when the restart is
    /// dispatched so replaying the log reproduces it.
    Restart { seed: u32 },
}

impl MetaAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAction::DropPiece { .. } => "DROP_PIECE",
            MetaAction::ReorderMoves { .. } => "REORDER_MOVES",
            MetaAction::TimeTravelTo { .. } => "TIME_TRAVEL_TO",
            MetaAction::Restart { .. } => "RESTART",
        }
    }
}
