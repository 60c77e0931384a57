//! Meta state and the pure reducer that advances it.
//!
//! | Field | DROP_PIECE | REORDER_MOVES | TIME_TRAVEL_TO(i) | RESTART |
//! |---|---|---|---|---|
//! | placements | append at frontier, else overwrite at cursor | splice old → new | unchanged | empty |
//! | cursor | +1 | new index | i (if allowed) | 0 |
//! | disallowed | {old cursor} | {} | {} (if allowed) | {} |
//! | meta-score | += diff | += 3 × diff | unchanged | 0 |
//! | seed | unchanged | unchanged | unchanged | from the action |
//!
//! `diff` is the change in final points of the whole placement list,
//! re-derived by simulation on every edit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::action::MetaAction;
use crate::core::{final_points, simulate, Game, RulesConfig, SimError, Tetromino};
use crate::error::MetaError;
use crate::types::{DROP_SCORE_MULTIPLIER, REORDER_SCORE_MULTIPLIER};

/// One complete, independent snapshot of the meta game after a log prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaState {
    /// Placement decisions, each stored on the spawn row.
    pub placements: Vec<Tetromino>,
    /// Index of the move being viewed; `placements.len()` is the frontier.
    pub cursor: usize,
    /// Fixes the piece stream for this timeline instance.
    pub seed: u32,
    /// Indices that may not be time-travel targets for one step.
    pub disallowed: BTreeSet<usize>,
    pub meta_score: i64,
}

impl MetaState {
    /// The canonical empty state for `seed`.
    pub fn empty(seed: u32) -> Self {
        Self {
            placements: Vec::new(),
            cursor: 0,
            seed,
            disallowed: BTreeSet::new(),
            meta_score: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn is_at_frontier(&self) -> bool {
        self.cursor == self.placements.len()
    }

    /// Whether `TIME_TRAVEL_TO(index)` would move the cursor. The frontier is
    /// always reachable.
    pub fn can_time_travel_to(&self, index: usize) -> bool {
        index == self.placements.len()
            || (index < self.placements.len() && !self.disallowed.contains(&index))
    }

    /// Game snapshot of this timeline at its cursor.
    pub fn game(&self, rules: &RulesConfig) -> Result<Game, SimError> {
        simulate(&self.placements, self.cursor, self.seed, rules)
    }

    /// The state after `action`. `self` is left untouched.
    pub fn apply(&self, action: &MetaAction, rules: &RulesConfig) -> Result<MetaState, MetaError> {
        match *action {
            MetaAction::DropPiece { piece } => self.drop_piece(piece, rules),
            MetaAction::ReorderMoves {
                old_index,
                new_index,
            } => self.reorder(old_index, new_index, rules),
            MetaAction::TimeTravelTo { index } => self.time_travel(index),
            MetaAction::Restart { seed } => Ok(MetaState::empty(seed)),
        }
    }

    fn drop_piece(&self, piece: Tetromino, rules: &RulesConfig) -> Result<MetaState, MetaError> {
        let len = self.placements.len();
        if self.cursor > len {
            return Err(SimError::CursorOutOfRange {
                cursor: self.cursor,
                len,
            }
            .into());
        }

        let stored = piece.at_row(rules.spawn_y);
        let mut placements = self.placements.clone();
        if self.cursor == len {
            placements.push(stored);
        } else {
            placements[self.cursor] = stored;
        }

        let diff = score_diff(&self.placements, &placements, rules);
        Ok(MetaState {
            placements,
            cursor: self.cursor + 1,
            seed: self.seed,
            disallowed: BTreeSet::from([self.cursor]),
            meta_score: self.meta_score + DROP_SCORE_MULTIPLIER * diff,
        })
    }

    fn reorder(&self, old_index: usize, new_index: usize, rules: &RulesConfig) -> Result<MetaState, MetaError> {
        let len = self.placements.len();
        for index in [old_index, new_index] {
            if index >= len {
                return Err(MetaError::ReorderOutOfRange { index, len });
            }
        }

        let mut placements = self.placements.clone();
        let moved = placements.remove(old_index);
        placements.insert(new_index, moved);

        let diff = score_diff(&self.placements, &placements, rules);
        Ok(MetaState {
            placements,
            cursor: new_index,
            seed: self.seed,
            disallowed: BTreeSet::new(),
            meta_score: self.meta_score + REORDER_SCORE_MULTIPLIER * diff,
        })
    }

    fn time_travel(&self, index: usize) -> Result<MetaState, MetaError> {
        let len = self.placements.len();
        if index > len {
            return Err(MetaError::TimeTravelOutOfRange { index, len });
        }
        if !self.can_time_travel_to(index) {
            return Ok(self.clone());
        }
        Ok(MetaState {
            cursor: index,
            disallowed: BTreeSet::new(),
            ..self.clone()
        })
    }
}

/// Point swing between two placement lists, each simulated to its end.
pub fn score_diff(old: &[Tetromino], new: &[Tetromino], rules: &RulesConfig) -> i64 {
    final_points(new, rules) as i64 - final_points(old, rules) as i64
}
