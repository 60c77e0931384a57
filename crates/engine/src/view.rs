//! Read models for the rendering layer: the move-history strip and chart
//! series. Everything here is derived from meta states on demand.

use serde::{Deserialize, Serialize};

use crate::core::{simulate_history, Board, RulesConfig, SimError, Tetromino};
use crate::state::MetaState;

/// How a strip entry relates to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StripMarker {
    /// The move under the cursor.
    Current,
    /// A move that cannot be a time-travel target right now.
    Disallowed,
    Normal,
}

/// One recorded move as shown in the history strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripEntry {
    pub index: usize,
    /// Board before the move.
    pub board: Board,
    /// The move where it lands on `board`.
    pub piece: Tetromino,
    pub marker: StripMarker,
}

/// One entry per recorded placement, in order.
pub fn move_strip(state: &MetaState, rules: &RulesConfig) -> Result<Vec<StripEntry>, SimError> {
    let games = simulate_history(&state.placements, state.len(), state.seed, rules)?;
    Ok(state
        .placements
        .iter()
        .zip(games)
        .enumerate()
        .map(|(index, (placement, game))| {
            let marker = if index == state.cursor {
                StripMarker::Current
            } else if state.disallowed.contains(&index) {
                StripMarker::Disallowed
            } else {
                StripMarker::Normal
            };
            StripEntry {
                index,
                piece: game.board.hard_drop(*placement),
                board: game.board,
                marker,
            }
        })
        .collect())
}

/// Board after every prefix `0..=len` of the placement list.
pub fn boards_after_each_move(state: &MetaState, rules: &RulesConfig) -> Result<Vec<Board>, SimError> {
    let games = simulate_history(&state.placements, state.len(), state.seed, rules)?;
    Ok(games.into_iter().map(|g| g.board).collect())
}

/// Keep the last `window` values; left-pad with `None` when there are fewer.
pub fn take_last<T: Clone>(values: &[T], window: usize) -> Vec<Option<T>> {
    let skip = values.len().saturating_sub(window);
    let pad = window.saturating_sub(values.len());
    std::iter::repeat_with(|| None)
        .take(pad)
        .chain(values[skip..].iter().cloned().map(Some))
        .collect()
}

/// Meta-score of each meta-history entry.
pub fn meta_score_series(history: &[MetaState]) -> Vec<i64> {
    history.iter().map(|s| s.meta_score).collect()
}

/// Points after each prefix `0..=len` of the state's full placement list.
pub fn points_series(state: &MetaState, rules: &RulesConfig) -> Result<Vec<u32>, SimError> {
    let games = simulate_history(&state.placements, state.len(), state.seed, rules)?;
    Ok(games.into_iter().map(|g| g.points).collect())
}

/// Points series of an earlier timeline, right-padded with `None` up to
/// `len` so it lines up with the current one.
pub fn previous_timeline_series(
    previous: &MetaState,
    len: usize,
    rules: &RulesConfig,
) -> Result<Vec<Option<u32>>, SimError> {
    let mut series: Vec<Option<u32>> = points_series(previous, rules)?
        .into_iter()
        .map(Some)
        .collect();
    if series.len() < len {
        series.resize(len, None);
    }
    Ok(series)
}

/// Latest meta-score minus the one before it; 0 with fewer than two states.
pub fn last_meta_score_change(history: &[MetaState]) -> i64 {
    match history {
        [.., before, last] => last.meta_score - before.meta_score,
        _ => 0,
    }
}
