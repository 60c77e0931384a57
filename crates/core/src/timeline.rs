//! Timeline module - replays a placement list into game snapshots
//!
//! Every snapshot is rebuilt from an empty board: each placement of the
//! prefix `placements[..cursor]` is hard-dropped and placed in order, lines
//! accumulate, and points are `lines * points_per_line`.
//!
//! The active piece at the cursor is the recorded placement when the cursor
//! is inside the list (viewing history), otherwise the stream piece for that
//! index. The queue continues the same way: recorded kinds first, stream
//! kinds after the end of the list, until the look-ahead is filled.
//!
//! A placement that already collides where it starts blocks the board: the
//! rest of the prefix is skipped and the snapshot is `Lost` with no active
//! piece.

use tracing::trace;

use crate::board::Board;
use crate::config::RulesConfig;
use crate::error::SimError;
use crate::pieces::Tetromino;
use crate::rng::piece_at;
use crate::snapshot::{Game, QueueState};
use crate::types::{GameStatus, PieceKind};

/// Snapshot of `placements` viewed at `cursor`.
///
/// `cursor` may range over `0..=placements.len()`; anything past the end is
/// rejected rather than clamped.
pub fn simulate(
    placements: &[Tetromino],
    cursor: usize,
    seed: u32,
    rules: &RulesConfig,
) -> Result<Game, SimError> {
    check_cursor(placements, cursor)?;

    let mut replay = Replay::new(rules);
    for piece in &placements[..cursor] {
        replay.apply(piece);
    }
    Ok(replay.snapshot(placements, cursor, seed, rules))
}

/// Snapshots after every prefix `0..=cursor`, in order.
///
/// The last element equals `simulate(placements, cursor, seed, rules)`.
pub fn simulate_history(
    placements: &[Tetromino],
    cursor: usize,
    seed: u32,
    rules: &RulesConfig,
) -> Result<Vec<Game>, SimError> {
    check_cursor(placements, cursor)?;

    let mut replay = Replay::new(rules);
    let mut history = Vec::with_capacity(cursor + 1);
    history.push(replay.snapshot(placements, 0, seed, rules));
    for (i, piece) in placements[..cursor].iter().enumerate() {
        replay.apply(piece);
        history.push(replay.snapshot(placements, i + 1, seed, rules));
    }
    Ok(history)
}

/// Points of the whole list, i.e. `simulate(placements, len, ..).points`.
/// Board outcomes do not depend on the seed, only the queue does.
pub fn final_points(placements: &[Tetromino], rules: &RulesConfig) -> u32 {
    let mut replay = Replay::new(rules);
    for piece in placements {
        replay.apply(piece);
    }
    replay.points(rules)
}

/// Look-ahead queue for a timeline viewed at `cursor`.
pub fn queue_at(
    placements: &[Tetromino],
    cursor: usize,
    seed: u32,
    rules: &RulesConfig,
) -> Result<QueueState, SimError> {
    check_cursor(placements, cursor)?;
    Ok(build_queue(placements, cursor, seed, rules))
}

/// Kind at absolute timeline index `index`: recorded if inside the list,
/// otherwise from the stream.
pub fn kind_at(placements: &[Tetromino], index: usize, seed: u32) -> PieceKind {
    placements
        .get(index)
        .map(|p| p.kind)
        .unwrap_or_else(|| piece_at(index, seed))
}

fn check_cursor(placements: &[Tetromino], cursor: usize) -> Result<(), SimError> {
    if cursor > placements.len() {
        return Err(SimError::CursorOutOfRange {
            cursor,
            len: placements.len(),
        });
    }
    Ok(())
}

fn build_queue(placements: &[Tetromino], cursor: usize, seed: u32, rules: &RulesConfig) -> QueueState {
    let recorded_ahead = placements.len().saturating_sub(cursor + 1);
    let len = recorded_ahead.max(rules.lookahead);
    let upcoming: Vec<PieceKind> = (cursor + 1..cursor + 1 + len)
        .map(|i| kind_at(placements, i, seed))
        .collect();
    trace!(cursor, recorded_ahead, len, "assembled look-ahead queue");
    QueueState {
        upcoming,
        bucket: Vec::new(),
    }
}

/// Running fold state of a replay.
struct Replay {
    board: Board,
    lines: u32,
    blocked: bool,
}

impl Replay {
    fn new(rules: &RulesConfig) -> Self {
        Self {
            board: Board::empty(rules),
            lines: 0,
            blocked: false,
        }
    }

    fn apply(&mut self, piece: &Tetromino) {
        if self.blocked {
            return;
        }
        let landed = self.board.hard_drop(*piece);
        match self.board.place(&landed) {
            Some((board, lines)) => {
                self.board = board;
                self.lines += lines;
            }
            None => {
                trace!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "placement blocked");
                self.blocked = true;
            }
        }
    }

    fn points(&self, rules: &RulesConfig) -> u32 {
        self.lines.saturating_mul(rules.points_per_line)
    }

    fn snapshot(&self, placements: &[Tetromino], cursor: usize, seed: u32, rules: &RulesConfig) -> Game {
        let current = if self.blocked {
            None
        } else {
            Some(match placements.get(cursor) {
                Some(recorded) => recorded.at_row(rules.spawn_y),
                None => rules.spawn(piece_at(cursor, seed)),
            })
        };

        let status = match current {
            Some(piece) if !self.board.is_terminal(&piece) => GameStatus::Playing,
            _ => GameStatus::Lost,
        };

        Game {
            board: self.board.clone(),
            current,
            held: None,
            queue: build_queue(placements, cursor, seed, rules),
            lines: self.lines,
            points: self.points(rules),
            status,
            cursor,
        }
    }
}
