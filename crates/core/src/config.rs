//! Rule configuration shared by the board engine and the simulator.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pieces::Tetromino;
use crate::types::{
    PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, NEXT_QUEUE_LEN, POINTS_PER_LINE, SPAWN_X,
    SPAWN_Y,
};

/// Narrowest board that still fits an I piece spawned at the default column.
pub const MIN_BOARD_WIDTH: u8 = 7;

/// Shortest board that still fits a vertical I piece.
pub const MIN_BOARD_HEIGHT: u8 = 4;

/// Largest dimension addressable with `i8` coordinates.
pub const MAX_BOARD_DIM: u8 = i8::MAX as u8;

/// Runtime rule parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub board_width: u8,
    pub board_height: u8,
    pub spawn_x: i8,
    pub spawn_y: i8,
    pub points_per_line: u32,
    /// Minimum look-ahead queue length
    pub lookahead: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            points_per_line: POINTS_PER_LINE,
            lookahead: NEXT_QUEUE_LEN,
        }
    }
}

impl RulesConfig {
    /// Create from environment variables, falling back to defaults for
    /// anything missing, unparsable or out of range.
    ///
    /// - `META_TETRIS_BOARD_WIDTH`
    /// - `META_TETRIS_BOARD_HEIGHT`
    /// - `META_TETRIS_POINTS_PER_LINE`
    /// - `META_TETRIS_LOOKAHEAD`
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let board_width = env::var("META_TETRIS_BOARD_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse::<u8>().ok())
            .filter(|w| (MIN_BOARD_WIDTH..=MAX_BOARD_DIM).contains(w))
            .unwrap_or(defaults.board_width);

        let board_height = env::var("META_TETRIS_BOARD_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse::<u8>().ok())
            .filter(|h| (MIN_BOARD_HEIGHT..=MAX_BOARD_DIM).contains(h))
            .unwrap_or(defaults.board_height);

        let points_per_line = env::var("META_TETRIS_POINTS_PER_LINE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.points_per_line);

        let lookahead = env::var("META_TETRIS_LOOKAHEAD")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.lookahead);

        Self {
            board_width,
            board_height,
            points_per_line,
            lookahead,
            ..defaults
        }
    }

    /// Check that a piece can spawn on a board of these dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_WIDTH..=MAX_BOARD_DIM).contains(&self.board_width) {
            return Err(ConfigError::BoardWidth(self.board_width));
        }
        if !(MIN_BOARD_HEIGHT..=MAX_BOARD_DIM).contains(&self.board_height) {
            return Err(ConfigError::BoardHeight(self.board_height));
        }
        if self.lookahead == 0 {
            return Err(ConfigError::EmptyLookahead);
        }
        // Every spawn-rotation shape spans at most 4 columns and 2 rows.
        if self.spawn_x < 0
            || self.spawn_y < 0
            || self.spawn_x as i16 + 4 > self.board_width as i16
            || self.spawn_y as i16 + 2 > self.board_height as i16
        {
            return Err(ConfigError::SpawnOutOfBounds {
                x: self.spawn_x,
                y: self.spawn_y,
            });
        }
        Ok(())
    }

    /// A freshly generated piece at the spawn position in rotation 0.
    pub fn spawn(&self, kind: PieceKind) -> Tetromino {
        Tetromino::new(kind, Rotation::North, self.spawn_x, self.spawn_y)
    }
}
