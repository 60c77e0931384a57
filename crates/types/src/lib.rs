//! Core types module - shared data structures and rule constants
//!
//! This module defines the fundamental types used by the simulator and the
//! meta-timeline engine. All types are plain data with no logic beyond
//! string/index conversions, making them usable in any context (simulation,
//! rendering, persistence by a host).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (overridable at runtime through the core
//! crate's `RulesConfig`):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 100 | Flat award per cleared line, no combo tiers |
//! | `NEXT_QUEUE_LEN` | 5 | Minimum look-ahead queue length |
//! | `CHART_WINDOW` | 20 | Number of values shown by a score chart |
//! | `REORDER_SCORE_MULTIPLIER` | 3 | Meta-score weight of a reorder edit |
//! | `DROP_SCORE_MULTIPLIER` | 1 | Meta-score weight of a drop |
//!
//! # Examples
//!
//! ```
//! use meta_tetris_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Catalog order is stable and index-addressable
//! assert_eq!(PieceKind::from_index(parsed.index()), Some(PieceKind::T));
//!
//! // Rotations are numbered 0-3
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(3), Some(Rotation::West));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the piece origin when a fresh piece spawns
pub const SPAWN_X: i8 = 3;

/// Row of the piece origin when a fresh piece spawns
pub const SPAWN_Y: i8 = 0;

/// Points awarded per cleared line
pub const POINTS_PER_LINE: u32 = 100;

/// Minimum number of upcoming pieces shown in the look-ahead queue
pub const NEXT_QUEUE_LEN: usize = 5;

/// Number of values a score chart displays
pub const CHART_WINDOW: usize = 20;

/// Meta-score weight applied to the point swing of a drop
pub const DROP_SCORE_MULTIPLIER: i64 = 1;

/// Meta-score weight applied to the point swing of a reorder
pub const REORDER_SCORE_MULTIPLIER: i64 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_constants() {
        assert_eq!(POINTS_PER_LINE, 100);
        assert_eq!(NEXT_QUEUE_LEN, 5);
        assert_eq!(CHART_WINDOW, 20);
        assert_eq!(DROP_SCORE_MULTIPLIER, 1);
        assert_eq!(REORDER_SCORE_MULTIPLIER, 3);
        assert_eq!((SPAWN_X, SPAWN_Y), (3, 0));
    }

    #[test]
    fn piece_kind_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn rotation_index_roundtrip() {
        for i in 0..4u8 {
            let r = Rotation::from_index(i).unwrap();
            assert_eq!(r.index(), i);
        }
        assert_eq!(Rotation::from_index(4), None);
    }

    #[test]
    fn status_strings() {
        assert_eq!(GameStatus::Playing.as_str(), "PLAYING");
        assert_eq!(GameStatus::Lost.as_str(), "LOST");
        assert!(GameStatus::Lost.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind in catalog order. The piece stream indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use meta_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states, numbered 0-3
///
/// - **North** (0): Spawn orientation
/// - **East** (1): Rotated 90° clockwise
/// - **South** (2): Rotated 180°
/// - **West** (3): Rotated 90° counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Numeric rotation state (0-3)
    pub fn index(self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for a numeric state; `None` outside 0-3
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use meta_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Outcome of a simulated timeline prefix
///
/// Reaching `Lost` is a valid result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Playing,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "PLAYING",
            GameStatus::Lost => "LOST",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of that kind (color only)
pub type Cell = Option<PieceKind>;
