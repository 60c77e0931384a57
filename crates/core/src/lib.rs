//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the underlying block-stacking game and the
//! simulator that replays a list of placements into a game snapshot. It has
//! **zero dependencies** on UI, networking, clocks or I/O, making it:
//!
//! - **Deterministic**: the same placements and seed always replay to the same snapshot
//! - **Pure**: every operation is a function of its arguments; boards are copy-on-write
//! - **Portable**: runs headless in any host
//!
//! # Module Structure
//!
//! - [`board`]: grid with collision testing, hard drop, placement and line clearing
//! - [`pieces`]: tetromino shapes for all rotation states, positioned pieces
//! - [`rng`]: index-addressable piece stream (hash of index and seed)
//! - [`timeline`]: replay of a placement list into [`Game`] snapshots
//! - [`config`]: runtime rule parameters
//!
//! # Game Rules
//!
//! - **Placement**: a placement is hard-dropped from where it was recorded and
//!   burned into the board; full rows are removed
//! - **Scoring**: flat `points_per_line` for each cleared line, no combo tiers
//! - **Loss**: the piece waiting at the spawn row already collides
//!
//! # Example
//!
//! ```
//! use meta_tetris_core::{simulate, RulesConfig, Tetromino};
//! use meta_tetris_core::types::{GameStatus, PieceKind, Rotation};
//!
//! let rules = RulesConfig::default();
//! let placements = [
//!     Tetromino::new(PieceKind::I, Rotation::North, 0, 0),
//!     Tetromino::new(PieceKind::I, Rotation::North, 4, 0),
//! ];
//!
//! let game = simulate(&placements, placements.len(), 42, &rules).unwrap();
//! assert_eq!(game.status, GameStatus::Playing);
//! assert_eq!(game.board.filled_count(), 8);
//! assert_eq!(game.queue.len(), rules.lookahead);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod timeline;

pub use meta_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::RulesConfig;
pub use error::{ConfigError, SimError};
pub use pieces::{get_shape, Tetromino};
pub use rng::{piece_at, SimpleRng};
pub use snapshot::{Game, QueueState};
pub use timeline::{final_points, simulate, simulate_history};
