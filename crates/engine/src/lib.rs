//! Meta-timeline engine - the move list as an editable, time-travelable log
//!
//! The player's moves form a timeline that can itself be edited: a past move
//! can be replaced, moves can be reordered, and the view can jump to any
//! earlier move. A meta-score tracks how each edit changes the final points
//! of the timeline.
//!
//! The design is event-sourced:
//!
//! - [`MetaAction`] values are appended to a log and never changed
//! - [`MetaState::apply`] is a pure reducer from one state to the next
//! - [`build_meta_history`] folds a log into one state per entry
//! - [`MetaTimeline`] owns the log, memoizes the fold, and draws restart seeds
//!   from an injected [`SeedSource`]
//!
//! Every game snapshot comes from the single-timeline simulator in the core
//! crate; the engine never keeps boards or points of its own.
//!
//! # Example
//!
//! ```
//! use meta_tetris_engine::{FixedSeed, MetaTimeline};
//! use meta_tetris_engine::core::{RulesConfig, Tetromino};
//! use meta_tetris_engine::types::{PieceKind, Rotation};
//!
//! let mut timeline = MetaTimeline::with_seed_source(RulesConfig::default(), 7, FixedSeed(8)).unwrap();
//!
//! timeline.drop_piece(Tetromino::new(PieceKind::I, Rotation::North, 0, 18)).unwrap();
//! timeline.drop_piece(Tetromino::new(PieceKind::I, Rotation::North, 4, 18)).unwrap();
//! timeline.drop_piece(Tetromino::new(PieceKind::O, Rotation::North, 7, 18)).unwrap();
//!
//! // The third drop completed the bottom row.
//! assert_eq!(timeline.current().meta_score, 100);
//! assert_eq!(timeline.current_game().unwrap().lines, 1);
//!
//! // Out-of-range edits are rejected, not clamped.
//! assert!(timeline.time_travel(10).is_err());
//! assert_eq!(timeline.log().len(), 3);
//! ```

pub mod action;
pub mod error;
pub mod history;
pub mod seed;
pub mod state;
pub mod view;

pub use meta_tetris_core as core;
pub use meta_tetris_types as types;

pub use action::MetaAction;
pub use error::MetaError;
pub use history::{build_meta_history, MetaTimeline};
pub use seed::{FixedSeed, LcgSeeds, SeedSource, SystemClockSeed};
pub use state::{score_diff, MetaState};
pub use view::{
    boards_after_each_move, last_meta_score_change, meta_score_series, move_strip,
    points_series, previous_timeline_series, take_last, StripEntry, StripMarker,
};
