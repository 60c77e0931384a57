//! Meta Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `meta_tetris::{types, core, engine}` so
//! hosts and the integration tests depend on a single package while the
//! implementation lives under `crates/`.

pub use meta_tetris_core as core;
pub use meta_tetris_engine as engine;
pub use meta_tetris_types as types;
