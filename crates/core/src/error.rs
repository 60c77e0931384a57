//! Error types for rule configuration and simulation input.

/// Invalid input to the single-timeline simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The cursor points past the recorded placements. Never clamped.
    #[error("cursor {cursor} is past the end of a {len}-move timeline")]
    CursorOutOfRange { cursor: usize, len: usize },
}

/// Rule parameters that cannot host a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board width {0} is outside the supported range")]
    BoardWidth(u8),

    #[error("board height {0} is outside the supported range")]
    BoardHeight(u8),

    #[error("look-ahead queue must hold at least one piece")]
    EmptyLookahead,

    #[error("spawn position ({x}, {y}) does not fit on the board")]
    SpawnOutOfBounds { x: i8, y: i8 },
}
