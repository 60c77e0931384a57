use crate::core::{ConfigError, SimError};

/// A meta action that cannot apply to the current state, or rules the
/// engine cannot run with.
///
/// Every variant is an invalid argument: a host should treat an action
/// error as a rejected gesture and keep the session running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MetaError {
    #[error("reorder index {index} is outside a {len}-move timeline")]
    ReorderOutOfRange { index: usize, len: usize },

    #[error("time travel target {index} is past the frontier at {len}")]
    TimeTravelOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Simulation(#[from] SimError),

    #[error("invalid rules: {0}")]
    Config(#[from] ConfigError),
}

impl MetaError {
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            MetaError::ReorderOutOfRange { .. }
            | MetaError::TimeTravelOutOfRange { .. }
            | MetaError::Simulation(SimError::CursorOutOfRange { .. })
            | MetaError::Config(_) => true,
        }
    }
}
