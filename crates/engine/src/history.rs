//! Meta log ownership and the fold that derives meta history from it.
//!
//! The log is the only source of truth. [`build_meta_history`] folds it from
//! the canonical empty state and yields one [`MetaState`] per entry.
//! [`MetaTimeline`] owns a log and memoizes that fold by prefix: since the
//! log only grows, the state after entry `i` never changes once computed.
//!
//! Actions must be applied one at a time in log order. The timeline does no
//! locking; a host with several input sources serializes dispatch itself.

use tracing::debug;

use crate::action::MetaAction;
use crate::core::{Game, RulesConfig, Tetromino};
use crate::error::MetaError;
use crate::seed::{SeedSource, SystemClockSeed};
use crate::state::MetaState;

/// Fold `log` from `MetaState::empty(initial_seed)`, keeping every
/// intermediate state. The current state is the last element.
///
/// Fails up front if `rules` do not pass [`RulesConfig::validate`].
pub fn build_meta_history(
    log: &[MetaAction],
    initial_seed: u32,
    rules: &RulesConfig,
) -> Result<Vec<MetaState>, MetaError> {
    rules.validate()?;
    let mut history: Vec<MetaState> = Vec::with_capacity(log.len());
    let mut state = MetaState::empty(initial_seed);
    for action in log {
        state = state.apply(action, rules)?;
        history.push(state.clone());
    }
    Ok(history)
}

/// Owner of an append-only meta log.
#[derive(Debug, Clone)]
pub struct MetaTimeline<S = SystemClockSeed> {
    rules: RulesConfig,
    initial: MetaState,
    log: Vec<MetaAction>,
    /// `history[i]` is the fold of `log[..=i]`.
    history: Vec<MetaState>,
    seeds: S,
}

impl MetaTimeline<SystemClockSeed> {
    /// Timeline seeded from the clock, both initially and on restart.
    pub fn new(rules: RulesConfig) -> Result<Self, MetaError> {
        let mut seeds = SystemClockSeed;
        let initial_seed = seeds.next_seed();
        Self::with_seed_source(rules, initial_seed, seeds)
    }
}

impl<S: SeedSource> MetaTimeline<S> {
    /// Empty timeline. Rejects rules that fail [`RulesConfig::validate`].
    pub fn with_seed_source(
        rules: RulesConfig,
        initial_seed: u32,
        seeds: S,
    ) -> Result<Self, MetaError> {
        rules.validate()?;
        Ok(Self {
            rules,
            initial: MetaState::empty(initial_seed),
            log: Vec::new(),
            history: Vec::new(),
            seeds,
        })
    }

    /// Rebuild a timeline from a stored log. Fails on invalid rules or on the
    /// first action that does not apply.
    pub fn from_log(
        rules: RulesConfig,
        initial_seed: u32,
        log: Vec<MetaAction>,
        seeds: S,
    ) -> Result<Self, MetaError> {
        let history = build_meta_history(&log, initial_seed, &rules)?;
        Ok(Self {
            rules,
            initial: MetaState::empty(initial_seed),
            log,
            history,
            seeds,
        })
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn initial_seed(&self) -> u32 {
        self.initial.seed
    }

    pub fn log(&self) -> &[MetaAction] {
        &self.log
    }

    /// One state per logged action, in log order.
    pub fn history(&self) -> &[MetaState] {
        &self.history
    }

    /// The latest state, or the canonical empty state before any action.
    pub fn current(&self) -> &MetaState {
        self.history.last().unwrap_or(&self.initial)
    }

    /// Snapshot of the current timeline at its cursor.
    pub fn current_game(&self) -> Result<Game, MetaError> {
        Ok(self.current().game(&self.rules)?)
    }

    /// Validate `action` against the current state and append it.
    /// A rejected action leaves the log untouched.
    pub fn dispatch(&mut self, action: MetaAction) -> Result<&MetaState, MetaError> {
        let next = match self.current().apply(&action, &self.rules) {
            Ok(next) => next,
            Err(e) => {
                debug!(action = action.as_str(), error = %e, "rejected meta action");
                return Err(e);
            }
        };

        debug!(
            action = action.as_str(),
            log_len = self.log.len() + 1,
            cursor = next.cursor,
            meta_score = next.meta_score,
            "appended meta action"
        );
        self.log.push(action);
        self.history.push(next);
        Ok(self.current())
    }

    pub fn drop_piece(&mut self, piece: Tetromino) -> Result<&MetaState, MetaError> {
        self.dispatch(MetaAction::DropPiece { piece })
    }

    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<&MetaState, MetaError> {
        self.dispatch(MetaAction::ReorderMoves {
            old_index,
            new_index,
        })
    }

    pub fn time_travel(&mut self, index: usize) -> Result<&MetaState, MetaError> {
        self.dispatch(MetaAction::TimeTravelTo { index })
    }

    /// Restart with a seed drawn from the injected source.
    pub fn restart(&mut self) -> Result<&MetaState, MetaError> {
        let seed = self.seeds.next_seed();
        self.dispatch(MetaAction::Restart { seed })
    }

    /// Recompute the history from the log, ignoring the memo.
    pub fn rebuild(&self) -> Result<Vec<MetaState>, MetaError> {
        build_meta_history(&self.log, self.initial.seed, &self.rules)
    }
}
