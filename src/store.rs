//! Dispatch shell binding a strategy to a live snapshot
//!
//! The runner never calls a strategy directly; it constructs a fresh store
//! per benchmark run and dispatches actions through it, the way the original
//! workload drove its reducers through a state container. The store holds
//! the current snapshot and swaps in the strategy's result on dispatch.

use crate::action::Action;
use crate::state::AppState;
use crate::strategy::UpdateStrategy;

/// A fresh state container bound to one update strategy
pub struct Store<'a> {
    state: AppState,
    strategy: &'a dyn UpdateStrategy,
}

impl<'a> Store<'a> {
    /// Bind `strategy` to an initial snapshot
    pub fn new(state: AppState, strategy: &'a dyn UpdateStrategy) -> Self {
        Self { state, strategy }
    }

    /// Apply one action, replacing the held snapshot with the result
    pub fn dispatch(&mut self, action: Action) {
        self.state = self.strategy.apply(&self.state, action);
    }

    /// The current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
