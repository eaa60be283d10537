//! Reducer trait for MVI architecture.

use super::state::UiState;

/// Reducer transforms state based on changes produced while handling intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Change) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The partial change type this reducer folds in.
    type Change: Send + 'static;

    /// Apply a change and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, change: Self::Change) -> Self::State;
}
