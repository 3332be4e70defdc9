use super::intent::Intent;
use super::state::UiState;

/// Pure state transition function.
///
/// `reduce` consumes the old state and returns the next one. It performs
/// no I/O and reads nothing but its arguments.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Applies `intents` in order and returns only the final state.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
