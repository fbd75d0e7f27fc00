//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Runs `R` against the state held in `slot` and stores the result.
///
/// Returns true when the state changed.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) -> bool {
    let before = slot.clone();
    *slot = R::reduce(std::mem::take(slot), intent);
    *slot != before
}
