//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It never
/// performs I/O itself: anything the host has to do afterwards (ring the
/// bell, arm the next tick, exit) is returned as an effect.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Follow-up action requested from the host.
    type Effect;

    /// Process an intent and return the new state plus an optional effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
