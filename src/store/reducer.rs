//! Reducer trait for the store.

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, &Action) -> State
///
/// The action is borrowed so a root reducer can offer the same action
/// to every slice reducer it combines.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions the reducer does not recognize must return `state` unchanged.
    fn reduce(state: Self::State, action: &Self::Action) -> Self::State;
}
