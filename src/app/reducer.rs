//! Root reducer combining the todo and goal slices.

use crate::goals::GoalsReducer;
use crate::store::Reducer;
use crate::todos::TodosReducer;

use super::action::AppAction;
use super::state::AppState;

/// Offers every action to every slice reducer and rebuilds the root from
/// their results.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        let AppState { todos, goals } = state;
        AppState {
            todos: TodosReducer::reduce(todos, action),
            goals: GoalsReducer::reduce(goals, action),
        }
    }
}
