//! Reducer for the goal slice.

use crate::app::AppAction;
use crate::store::Reducer;

use super::state::GoalList;

pub struct GoalsReducer;

impl Reducer for GoalsReducer {
    type State = GoalList;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::AddGoal { goal } => {
                let mut goals = state;
                goals.push(goal.clone());
                goals
            }

            AppAction::RemoveGoal { id } => {
                state.into_iter().filter(|goal| &goal.id != id).collect()
            }

            AppAction::AddTodo { .. }
            | AppAction::RemoveTodo { .. }
            | AppAction::ToggleTodo { .. }
            | AppAction::Unknown => state,
        }
    }
}
