//! Reducer for the todo slice.

use crate::app::AppAction;
use crate::store::Reducer;

use super::state::{Todo, TodoList};

/// Reducer for the todo list.
///
/// Goal actions and unknown actions pass the list through untouched.
pub struct TodosReducer;

impl Reducer for TodosReducer {
    type State = TodoList;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::AddTodo { todo } => {
                let mut todos = state;
                todos.push(todo.clone());
                todos
            }

            AppAction::RemoveTodo { id } => {
                state.into_iter().filter(|todo| &todo.id != id).collect()
            }

            AppAction::ToggleTodo { id } => state
                .into_iter()
                .map(|todo| {
                    if &todo.id == id {
                        Todo {
                            complete: !todo.complete,
                            ..todo
                        }
                    } else {
                        todo
                    }
                })
                .collect(),

            AppAction::AddGoal { .. } | AppAction::RemoveGoal { .. } | AppAction::Unknown => state,
        }
    }
}
