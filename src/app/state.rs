use serde::{Deserialize, Serialize};

use crate::goals::GoalList;
use crate::store::State;
use crate::todos::TodoList;

/// Root state tree: two independent slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub todos: TodoList,
    pub goals: GoalList,
}

impl State for AppState {}

impl AppState {
    pub fn completed_todos(&self) -> usize {
        self.todos.iter().filter(|todo| todo.complete).count()
    }
}
