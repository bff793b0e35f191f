use serde::{Deserialize, Serialize};

use crate::ids::generate_id;
use crate::store::State;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub complete: bool,
}

impl Todo {
    /// New incomplete todo with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            complete: false,
        }
    }
}

/// The todo slice: records in insertion order.
pub type TodoList = Vec<Todo>;

impl State for TodoList {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_incomplete() {
        let todo = Todo::new("milk");
        assert_eq!(todo.name, "milk");
        assert!(!todo.complete);
        assert!(!todo.id.is_empty());
    }

    #[test]
    fn new_todos_get_distinct_ids() {
        assert_ne!(Todo::new("a").id, Todo::new("a").id);
    }
}
