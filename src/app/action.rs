//! Application actions and their creators.
//!
//! The serialized form is the wire contract for replay files:
//!
//! ```text
//! {"type":"ADD_TODO","todo":{"id":"1","name":"milk","complete":false}}
//! {"type":"TOGGLE_TODO","id":"1"}
//! {"type":"REMOVE_GOAL","id":"g1"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::goals::Goal;
use crate::store::Action;
use crate::todos::Todo;

/// Everything that can happen to the application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppAction {
    AddTodo { todo: Todo },
    RemoveTodo { id: String },
    ToggleTodo { id: String },
    AddGoal { goal: Goal },
    RemoveGoal { id: String },
    /// Any discriminant no reducer recognizes. Every slice ignores it.
    #[serde(other)]
    Unknown,
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::AddTodo { .. } => "ADD_TODO",
            AppAction::RemoveTodo { .. } => "REMOVE_TODO",
            AppAction::ToggleTodo { .. } => "TOGGLE_TODO",
            AppAction::AddGoal { .. } => "ADD_GOAL",
            AppAction::RemoveGoal { .. } => "REMOVE_GOAL",
            AppAction::Unknown => "UNKNOWN",
        }
    }
}

/// Errors decoding an action from its JSON form.
#[derive(Debug, Error)]
pub enum ActionDecodeError {
    #[error("invalid JSON: {source}")]
    Syntax {
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed '{kind}' payload: {source}")]
    Payload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AppAction {
    /// Decode one action.
    ///
    /// A missing or unrecognized `type` yields [`AppAction::Unknown`]. A
    /// recognized `type` with a broken payload is an error, so nothing
    /// half-formed reaches a reducer.
    pub fn from_json(text: &str) -> Result<Self, ActionDecodeError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| ActionDecodeError::Syntax { source })?;

        let kind = match value.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => return Ok(AppAction::Unknown),
        };

        serde_json::from_value(value).map_err(|source| ActionDecodeError::Payload { kind, source })
    }

    /// Encode as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn add_todo(todo: Todo) -> AppAction {
    AppAction::AddTodo { todo }
}

pub fn remove_todo(id: impl Into<String>) -> AppAction {
    AppAction::RemoveTodo { id: id.into() }
}

pub fn toggle_todo(id: impl Into<String>) -> AppAction {
    AppAction::ToggleTodo { id: id.into() }
}

pub fn add_goal(goal: Goal) -> AppAction {
    AppAction::AddGoal { goal }
}

pub fn remove_goal(id: impl Into<String>) -> AppAction {
    AppAction::RemoveGoal { id: id.into() }
}
