//! Intents for the screen-local view state.

use crate::store::Action;

/// Intents that can be dispatched to the view reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    /// Move focus to the other list.
    SwitchPane,

    /// Append a character to the input line.
    InsertChar(char),

    /// Delete the last character of the input line.
    Backspace,

    ClearInput,

    MoveUp,

    /// Move the selection down within a list of `len` records.
    MoveDown { len: usize },

    /// Keep selections inside lists that may have shrunk.
    Clamp { todos: usize, goals: usize },
}

impl Action for ViewIntent {
    fn name(&self) -> &'static str {
        match self {
            ViewIntent::SwitchPane => "SWITCH_PANE",
            ViewIntent::InsertChar(_) => "INSERT_CHAR",
            ViewIntent::Backspace => "BACKSPACE",
            ViewIntent::ClearInput => "CLEAR_INPUT",
            ViewIntent::MoveUp => "MOVE_UP",
            ViewIntent::MoveDown { .. } => "MOVE_DOWN",
            ViewIntent::Clamp { .. } => "CLAMP",
        }
    }
}
