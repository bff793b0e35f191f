//! Batch mode: feed recorded actions through a store.
//!
//! Input is one JSON action per line. Blank lines and lines starting with
//! `#` are skipped.

use std::io::BufRead;

use thiserror::Error;

use crate::app::{ActionDecodeError, AppAction, AppStore};
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read actions: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: ActionDecodeError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Decode every action in `reader` without dispatching anything.
///
/// Fails on the first malformed line, so a bad file never half-applies.
pub fn read_actions<R: BufRead>(reader: R) -> Result<Vec<AppAction>, ReplayError> {
    let mut actions = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action = AppAction::from_json(trimmed).map_err(|source| ReplayError::Decode {
            line: index + 1,
            source,
        })?;
        actions.push(action);
    }
    Ok(actions)
}

/// Dispatch `actions` in order. Returns how many were applied.
pub fn replay(store: &AppStore, actions: Vec<AppAction>) -> Result<usize, ReplayError> {
    let count = actions.len();
    for action in actions {
        store.dispatch(action)?;
    }
    tracing::debug!(count, "replay finished");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOG: &str = r#"
# shopping
{"type":"ADD_TODO","todo":{"id":"1","name":"milk","complete":false}}
{"type":"TOGGLE_TODO","id":"1"}

{"type":"ADD_GOAL","goal":{"id":"g1","name":"run 5k"}}
{"type":"SET_FILTER","filter":"done"}
"#;

    #[test]
    fn skips_blank_and_comment_lines() {
        let actions = read_actions(Cursor::new(LOG)).unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[3], AppAction::Unknown);
    }

    #[test]
    fn reports_line_of_bad_action() {
        let input = "{\"type\":\"TOGGLE_TODO\",\"id\":\"1\"}\n{\"type\":\"REMOVE_GOAL\"}\n";
        let err = read_actions(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, ReplayError::Decode { line: 2, .. }));
    }

    #[test]
    fn replay_applies_in_order() {
        let store = AppStore::new();
        let applied = replay(&store, read_actions(Cursor::new(LOG)).unwrap()).unwrap();

        assert_eq!(applied, 4);
        let state = store.get_state();
        assert_eq!(state.todos.len(), 1);
        assert!(state.todos[0].complete);
        assert_eq!(state.goals[0].name, "run 5k");
    }
}
