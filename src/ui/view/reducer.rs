use crate::store::Reducer;

use super::intent::ViewIntent;
use super::state::{Pane, ViewState};

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Action = ViewIntent;

    fn reduce(state: Self::State, intent: &Self::Action) -> Self::State {
        match intent {
            ViewIntent::SwitchPane => ViewState {
                focus: state.focus.other(),
                ..state
            },

            ViewIntent::InsertChar(ch) => {
                let mut input = state.input;
                input.push(*ch);
                ViewState { input, ..state }
            }

            ViewIntent::Backspace => {
                let mut input = state.input;
                input.pop();
                ViewState { input, ..state }
            }

            ViewIntent::ClearInput => ViewState {
                input: String::new(),
                ..state
            },

            ViewIntent::MoveUp => {
                let selected = state.selected().saturating_sub(1);
                with_selected(state, selected)
            }

            ViewIntent::MoveDown { len } => {
                let current = state.selected();
                let selected = if current + 1 < *len { current + 1 } else { current };
                with_selected(state, selected)
            }

            ViewIntent::Clamp { todos, goals } => ViewState {
                todo_selected: state.todo_selected.min(todos.saturating_sub(1)),
                goal_selected: state.goal_selected.min(goals.saturating_sub(1)),
                ..state
            },
        }
    }
}

fn with_selected(state: ViewState, selected: usize) -> ViewState {
    match state.focus {
        Pane::Todos => ViewState {
            todo_selected: selected,
            ..state
        },
        Pane::Goals => ViewState {
            goal_selected: selected,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_pane_toggles_focus() {
        let state = ViewReducer::reduce(ViewState::default(), &ViewIntent::SwitchPane);
        assert_eq!(state.focus, Pane::Goals);
    }

    #[test]
    fn typing_and_backspace() {
        let state = ViewReducer::reduce(ViewState::default(), &ViewIntent::InsertChar('h'));
        let state = ViewReducer::reduce(state, &ViewIntent::InsertChar('i'));
        assert_eq!(state.input, "hi");
        let state = ViewReducer::reduce(state, &ViewIntent::Backspace);
        assert_eq!(state.input, "h");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let state = ViewReducer::reduce(ViewState::default(), &ViewIntent::Backspace);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn move_down_stops_at_last() {
        let state = ViewReducer::reduce(ViewState::default(), &ViewIntent::MoveDown { len: 2 });
        assert_eq!(state.todo_selected, 1);
        let state = ViewReducer::reduce(state, &ViewIntent::MoveDown { len: 2 });
        assert_eq!(state.todo_selected, 1);
    }

    #[test]
    fn move_up_stops_at_first() {
        let state = ViewReducer::reduce(ViewState::default(), &ViewIntent::MoveUp);
        assert_eq!(state.todo_selected, 0);
    }

    #[test]
    fn selection_is_per_pane() {
        let state = ViewState {
            focus: Pane::Goals,
            ..ViewState::default()
        };
        let state = ViewReducer::reduce(state, &ViewIntent::MoveDown { len: 3 });
        assert_eq!(state.goal_selected, 1);
        assert_eq!(state.todo_selected, 0);
    }

    #[test]
    fn clamp_pulls_selection_into_range() {
        let state = ViewState {
            todo_selected: 4,
            goal_selected: 2,
            ..ViewState::default()
        };
        let state = ViewReducer::reduce(state, &ViewIntent::Clamp { todos: 2, goals: 0 });
        assert_eq!(state.todo_selected, 1);
        assert_eq!(state.goal_selected, 0);
    }
}
