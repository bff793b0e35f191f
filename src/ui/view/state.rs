use crate::store::State;

/// Which list has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Todos,
    Goals,
}

impl Pane {
    pub fn other(self) -> Self {
        match self {
            Pane::Todos => Pane::Goals,
            Pane::Goals => Pane::Todos,
        }
    }
}

/// Screen-local state: focus, selections and the input line.
///
/// Lives beside the application store, never inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub focus: Pane,
    pub input: String,
    pub todo_selected: usize,
    pub goal_selected: usize,
}

impl State for ViewState {}

impl ViewState {
    /// Selection index of the focused pane.
    pub fn selected(&self) -> usize {
        match self.focus {
            Pane::Todos => self.todo_selected,
            Pane::Goals => self.goal_selected,
        }
    }
}
