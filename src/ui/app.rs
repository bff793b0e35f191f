use crate::app::{add_goal, add_todo, remove_goal, remove_todo, toggle_todo, AppAction, AppState, AppStore};
use crate::goals::Goal;
use crate::store::{Reducer, Subscription};
use crate::todos::Todo;
use crate::ui::view::{Pane, ViewIntent, ViewReducer, ViewState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Runs the view reducer on the current view state and marks the screen dirty.
macro_rules! dispatch_view {
    ($self:expr, $intent:expr) => {
        $self.view = ViewReducer::reduce(std::mem::take(&mut $self.view), &$intent);
        $self.mark_dirty();
    };
}

/// Terminal front end over an application store.
///
/// Reads state only through `get_state`, changes it only through
/// `dispatch`, and learns about changes through its subscription.
pub struct TodoApp {
    store: Arc<AppStore>,
    /// Focus, selection and input line (MVI pattern, outside the store).
    view: ViewState,
    show_ids: bool,
    should_quit: bool,
    /// Set by the store observer and by view changes; cleared on redraw.
    dirty: Arc<AtomicBool>,
    subscription: Subscription,
    last_error: Option<String>,
}

impl TodoApp {
    pub fn new(store: Arc<AppStore>, show_ids: bool) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&dirty);
        let subscription = store.subscribe(move |_| flag.store(true, Ordering::Release));
        Self {
            store,
            view: ViewState::default(),
            show_ids,
            should_quit: false,
            dirty,
            subscription,
            last_error: None,
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        self.store.get_state()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn show_ids(&self) -> bool {
        self.show_ids
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// True if anything changed since the last call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn input_is_empty(&self) -> bool {
        self.view.input.is_empty()
    }

    pub fn switch_pane(&mut self) {
        dispatch_view!(self, ViewIntent::SwitchPane);
    }

    pub fn insert_char(&mut self, ch: char) {
        dispatch_view!(self, ViewIntent::InsertChar(ch));
    }

    /// Paste text into the input line. Line breaks are dropped.
    pub fn paste(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            self.insert_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        dispatch_view!(self, ViewIntent::Backspace);
    }

    pub fn select_prev(&mut self) {
        dispatch_view!(self, ViewIntent::MoveUp);
    }

    pub fn select_next(&mut self) {
        let state = self.state();
        let len = match self.view.focus {
            Pane::Todos => state.todos.len(),
            Pane::Goals => state.goals.len(),
        };
        dispatch_view!(self, ViewIntent::MoveDown { len });
    }

    /// Add the input line as a record of the focused list.
    ///
    /// Blank input is ignored and left in place.
    pub fn submit_input(&mut self) {
        let name = self.view.input.trim();
        if name.is_empty() {
            return;
        }
        let action = match self.view.focus {
            Pane::Todos => add_todo(Todo::new(name)),
            Pane::Goals => add_goal(Goal::new(name)),
        };
        self.dispatch(action);
        dispatch_view!(self, ViewIntent::ClearInput);
    }

    /// Toggle the selected todo. Does nothing in the goal pane.
    pub fn toggle_selected(&mut self) {
        if self.view.focus != Pane::Todos {
            return;
        }
        let id = self
            .state()
            .todos
            .get(self.view.todo_selected)
            .map(|todo| todo.id.clone());
        if let Some(id) = id {
            self.dispatch(toggle_todo(id));
        }
    }

    pub fn remove_selected(&mut self) {
        let state = self.state();
        let action = match self.view.focus {
            Pane::Todos => state
                .todos
                .get(self.view.todo_selected)
                .map(|todo| remove_todo(todo.id.clone())),
            Pane::Goals => state
                .goals
                .get(self.view.goal_selected)
                .map(|goal| remove_goal(goal.id.clone())),
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: AppAction) {
        match self.store.dispatch(action) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                tracing::warn!("Dispatch failed: {}", err);
                self.last_error = Some(err.to_string());
            }
        }
        let state = self.state();
        dispatch_view!(
            self,
            ViewIntent::Clamp {
                todos: state.todos.len(),
                goals: state.goals.len(),
            }
        );
    }
}

impl Drop for TodoApp {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TodoApp {
        TodoApp::new(Arc::new(AppStore::new()), false)
    }

    fn type_text(app: &mut TodoApp, text: &str) {
        for ch in text.chars() {
            app.insert_char(ch);
        }
    }

    #[test]
    fn submit_adds_to_focused_list_and_clears_input() {
        let mut app = app();
        type_text(&mut app, "milk");
        app.submit_input();

        app.switch_pane();
        type_text(&mut app, "run 5k");
        app.submit_input();

        let state = app.state();
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].name, "milk");
        assert!(!state.todos[0].complete);
        assert_eq!(state.goals[0].name, "run 5k");
        assert!(app.input_is_empty());
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut app = app();
        type_text(&mut app, "   ");
        app.submit_input();
        assert!(app.state().todos.is_empty());
        assert_eq!(app.view().input, "   ");
    }

    #[test]
    fn toggle_and_remove_selected() {
        let mut app = app();
        type_text(&mut app, "milk");
        app.submit_input();
        type_text(&mut app, "eggs");
        app.submit_input();

        app.select_next();
        app.toggle_selected();
        assert!(!app.state().todos[0].complete);
        assert!(app.state().todos[1].complete);

        app.remove_selected();
        assert_eq!(app.state().todos.len(), 1);
        // Selection follows the shrunken list.
        assert_eq!(app.view().todo_selected, 0);
    }

    #[test]
    fn toggle_in_goal_pane_is_noop() {
        let mut app = app();
        app.switch_pane();
        type_text(&mut app, "read");
        app.submit_input();
        let before = app.state();

        app.toggle_selected();

        assert_eq!(*app.state(), *before);
    }

    #[test]
    fn store_changes_mark_screen_dirty() {
        let store = Arc::new(AppStore::new());
        let app = TodoApp::new(Arc::clone(&store), false);
        assert!(app.take_dirty());
        assert!(!app.take_dirty());

        store.dispatch(add_goal(Goal::new("external"))).unwrap();

        assert!(app.take_dirty());
    }

    #[test]
    fn drop_unsubscribes() {
        let store = Arc::new(AppStore::new());
        let app = TodoApp::new(Arc::clone(&store), false);
        assert_eq!(store.subscriber_count(), 1);
        drop(app);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn paste_skips_line_breaks() {
        let mut app = app();
        app.paste("buy\nbread");
        assert_eq!(app.view().input, "buybread");
    }
}
