use crate::ui::app::TodoApp;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut TodoApp, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_selected();
        return;
    }
    if is_ctrl_char(key, 'x') {
        app.remove_selected();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.switch_pane(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.remove_selected(),
        // Space on an empty line toggles, like clicking the item.
        KeyCode::Char(' ') if app.input_is_empty() => app.toggle_selected(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppStore;
    use crate::ui::view::Pane;
    use std::sync::Arc;

    fn press(app: &mut TodoApp, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut TodoApp, ch: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    fn type_line(app: &mut TodoApp, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    fn app() -> TodoApp {
        TodoApp::new(Arc::new(AppStore::new()), false)
    }

    #[test]
    fn typing_then_enter_adds_todo() {
        let mut app = app();
        type_line(&mut app, "buy milk");
        let state = app.state();
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].name, "buy milk");
    }

    #[test]
    fn tab_then_enter_adds_goal() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view().focus, Pane::Goals);
        type_line(&mut app, "run 5k");
        assert_eq!(app.state().goals[0].name, "run 5k");
        assert!(app.state().todos.is_empty());
    }

    #[test]
    fn space_on_empty_input_toggles() {
        let mut app = app();
        type_line(&mut app, "milk");
        press(&mut app, KeyCode::Char(' '));
        assert!(app.state().todos[0].complete);
        ctrl(&mut app, 't');
        assert!(!app.state().todos[0].complete);
    }

    #[test]
    fn delete_and_ctrl_x_remove() {
        let mut app = app();
        type_line(&mut app, "a");
        type_line(&mut app, "b");
        press(&mut app, KeyCode::Delete);
        ctrl(&mut app, 'x');
        assert!(app.state().todos.is_empty());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        ctrl(&mut app, 'q');
        assert!(app.should_quit());

        let mut app = self::app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.input_is_empty());
    }
}
