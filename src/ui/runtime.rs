use crate::app::AppStore;
use crate::config::UiConfig;
use crate::ui::app::TodoApp;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Run the interactive UI until the user quits.
///
/// Redraws whenever the store notifies its observer or the view changes.
pub fn run(store: Arc<AppStore>, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = TodoApp::new(store, config.show_ids);
    let events = EventHandler::new(tick_rate);

    loop {
        if app.take_dirty() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.paste(&text),
            Ok(AppEvent::Resize(_, _)) => app.mark_dirty(),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(app);
    drop(guard);
    Ok(())
}
