use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str =
    " Tab: Pane │ Enter: Add │ Space/Ctrl+T: Toggle │ Del/Ctrl+X: Remove │ Esc: Quit";

/// Key hints, or the last dispatch error when there is one.
pub struct Footer<'a> {
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(error: Option<&'a str>) -> Self {
        Self { error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (message, message_style) = match self.error {
            Some(error) => (
                format!(" Error: {error}"),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                HINTS.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{VERSION} ");

        // Pad by char count so the version stays right-aligned with box-drawing hints.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(message.chars().count())
            .saturating_sub(version.chars().count());
        let version_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(message, message_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, version_style),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
