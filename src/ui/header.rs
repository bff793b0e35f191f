use crate::app::AppState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &AppState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let done_style = Style::default().fg(STATUS_OK);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("todokit", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Todos {}", state.todos.len()), text_style),
            Span::styled(format!(" ({} done)", state.completed_todos()), done_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Goals {}", state.goals.len()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
