use crate::goals::Goal;
use crate::todos::Todo;
use crate::ui::app::TodoApp;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_panes};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use crate::ui::view::{Pane, ViewState};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &TodoApp) {
    let (header, body, input, footer) = layout_regions(frame.area());
    let state = app.state();
    let view = app.view();

    frame.render_widget(Header::new().widget(&state), header);

    let (todo_area, goal_area) = split_panes(body);
    let todo_lines = state
        .todos
        .iter()
        .map(|todo| todo_line(todo, app.show_ids()))
        .collect();
    frame.render_widget(
        pane(" Todos ", todo_lines, view.focus == Pane::Todos, view.todo_selected, todo_area),
        todo_area,
    );
    let goal_lines = state
        .goals
        .iter()
        .map(|goal| goal_line(goal, app.show_ids()))
        .collect();
    frame.render_widget(
        pane(" Goals ", goal_lines, view.focus == Pane::Goals, view.goal_selected, goal_area),
        goal_area,
    );

    frame.render_widget(input_widget(view), input);
    if input.width > 2 && input.height > 2 {
        let typed = view.input.chars().count() as u16;
        let x = input.x + 1 + typed.min(input.width.saturating_sub(3));
        frame.set_cursor_position((x, input.y + 1));
    }

    frame.render_widget(Footer::new(app.last_error()).widget(footer), footer);
}

fn todo_line(todo: &Todo, show_ids: bool) -> Line<'static> {
    let name_style = if todo.complete {
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if todo.complete { "[x] " } else { "[ ] " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(STATUS_OK)),
        Span::styled(todo.name.clone(), name_style),
    ];
    if show_ids {
        spans.push(id_span(&todo.id));
    }
    Line::from(spans)
}

fn goal_line(goal: &Goal, show_ids: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled("• ", Style::default().fg(ACCENT)),
        Span::styled(goal.name.clone(), Style::default().fg(HEADER_TEXT)),
    ];
    if show_ids {
        spans.push(id_span(&goal.id));
    }
    Line::from(spans)
}

fn id_span(id: &str) -> Span<'static> {
    Span::styled(format!("  {id}"), Style::default().fg(HEADER_SEPARATOR))
}

fn pane(
    title: &'static str,
    lines: Vec<Line<'static>>,
    focused: bool,
    selected: usize,
    area: Rect,
) -> Paragraph<'static> {
    let border_color = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if lines.is_empty() {
        let hint = Line::from(Span::styled(
            "  Nothing here yet.",
            Style::default().fg(HEADER_SEPARATOR),
        ));
        return Paragraph::new(hint).block(block);
    }

    let lines: Vec<Line<'static>> = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let highlighted = focused && index == selected;
            let prefix = if highlighted { "› " } else { "  " };
            let mut spans = vec![Span::styled(prefix, Style::default().fg(ACCENT))];
            spans.extend(line.spans);
            let line = Line::from(spans);
            if highlighted {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    // Keep the selection on screen once the list outgrows the pane.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    };

    Paragraph::new(lines)
        .block(block)
        .scroll((offset.min(u16::MAX as usize) as u16, 0))
}

fn input_widget(view: &ViewState) -> Paragraph<'static> {
    let title = match view.focus {
        Pane::Todos => " Add todo ",
        Pane::Goals => " Add goal ",
    };
    Paragraph::new(view.input.clone()).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
