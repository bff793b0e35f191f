use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, list body, input line and footer, top to bottom.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Todo pane on the left, goal pane on the right.
pub fn split_panes(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, input, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(input.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 24 - 9);
        assert_eq!(footer.y + footer.height, 24);
    }

    #[test]
    fn panes_split_body() {
        let (left, right) = split_panes(Rect::new(0, 3, 80, 10));
        assert_eq!(left.width + right.width, 80);
        assert_eq!(right.x, left.x + left.width);
    }
}
