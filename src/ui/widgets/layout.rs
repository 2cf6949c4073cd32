use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;

/// Return a rect of the given percentage size centered in `area`.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

/// Display width of text in terminal cells.
///
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Break text into lines no wider than `width` cells, honoring newlines.
/// Characters wider than the whole line get a line of their own.
///
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for c in paragraph.chars() {
            let mut buf = [0u8; 4];
            let c_width = text_width(c.encode_utf8(&mut buf));
            if line_width + c_width > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(c);
            line_width += c_width;
        }
        lines.push(line);
    }
    lines
}
