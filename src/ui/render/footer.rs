use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Render key hints for whatever currently has input.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let hints = if state.get_viewed_post().is_some() {
        " Esc/Enter: close  j/k: scroll"
    } else if state.is_create_open() {
        " Tab: next field  Enter: next/newline  Ctrl+S: submit  Esc: cancel"
    } else {
        " n: new post  j/k: move  Enter: open  r: reload  q: quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, styling::hint_text_style())),
        size,
    );
}
