use super::Frame;
use crate::state::{Clickable, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CREATE_BUTTON: &str = "[ + Create post ]";

/// Render the title bar with the create button.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Board ", styling::active_block_title_style()))
        .border_style(styling::normal_block_border_style());
    let inner = block.inner(size);

    let count = format!("  {} posts", state.get_posts().len());
    let line = Line::from(vec![
        Span::styled(CREATE_BUTTON, styling::button_style(false)),
        Span::styled(count, styling::hint_text_style()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), size);

    let button = Rect {
        width: (CREATE_BUTTON.len() as u16).min(inner.width),
        height: inner.height.min(1),
        ..inner
    };
    state.get_hits_mut().register(button, Clickable::CreateButton);
}
