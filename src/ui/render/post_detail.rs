use super::Frame;
use crate::state::{Clickable, State};
use crate::ui::widgets::layout::centered_rect;
use crate::ui::widgets::styling;
use crate::utils::image::describe_image;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const CLOSE_LABEL: &str = "[ Close ]";

/// Render the full post over the whole frame. Everything outside the
/// overlay is backdrop.
///
pub fn post_detail(frame: &mut Frame, size: Rect, state: &mut State) {
    let post = match state.get_viewed_post() {
        Some(post) => post.clone(),
        None => return,
    };
    let area = centered_rect(80, 80, size);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", post.title),
            styling::active_block_title_style(),
        ))
        .border_style(styling::active_block_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![];
    if let Some(image) = post.image() {
        lines.push(Line::from(Span::styled(
            describe_image(image),
            styling::hint_text_style(),
        )));
        lines.push(Line::from(""));
    }
    lines.extend(content_lines(&post.content));
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.get_detail_scroll(), 0));
    frame.render_widget(body, rows[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, styling::button_style(true))),
        rows[1],
    );
    let close = Rect {
        width: CLOSE_LABEL.len() as u16,
        ..rows[1]
    };

    let hits = state.get_hits_mut();
    hits.register(size, Clickable::DetailBackdrop);
    hits.register(area, Clickable::DetailContent);
    hits.register(close, Clickable::DetailClose);
}

/// One line per `\n`-separated piece of the content, keeping empty ones.
///
fn content_lines(content: &str) -> Vec<Line<'static>> {
    content
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), styling::normal_text_style())))
        .collect()
}
