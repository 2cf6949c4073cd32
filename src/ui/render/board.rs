use super::Frame;
use crate::board::Post;
use crate::state::{Clickable, State};
use crate::ui::widgets::layout::{text_width, wrap_text};
use crate::ui::widgets::styling;
use crate::utils::image::describe_image;
use crate::utils::truncate::{needs_read_more, truncate};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const EMPTY_MESSAGE: &str = "Try using the board!";
const READ_MORE: &str = " read more";

/// A post laid out for the list: its lines and where the read-more
/// affordance sits within them.
///
struct Card {
    lines: Vec<Line<'static>>,
    /// (line index, column offset) of the affordance.
    read_more: Option<(usize, u16)>,
}

impl Card {
    fn height(&self) -> usize {
        self.lines.len() + 2
    }
}

fn layout_card(post: &Post, width: usize, preview_length: usize) -> Card {
    let mut lines = vec![Line::from(Span::styled(
        post.title.clone(),
        styling::post_title_style(),
    ))];
    if let Some(image) = post.image() {
        lines.push(Line::from(Span::styled(
            describe_image(image),
            styling::hint_text_style(),
        )));
    }

    let mut content: Vec<String> = wrap_text(&truncate(&post.content, preview_length), width);
    let mut read_more = None;
    if needs_read_more(&post.content, preview_length) {
        let last_width = content.last().map(|l| text_width(l)).unwrap_or(0);
        if last_width + READ_MORE.len() > width {
            content.push(String::new());
        }
        let column = content.last().map(|l| text_width(l)).unwrap_or(0) as u16;
        read_more = Some((lines.len() + content.len() - 1, column));
    }

    let last = content.len().saturating_sub(1);
    for (i, text) in content.into_iter().enumerate() {
        let mut spans = vec![Span::styled(text, styling::normal_text_style())];
        if i == last && read_more.is_some() {
            spans.push(Span::styled(READ_MORE, styling::read_more_style()));
        }
        lines.push(Line::from(spans));
    }

    Card { lines, read_more }
}

/// Render the post list, or the empty-state message when there are no
/// posts.
///
pub fn board(frame: &mut Frame, size: Rect, state: &mut State) {
    if state.get_posts().is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Posts")
            .border_style(styling::normal_block_border_style());
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_MESSAGE, styling::post_title_style())),
            Line::from(Span::styled(
                "Press n to create the first post",
                styling::hint_text_style(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(text).block(block).alignment(Alignment::Center),
            size,
        );
        return;
    }

    let card_width = size.width.saturating_sub(2) as usize;
    let preview_length = state.get_preview_length();
    let posts = state.get_posts().as_slice();
    let selected = state.selected_index().unwrap_or(0).min(posts.len() - 1);
    let layout = |index: usize| layout_card(&posts[index], card_width, preview_length);
    let area_height = usize::from(size.height);

    // Walk back from the selection while the cards above it still fit
    let mut first = selected;
    let mut used = layout(selected).height();
    while first > 0 {
        let height = layout(first - 1).height();
        if used + height > area_height {
            break;
        }
        used += height;
        first -= 1;
    }

    let mut visible = Vec::new();
    let mut filled = 0;
    for index in first..posts.len() {
        if filled >= area_height {
            break;
        }
        let card = layout(index);
        filled += card.height();
        visible.push((index, card));
    }

    let mut y = size.y;
    let bottom = size.y.saturating_add(size.height);
    for (index, card) in visible {
        if y >= bottom {
            break;
        }
        let height = card.height().min(usize::from(bottom - y)) as u16;
        let area = Rect::new(size.x, y, size.width, height);
        let border_style = if index == selected {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(card.lines).block(block), area);

        let hits = state.get_hits_mut();
        hits.register(area, Clickable::Post(index));
        if let Some((line, column)) = card.read_more {
            if line < usize::from(inner.height) {
                let row = inner.y + line as u16;
                let affordance = Rect::new(
                    inner.x + column,
                    row,
                    (READ_MORE.len() as u16).min(inner.width.saturating_sub(column)),
                    1,
                );
                hits.register(affordance, Clickable::ReadMore(index));
            }
        }
        y += height;
    }
}
