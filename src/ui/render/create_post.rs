use super::Frame;
use crate::state::{Clickable, DraftField, State};
use crate::ui::widgets::layout::centered_rect;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SUBMIT_LABEL: &str = "[ Create ]";
const CANCEL_LABEL: &str = "[ Cancel ]";

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        styling::active_block_border_style()
    } else {
        styling::normal_block_border_style()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

/// Render the create overlay over the whole frame.
///
pub fn create_post(frame: &mut Frame, size: Rect, state: &mut State) {
    let area = centered_rect(70, 70, size);
    let focused = state.get_draft_field();
    let draft = state.get_draft().clone();
    let cursor = |field: DraftField| if focused == field { "_" } else { "" };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Create post ", styling::active_block_title_style()))
        .border_style(styling::active_block_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let title = Paragraph::new(format!("{}{}", draft.title, cursor(DraftField::Title)))
        .block(field_block("Title", focused == DraftField::Title));
    frame.render_widget(title, rows[0]);

    let image = Paragraph::new(format!(
        "{}{}",
        draft.image_path(),
        cursor(DraftField::Image)
    ))
    .block(field_block("Image file (optional path)", focused == DraftField::Image));
    frame.render_widget(image, rows[1]);

    let content = Paragraph::new(format!("{}{}", draft.content, cursor(DraftField::Content)))
        .wrap(Wrap { trim: false })
        .block(field_block("Content", focused == DraftField::Content));
    frame.render_widget(content, rows[2]);

    let buttons = Line::from(vec![
        Span::styled(SUBMIT_LABEL, styling::button_style(focused == DraftField::Submit)),
        Span::raw("  "),
        Span::styled(CANCEL_LABEL, styling::button_style(focused == DraftField::Cancel)),
    ]);
    frame.render_widget(Paragraph::new(buttons), rows[3]);

    let submit = Rect {
        width: SUBMIT_LABEL.len() as u16,
        ..rows[3]
    };
    let cancel = Rect {
        x: rows[3].x + SUBMIT_LABEL.len() as u16 + 2,
        width: CANCEL_LABEL.len() as u16,
        ..rows[3]
    };

    let hits = state.get_hits_mut();
    hits.register(size, Clickable::CreateBackdrop);
    hits.register(rows[0], Clickable::DraftField(DraftField::Title));
    hits.register(rows[1], Clickable::DraftField(DraftField::Image));
    hits.register(rows[2], Clickable::DraftField(DraftField::Content));
    hits.register(submit, Clickable::DraftField(DraftField::Submit));
    hits.register(cancel, Clickable::DraftField(DraftField::Cancel));
}
