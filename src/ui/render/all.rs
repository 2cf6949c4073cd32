use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render every part of the interface. Click targets are registered in
/// paint order so overlays drawn later sit on top.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    state.get_hits_mut().clear();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(size);

    header(frame, rows[0], state);
    board(frame, rows[1], state);
    log(frame, rows[2], state);
    footer(frame, rows[3], state);

    if state.is_create_open() {
        create_post(frame, size, state);
    }
    if state.get_viewed_post().is_some() {
        post_detail(frame, size, state);
    }
}
