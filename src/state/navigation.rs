//! Click targets registered while rendering.

use super::DraftField;
use ratatui::layout::Rect;

/// Things the user can click on in the last rendered frame.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Clickable {
    CreateButton,
    Post(usize),
    ReadMore(usize),
    /// Area behind the create overlay; swallows clicks.
    CreateBackdrop,
    DraftField(DraftField),
    DetailBackdrop,
    /// Content area of the detail overlay; swallows clicks so they never
    /// reach the backdrop.
    DetailContent,
    DetailClose,
}

/// Click targets in paint order. Later entries are drawn on top.
///
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    targets: Vec<(Rect, Clickable)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn register(&mut self, area: Rect, target: Clickable) {
        self.targets.push((area, target));
    }

    /// Returns the topmost target containing the cell, if any.
    ///
    pub fn target_at(&self, column: u16, row: u16) -> Option<Clickable> {
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, target)| *target)
    }
}
