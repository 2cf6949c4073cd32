//! New-post form state.
//!
//! This module contains the draft being composed in the create overlay and
//! the focusable elements of that overlay.

use std::path::PathBuf;

/// A user-selected image file, referenced by path until submission.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile(pub PathBuf);

/// Focusable elements of the create overlay, in tab order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DraftField {
    Title,
    Image,
    Content,
    Submit,
    Cancel,
}

impl DraftField {
    const ORDER: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Image,
        DraftField::Content,
        DraftField::Submit,
        DraftField::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> DraftField {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> DraftField {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether typed characters go into this element.
    ///
    pub fn is_text(self) -> bool {
        matches!(self, DraftField::Title | DraftField::Image | DraftField::Content)
    }
}

/// In-progress values for a post that has not been created yet.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    image_path: String,
}

impl Draft {
    /// Returns the chosen image file, if any path was entered.
    ///
    pub fn image(&self) -> Option<ImageFile> {
        let path = self.image_path.trim();
        if path.is_empty() {
            None
        } else {
            Some(ImageFile(PathBuf::from(path)))
        }
    }

    /// Returns the image path exactly as typed.
    ///
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    #[cfg(test)]
    pub fn set_image_path(&mut self, path: &str) -> &mut Self {
        self.image_path = path.to_string();
        self
    }

    /// Append a character to the given text field. Newlines are only
    /// accepted by the content field.
    ///
    pub fn push_char(&mut self, field: DraftField, c: char) {
        match field {
            DraftField::Title if c != '\n' => self.title.push(c),
            DraftField::Image if c != '\n' => self.image_path.push(c),
            DraftField::Content => self.content.push(c),
            _ => {}
        }
    }

    /// Remove the last character of the given text field.
    ///
    pub fn pop_char(&mut self, field: DraftField) {
        match field {
            DraftField::Title => {
                self.title.pop();
            }
            DraftField::Image => {
                self.image_path.pop();
            }
            DraftField::Content => {
                self.content.pop();
            }
            DraftField::Submit | DraftField::Cancel => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }
}
