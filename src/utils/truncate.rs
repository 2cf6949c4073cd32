//! Content preview helpers for the board list.

/// Appended to content that was cut short.
///
pub const ELLIPSIS: &str = "...";

/// Default number of characters shown for a post in the list.
///
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;

/// Return the text unchanged if it has at most `max_length` characters,
/// otherwise its first `max_length` characters followed by [`ELLIPSIS`].
///
pub fn truncate(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

/// Whether the list should offer a "read more" affordance for the text.
///
pub fn needs_read_more(text: &str, max_length: usize) -> bool {
    text.chars().nth(max_length).is_some()
}
