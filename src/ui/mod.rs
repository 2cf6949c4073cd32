//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal rendering and layout
//! - Widget styling
//! - View rendering (board list, create overlay, post detail, log)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod widgets;

pub use render::render;
