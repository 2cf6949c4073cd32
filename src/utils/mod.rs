//! Text and image helpers shared by state and rendering.

pub mod image;
pub mod truncate;
