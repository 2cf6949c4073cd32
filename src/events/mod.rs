//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: board API interactions
//! - Terminal events: keyboard and mouse input

pub mod network;
pub mod terminal;
