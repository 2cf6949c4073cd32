//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - The post collection, the new-post draft and overlay visibility
//! - Click targets of the last rendered frame
//! - State error handling

mod draft;
mod error;
mod modal;
mod navigation;
mod posts;

pub use draft::{Draft, DraftField};
pub use error::StateError;
pub use modal::ModalCoordinator;
pub use navigation::{Clickable, HitMap};
pub use posts::PostStore;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
