//! Reusable UI widget components.
//!
//! This module contains styling utilities and layout helpers shared by views.

pub mod layout;
pub mod styling;
