//! Input Module
//!
//! Windowing-independent keyboard handling for the terrain view.

pub mod view_controls;

pub use view_controls::{KeyCode, ViewAction, ViewState};
