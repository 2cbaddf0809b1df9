//! Config Module
//!
//! Scene layout and view settings, loadable from JSON.

pub mod scene_config;

pub use scene_config::{DEFAULT_GRID_SIZE, LandmassConfig, SceneConfig, ViewConfig};
