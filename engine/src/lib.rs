//! Twin Terrain Engine
//!
//! Procedural diamond-square heightfields turned into coloured triangle
//! meshes, plus a small wgpu backend to draw them.
//!
//! # Modules
//!
//! - [`terrain`] - Heightmap generation, height-banded palettes, mesh synthesis, scene composition
//! - [`config`] - Scene layout and view settings (JSON loadable)
//! - [`input`] - Windowing-independent view controls
//! - [`render`] - wgpu pipeline for the position/colour/index streams
//! - [`error`] - Error type shared by the crate
//!
//! # Example
//!
//! ```
//! use twin_terrain_engine::terrain::{HeightmapGenerator, WorldRect, EARTH, build_terrain_mesh};
//!
//! let (grid, extent) = HeightmapGenerator::with_seed(7).generate(17, 0.1).unwrap();
//! let mesh = build_terrain_mesh(&grid, &extent, &EARTH, &WorldRect::new(-1.0, 0.0, -0.6, 0.4));
//! assert_eq!(mesh.vertex_count(), 6 * 16 * 16);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod terrain;

pub use config::{LandmassConfig, SceneConfig, ViewConfig};
pub use error::{Result, TerrainError};
pub use terrain::{
    HeightExtent, HeightGrid, HeightmapGenerator, Scene, TerrainMesh, WorldRect, build_scene,
    build_terrain_mesh, generate_heightfield,
};
