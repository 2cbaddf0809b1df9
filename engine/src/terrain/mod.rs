//! Terrain Module
//!
//! Diamond-square heightfields, height-banded colouring and mesh synthesis.

pub mod heightmap;
pub mod mesh;
pub mod palette;
pub mod scene;

pub use heightmap::{
    CORNER_SEED, HeightExtent, HeightGrid, HeightmapGenerator, MAX_GRID_SIZE, MAX_ROUGHNESS,
    MIN_ROUGHNESS, decay_roughness, generate_heightfield, validate_grid_size, validate_roughness,
    wrap,
};
pub use mesh::{TerrainMesh, WorldRect, build_terrain_mesh};
pub use palette::{BAND_COUNT, ColorPalette, EARTH, MARS, PaletteKind, band_index, pick_color};
pub use scene::{Landmass, Scene, build_scene};
