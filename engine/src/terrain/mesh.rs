//! Terrain Mesh Builder
//!
//! Turns a heightfield into a coloured triangle list placed on a world-space
//! rectangle. Every quad `(i, j)` is split along the same diagonal:
//!
//! ```text
//!  (i,j+1) ---- (i+1,j+1)
//!     |  1   /     |
//!     |    /   2   |
//!  (i,j) ------ (i+1,j)
//! ```
//!
//! Corners are emitted fresh for each triangle, so the index stream is the
//! identity over the vertex count. [`TerrainMesh::welded`] produces the
//! shared-vertex equivalent.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::heightmap::{HeightExtent, HeightGrid};
use super::palette::{ColorPalette, pick_color};

/// World-space placement `[min.x, max.x] × [min.y, max.y]` on the XZ plane.
///
/// `min.y`/`max.y` hold Z. The grid step is derived from the X extent and
/// used for both axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldRect {
    pub fn new(x0: f32, x1: f32, z0: f32, z1: f32) -> Self {
        Self {
            min: Vec2::new(x0, z0),
            max: Vec2::new(x1, z1),
        }
    }

    /// World distance between adjacent grid samples for a grid of side `grid_size`.
    pub fn step(&self, grid_size: usize) -> f32 {
        (self.max.x - self.min.x) / (grid_size - 1) as f32
    }
}

/// Parallel position/colour streams plus a triangle-list index stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainMesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(vertices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Push one vertex and index it. Grid sizes are capped so a single
    /// landmass never exceeds the u32 index range.
    fn push_vertex(&mut self, position: [f32; 3], color: [f32; 3]) {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.colors.push(color);
        self.indices.push(index);
    }

    /// Concatenate `other`, rebasing its indices past our vertices.
    ///
    /// The combined vertex count must stay within `u32::MAX`; `build_scene`
    /// checks this before generating anything.
    pub fn append(&mut self, other: &TerrainMesh) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.colors.extend_from_slice(&other.colors);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Equivalent mesh where identical (position, colour) pairs share one vertex.
    ///
    /// Triangle order and corner order are preserved; only the indices change.
    pub fn welded(&self) -> TerrainMesh {
        let mut welded = TerrainMesh::new();
        let mut lookup: HashMap<[u32; 6], u32> = HashMap::new();

        for &index in &self.indices {
            let position = self.positions[index as usize];
            let color = self.colors[index as usize];
            let key = [
                position[0].to_bits(),
                position[1].to_bits(),
                position[2].to_bits(),
                color[0].to_bits(),
                color[1].to_bits(),
                color[2].to_bits(),
            ];
            let shared = *lookup.entry(key).or_insert_with(|| {
                welded.positions.push(position);
                welded.colors.push(color);
                (welded.positions.len() - 1) as u32
            });
            welded.indices.push(shared);
        }

        welded
    }
}

/// Build a coloured triangle list for one heightfield.
///
/// Emits `6 · (N - 1)²` vertices and indices for an `N×N` grid.
pub fn build_terrain_mesh(
    grid: &HeightGrid,
    extent: &HeightExtent,
    palette: &ColorPalette,
    rect: &WorldRect,
) -> TerrainMesh {
    let n = grid.size();
    let quads = (n - 1) * (n - 1);
    let step = rect.step(n);
    let mut mesh = TerrainMesh::with_capacity(quads * 6);

    let corner = |mesh: &mut TerrainMesh, i: usize, j: usize| {
        let height = grid.get(i, j);
        let position = [
            rect.min.x + i as f32 * step,
            height,
            rect.min.y + j as f32 * step,
        ];
        mesh.push_vertex(position, pick_color(height, extent, palette));
    };

    for j in 0..n - 1 {
        for i in 0..n - 1 {
            // Triangle 1: lower-left, far diagonal, upper-left
            corner(&mut mesh, i, j);
            corner(&mut mesh, i + 1, j + 1);
            corner(&mut mesh, i, j + 1);

            // Triangle 2: lower-left, lower-right, far diagonal
            corner(&mut mesh, i, j);
            corner(&mut mesh, i + 1, j);
            corner(&mut mesh, i + 1, j + 1);
        }
    }

    mesh
}
