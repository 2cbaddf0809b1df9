//! Heightmap Generator
//!
//! Diamond-square subdivision over a square grid of side `2^k + 1`.
//!
//! Each level fills cell centres from the four cell corners (diamond pass),
//! then edge midpoints from their four neighbours (square pass). Neighbour
//! lookups in the square pass wrap toroidally with period `N - 1`, and any
//! midpoint written on row or column 0 is mirrored onto row or column `N - 1`
//! so the opposite borders stay identical.
//!
//! Every generator owns its own ChaCha stream, so two landmasses can be
//! generated on separate threads without sharing a random source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::{Result, TerrainError};

/// Height written to the four grid corners before subdivision.
pub const CORNER_SEED: f32 = 0.0;

/// Floor applied to positive roughness after each level.
pub const MIN_ROUGHNESS: f32 = 0.1;

/// Largest roughness whose perturbation range `[-r, r)` still has a finite span.
pub const MAX_ROUGHNESS: f32 = f32::MAX / 2.0;

/// Largest accepted grid side. A mesh of this grid still fits 32-bit indices
/// (`6 · 16384² < 2^32`); the next valid size does not.
pub const MAX_GRID_SIZE: usize = (1 << 14) + 1;

/// Marker for cells the subdivision has not reached yet.
const UNWRITTEN: f32 = f32::NAN;

// ============================================================================
// HeightGrid / HeightExtent
// ============================================================================

/// Square matrix of heights indexed `[row][col]`, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    size: usize,
    heights: Vec<f32>,
}

impl HeightGrid {
    fn filled(size: usize, value: f32) -> Self {
        Self {
            size,
            heights: vec![value; size * size],
        }
    }

    /// Build a grid from explicit rows. Rows must form a square of side >= 2.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let size = rows.len();
        if size < 2 || rows.iter().any(|row| row.len() != size) {
            return Err(TerrainError::InvalidGridSize { size });
        }
        Ok(Self {
            size,
            heights: rows.into_iter().flatten().collect(),
        })
    }

    /// Side length `N`.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.heights[row * self.size + col]
    }

    fn set(&mut self, row: usize, col: usize, height: f32) {
        self.heights[row * self.size + col] = height;
    }

    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.size;
        &self.heights[start..start + self.size]
    }

    pub fn column(&self, col: usize) -> Vec<f32> {
        (0..self.size).map(|row| self.get(row, col)).collect()
    }

    /// All heights, row-major.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    fn unwritten_count(&self) -> usize {
        self.heights.iter().filter(|h| h.is_nan()).count()
    }

    /// Linear scan for the lowest and highest cell, first cell as accumulator.
    pub fn extent(&self) -> HeightExtent {
        let first = self.heights[0];
        let (min, max) = self
            .heights
            .iter()
            .fold((first, first), |(min, max), &h| {
                (if h < min { h } else { min }, if h > max { h } else { max })
            });
        HeightExtent { min, max }
    }
}

/// Lowest and highest height of a completed grid. Only used for colour banding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightExtent {
    pub min: f32,
    pub max: f32,
}

impl HeightExtent {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// True when every cell has the same height.
    pub fn is_flat(&self) -> bool {
        self.max <= self.min
    }

    pub fn contains(&self, height: f32) -> bool {
        height >= self.min && height <= self.max
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Euclidean modulo, so negative offsets land on the far side of the grid.
pub fn wrap(index: isize, period: usize) -> usize {
    index.rem_euclid(period as isize) as usize
}

/// Roughness for the next level: `max(floor(r / 2), 0.1)`.
///
/// The floor acts on the raw value, so any seed below 2.0 drops straight to
/// the 0.1 floor after the first level. Zero or negative roughness stays at
/// zero so an unperturbed run remains flat.
pub fn decay_roughness(roughness: f32) -> f32 {
    if roughness <= 0.0 {
        return 0.0;
    }
    (roughness / 2.0).floor().max(MIN_ROUGHNESS)
}

/// `size` must be `2^k + 1` with `k >= 0`, up to [`MAX_GRID_SIZE`].
pub fn validate_grid_size(size: usize) -> Result<()> {
    if size < 2 || size > MAX_GRID_SIZE || !(size - 1).is_power_of_two() {
        return Err(TerrainError::InvalidGridSize { size });
    }
    Ok(())
}

/// Roughness must be finite and at most [`MAX_ROUGHNESS`]. Zero and negative
/// values are accepted and disable perturbation.
pub fn validate_roughness(roughness: f32) -> Result<()> {
    if !roughness.is_finite() || roughness > MAX_ROUGHNESS {
        return Err(TerrainError::InvalidRoughness { roughness });
    }
    Ok(())
}

// ============================================================================
// Generator
// ============================================================================

/// Diamond-square generator with its own random stream.
pub struct HeightmapGenerator {
    rng: ChaCha8Rng,
}

impl HeightmapGenerator {
    /// Reproducible stream: the same seed yields the same grid in this build.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate an `N×N` heightfield and its extent.
    pub fn generate(
        &mut self,
        grid_size: usize,
        roughness: f32,
    ) -> Result<(HeightGrid, HeightExtent)> {
        validate_grid_size(grid_size)?;
        validate_roughness(roughness)?;

        let n = grid_size;
        let mut grid = HeightGrid::filled(n, UNWRITTEN);
        grid.set(0, 0, CORNER_SEED);
        grid.set(n - 1, 0, CORNER_SEED);
        grid.set(0, n - 1, CORNER_SEED);
        grid.set(n - 1, n - 1, CORNER_SEED);

        let mut step = n - 1;
        let mut level_roughness = roughness;

        while step > 1 {
            let half = step / 2;
            trace!(step, roughness = level_roughness, "subdivision level");

            self.diamond_pass(&mut grid, step, half, level_roughness);
            self.square_pass(&mut grid, step, half, level_roughness);

            level_roughness = decay_roughness(level_roughness);
            step = half;
        }

        let unfilled = grid.unwritten_count();
        if unfilled > 0 {
            return Err(TerrainError::UnfilledCells { count: unfilled });
        }

        let extent = grid.extent();
        debug!(
            grid_size = n,
            roughness,
            min = extent.min,
            max = extent.max,
            "generated heightfield"
        );
        Ok((grid, extent))
    }

    /// Uniform in `[-roughness, +roughness)`.
    fn perturbation(&mut self, roughness: f32) -> f32 {
        if roughness > 0.0 {
            self.rng.gen_range(-roughness..roughness)
        } else {
            0.0
        }
    }

    /// Cell centres from the mean of the four cell corners.
    fn diamond_pass(&mut self, grid: &mut HeightGrid, step: usize, half: usize, roughness: f32) {
        let last = grid.size() - 1;
        for x in (0..last).step_by(step) {
            for y in (0..last).step_by(step) {
                let corners = grid.get(x, y)
                    + grid.get(x + step, y)
                    + grid.get(x, y + step)
                    + grid.get(x + step, y + step);
                let height = corners / 4.0 + self.perturbation(roughness);
                grid.set(x + half, y + half, height);
            }
        }
    }

    /// Edge midpoints from their four wrapped neighbours, mirrored onto the far border.
    fn square_pass(&mut self, grid: &mut HeightGrid, step: usize, half: usize, roughness: f32) {
        let last = grid.size() - 1;
        let offset = half as isize;

        for x in (0..last).step_by(half) {
            let mut y = (x + half) % step;
            while y < last {
                let (xi, yi) = (x as isize, y as isize);
                let neighbours = grid.get(wrap(xi - offset, last), y)
                    + grid.get(wrap(xi + offset, last), y)
                    + grid.get(x, wrap(yi + offset, last))
                    + grid.get(x, wrap(yi - offset, last));
                let height = neighbours / 4.0 + self.perturbation(roughness);

                grid.set(x, y, height);
                if x == 0 {
                    grid.set(last, y, height);
                }
                if y == 0 {
                    grid.set(x, last, height);
                }

                y += step;
            }
        }
    }
}

/// Generate a heightfield from a fresh, unseeded random stream.
pub fn generate_heightfield(grid_size: usize, roughness: f32) -> Result<(HeightGrid, HeightExtent)> {
    HeightmapGenerator::from_entropy().generate(grid_size, roughness)
}
