//! Scene Composition
//!
//! Generates every configured landmass and concatenates their meshes into a
//! single stream for upload. Landmasses share nothing, so each one is
//! generated on its own scoped thread with its own random stream.

use std::ops::Range;
use std::thread;

use tracing::{debug, info};

use super::heightmap::{HeightExtent, HeightGrid, HeightmapGenerator, validate_grid_size};
use super::mesh::{TerrainMesh, build_terrain_mesh};
use crate::config::{LandmassConfig, SceneConfig};
use crate::error::{Result, TerrainError};

/// A generated landmass and where its vertices sit in the combined mesh.
#[derive(Clone, Debug)]
pub struct Landmass {
    pub name: String,
    pub grid: HeightGrid,
    pub extent: HeightExtent,
    pub vertex_range: Range<usize>,
}

/// All landmasses plus their concatenated mesh.
#[derive(Clone, Debug)]
pub struct Scene {
    pub landmasses: Vec<Landmass>,
    pub mesh: TerrainMesh,
}

impl Scene {
    pub fn landmass(&self, name: &str) -> Option<&Landmass> {
        self.landmasses.iter().find(|l| l.name == name)
    }
}

fn generate_landmass(
    grid_size: usize,
    config: &LandmassConfig,
) -> Result<(HeightGrid, HeightExtent, TerrainMesh)> {
    let mut generator = match config.seed {
        Some(seed) => HeightmapGenerator::with_seed(seed),
        None => HeightmapGenerator::from_entropy(),
    };
    let (grid, extent) = generator.generate(grid_size, config.roughness)?;
    let mesh = build_terrain_mesh(&grid, &extent, config.palette.palette(), &config.rect);
    debug!(
        landmass = %config.name,
        vertices = mesh.vertex_count(),
        min = extent.min,
        max = extent.max,
        "built landmass mesh"
    );
    Ok((grid, extent, mesh))
}

/// Build every landmass in `config` and concatenate their meshes in order.
pub fn build_scene(config: &SceneConfig) -> Result<Scene> {
    if config.landmasses.is_empty() {
        return Err(TerrainError::EmptyScene);
    }
    validate_grid_size(config.grid_size)?;

    // Concatenated indices must stay addressable as u32.
    let quads = (config.grid_size as u64 - 1).pow(2);
    let vertices = 6 * quads * config.landmasses.len() as u64;
    if vertices > u64::from(u32::MAX) {
        return Err(TerrainError::MeshTooLarge { vertices });
    }

    let results: Vec<Result<(HeightGrid, HeightExtent, TerrainMesh)>> = thread::scope(|s| {
        let handles: Vec<_> = config
            .landmasses
            .iter()
            .map(|landmass| s.spawn(move || generate_landmass(config.grid_size, landmass)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut mesh = TerrainMesh::new();
    let mut landmasses = Vec::with_capacity(results.len());

    for (landmass_config, result) in config.landmasses.iter().zip(results) {
        let (grid, extent, landmass_mesh) = result?;
        let start = mesh.vertex_count();
        mesh.append(&landmass_mesh);
        landmasses.push(Landmass {
            name: landmass_config.name.clone(),
            grid,
            extent,
            vertex_range: start..mesh.vertex_count(),
        });
    }

    info!(
        landmasses = landmasses.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "scene built"
    );
    Ok(Scene { landmasses, mesh })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::palette::{EARTH, MARS};

    fn seeded_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.landmasses[0].seed = Some(11);
        config.landmasses[1].seed = Some(22);
        config
    }

    #[test]
    fn test_default_scene_sizes() {
        let scene = build_scene(&seeded_config()).unwrap();
        let per_landmass = 6 * 16 * 16;

        assert_eq!(scene.landmasses.len(), 2);
        assert_eq!(scene.mesh.vertex_count(), 2 * per_landmass);
        assert_eq!(scene.landmasses[0].vertex_range, 0..per_landmass);
        assert_eq!(scene.landmasses[1].vertex_range, per_landmass..2 * per_landmass);
        assert_eq!(
            scene.mesh.indices,
            (0..(2 * per_landmass) as u32).collect::<Vec<u32>>()
        );
    }

    #[test]
    fn test_landmasses_use_their_palettes() {
        let scene = build_scene(&seeded_config()).unwrap();
        let earth = scene.landmass("earth").unwrap();
        let mars = scene.landmass("mars").unwrap();

        for color in &scene.mesh.colors[earth.vertex_range.clone()] {
            assert!(EARTH.bands.contains(color));
        }
        for color in &scene.mesh.colors[mars.vertex_range.clone()] {
            assert!(MARS.bands.contains(color));
        }
    }

    #[test]
    fn test_seeded_scene_is_reproducible() {
        let a = build_scene(&seeded_config()).unwrap();
        let b = build_scene(&seeded_config()).unwrap();
        assert_eq!(a.mesh, b.mesh);
    }

    #[test]
    fn test_empty_scene_rejected() {
        let config = SceneConfig {
            landmasses: Vec::new(),
            ..SceneConfig::default()
        };
        assert!(matches!(build_scene(&config), Err(TerrainError::EmptyScene)));
    }

    #[test]
    fn test_oversized_scene_rejected_before_generation() {
        // three maximal landmasses overflow u32 indices; two still fit
        let config = SceneConfig {
            grid_size: crate::terrain::MAX_GRID_SIZE,
            landmasses: vec![
                LandmassConfig::earth(),
                LandmassConfig::mars(),
                LandmassConfig::earth(),
            ],
            ..SceneConfig::default()
        };
        assert!(matches!(
            build_scene(&config),
            Err(TerrainError::MeshTooLarge { vertices }) if vertices == 3 * 6 * 16384 * 16384
        ));
    }

    #[test]
    fn test_invalid_grid_size_propagates() {
        let config = SceneConfig {
            grid_size: 16,
            ..seeded_config()
        };
        assert!(matches!(
            build_scene(&config),
            Err(TerrainError::InvalidGridSize { size: 16 })
        ));
    }
}
