//! Scene Configuration
//!
//! Grid size, landmass placement and starting view for the twin-landmass
//! scene. `Default` reproduces the classic layout: a gentle Earth landmass on
//! the left and a rougher Mars landmass on the right.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::terrain::mesh::WorldRect;
use crate::terrain::palette::PaletteKind;

/// Grid side used by the default scene (16 × 16 quads per landmass).
pub const DEFAULT_GRID_SIZE: usize = 17;

/// One heightfield and where/how to draw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmassConfig {
    pub name: String,
    /// Perturbation bound for the first subdivision level
    pub roughness: f32,
    pub palette: PaletteKind,
    pub rect: WorldRect,
    /// Fixed random seed; `None` draws a fresh stream each build
    #[serde(default)]
    pub seed: Option<u64>,
}

impl LandmassConfig {
    pub fn earth() -> Self {
        Self {
            name: "earth".to_string(),
            roughness: 0.1,
            palette: PaletteKind::Earth,
            rect: WorldRect::new(-1.0, 0.0, -0.6, 0.4),
            seed: None,
        }
    }

    pub fn mars() -> Self {
        Self {
            name: "mars".to_string(),
            roughness: 0.5,
            palette: PaletteKind::Mars,
            rect: WorldRect::new(0.2, 1.0, -0.3, 0.5),
            seed: None,
        }
    }
}

/// Starting camera placement and background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub translation: Vec3,
    /// Rotation about X, Y, Z in degrees
    pub angles: Vec3,
    pub clear_color: [f64; 3],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            translation: Vec3::new(0.0, 0.0, -0.6),
            angles: Vec3::new(50.0, 0.0, 0.0),
            clear_color: [0.3, 0.5, 0.7],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Side of every landmass grid, `2^k + 1`
    pub grid_size: usize,
    pub landmasses: Vec<LandmassConfig>,
    pub view: ViewConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            landmasses: vec![LandmassConfig::earth(), LandmassConfig::mars()],
            view: ViewConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), landmasses = config.landmasses.len(), "loaded scene config");
        Ok(config)
    }

    /// Same layout with every fixed seed cleared.
    pub fn without_seeds(&self) -> Self {
        let mut config = self.clone();
        for landmass in &mut config.landmasses {
            landmass.seed = None;
        }
        config
    }
}
