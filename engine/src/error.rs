//! Error Types
//!
//! Failures surfaced by terrain generation, scene configuration and GPU setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerrainError {
    /// Grid side must be at least 2 and `size - 1` must be a power of two.
    #[error("invalid grid size {size}: expected 2^k + 1 (e.g. 5, 9, 17, 33)")]
    InvalidGridSize { size: usize },

    /// Roughness must be finite and small enough that `[-r, r)` has a finite span.
    #[error("invalid roughness {roughness}: expected a finite value no greater than f32::MAX / 2")]
    InvalidRoughness { roughness: f32 },

    /// Subdivision finished with cells that were never written.
    #[error("heightmap subdivision left {count} cells unfilled")]
    UnfilledCells { count: usize },

    /// Combined scene would need indices past `u32::MAX`.
    #[error("scene needs {vertices} vertices, more than 32-bit indices can address")]
    MeshTooLarge { vertices: u64 },

    #[error("scene has no landmasses")]
    EmptyScene,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("Device error: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
