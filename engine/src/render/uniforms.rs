//! Uniform Structs for GPU Shaders
//!
//! Must match `shaders/terrain.wgsl` exactly.

use glam::Mat4;

/// Terrain shader uniforms.
///
/// WGSL layout (64 bytes):
///   offset 0: mvp (mat4x4<f32>) = 64 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainUniforms {
    pub mvp: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(TerrainUniforms, [u8; 64]);

impl Default for TerrainUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl TerrainUniforms {
    pub fn new(mvp: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
        }
    }
}
