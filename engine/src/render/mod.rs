//! Render Module
//!
//! wgpu backend for the terrain streams: GPU context, uniforms and the
//! terrain pipeline.

pub mod gpu_context;
pub mod terrain_renderer;
pub mod uniforms;

pub use gpu_context::{DEPTH_FORMAT, GpuContext, pick_surface_format};
pub use terrain_renderer::TerrainRenderer;
pub use uniforms::TerrainUniforms;
