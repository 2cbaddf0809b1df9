//! Shader Tests - WGSL Validation
//!
//! Parses and validates the terrain shader with naga.

use naga::ShaderStage;
use naga::valid::{Capabilities, ValidationFlags, Validator};

const TERRAIN_SHADER: &str = include_str!("../../shaders/terrain.wgsl");

fn parse_terrain_shader() -> naga::Module {
    naga::front::wgsl::parse_str(TERRAIN_SHADER)
        .unwrap_or_else(|e| panic!("terrain.wgsl failed to parse: {}", e.emit_to_string(TERRAIN_SHADER)))
}

#[test]
fn test_terrain_shader_validates() {
    let module = parse_terrain_shader();
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .expect("terrain.wgsl failed validation");
}

#[test]
fn test_terrain_shader_entry_points() {
    let module = parse_terrain_shader();
    let entry = |name: &str| module.entry_points.iter().find(|e| e.name == name);

    let vs = entry("vs_main").expect("missing vs_main");
    assert_eq!(vs.stage, ShaderStage::Vertex);
    // position + colour streams
    assert_eq!(vs.function.arguments.len(), 2);

    let fs = entry("fs_main").expect("missing fs_main");
    assert_eq!(fs.stage, ShaderStage::Fragment);
}
