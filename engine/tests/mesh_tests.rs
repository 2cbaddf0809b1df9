//! Mesh Tests - Triangle Streams and Height Banding
//!
//! Vertex counts, colour banding coverage and the flat 5×5 end-to-end run.

use twin_terrain_engine::terrain::{
    BAND_COUNT, EARTH, HeightExtent, HeightGrid, HeightmapGenerator, MARS, WorldRect, band_index,
    build_terrain_mesh, generate_heightfield, pick_color,
};

fn unit_rect() -> WorldRect {
    WorldRect::new(0.0, 1.0, 0.0, 1.0)
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_flat_five_by_five_scene() {
    let (grid, extent) = generate_heightfield(5, 0.0).unwrap();
    assert_eq!(grid.heights(), &[0.0; 25]);
    assert_eq!(extent, HeightExtent::new(0.0, 0.0));

    let mesh = build_terrain_mesh(&grid, &extent, &EARTH, &unit_rect());

    assert_eq!(mesh.positions.len(), 96);
    assert_eq!(mesh.colors.len(), 96);
    assert!(mesh.colors.iter().all(|&c| c == EARTH.bands[0]));
    assert_eq!(mesh.indices, (0..96).collect::<Vec<u32>>());

    // samples land on multiples of 0.25 inside the unit square
    for p in &mesh.positions {
        assert_eq!(p[1], 0.0);
        assert!((0.0..=1.0).contains(&p[0]) && (0.0..=1.0).contains(&p[2]));
        assert_eq!((p[0] * 4.0).fract(), 0.0);
        assert_eq!((p[2] * 4.0).fract(), 0.0);
    }
}

#[test]
fn test_flat_scene_welds_to_grid() {
    let (grid, extent) = generate_heightfield(5, 0.0).unwrap();
    let welded = build_terrain_mesh(&grid, &extent, &EARTH, &unit_rect()).welded();
    assert_eq!(welded.vertex_count(), 25);
    assert_eq!(welded.indices.len(), 96);
}

// ============================================================================
// Vertex counts
// ============================================================================

#[test]
fn test_vertex_count_is_six_per_quad() {
    for size in [2, 3, 5, 9, 17, 33] {
        let (grid, extent) = HeightmapGenerator::with_seed(size as u64)
            .generate(size, 0.5)
            .unwrap();
        let mesh = build_terrain_mesh(&grid, &extent, &MARS, &unit_rect());
        let expected = 6 * (size - 1) * (size - 1);

        assert_eq!(mesh.positions.len(), expected, "size {size}");
        assert_eq!(mesh.colors.len(), expected, "size {size}");
        assert_eq!(mesh.indices.len(), expected, "size {size}");
    }
}

#[test]
fn test_positions_carry_grid_heights() {
    let (grid, extent) = HeightmapGenerator::with_seed(3).generate(9, 0.5).unwrap();
    let rect = WorldRect::new(-1.0, 0.0, -0.6, 0.4);
    let step = rect.step(9);
    let mesh = build_terrain_mesh(&grid, &extent, &EARTH, &rect);

    for p in &mesh.positions {
        let i = ((p[0] - rect.min.x) / step).round() as usize;
        let j = ((p[2] - rect.min.y) / step).round() as usize;
        assert_eq!(p[1], grid.get(i, j));
    }
}

// ============================================================================
// Banding
// ============================================================================

#[test]
fn test_band_boundaries() {
    let extent = HeightExtent::new(-0.42, 0.37);
    assert_eq!(band_index(extent.min, &extent), 0);
    assert_eq!(band_index(extent.max, &extent), BAND_COUNT - 1);
    assert_eq!(pick_color(extent.min, &extent, &EARTH), EARTH.bands[0]);
    assert_eq!(pick_color(extent.max, &extent, &EARTH), EARTH.bands[4]);
}

#[test]
fn test_generated_mesh_uses_all_bands_in_order() {
    let (grid, extent) = HeightmapGenerator::with_seed(12).generate(17, 0.5).unwrap();
    let mesh = build_terrain_mesh(&grid, &extent, &MARS, &unit_rect());

    for (p, c) in mesh.positions.iter().zip(&mesh.colors) {
        let band = MARS.bands.iter().position(|b| b == c).unwrap();
        assert_eq!(band, band_index(p[1], &extent));
    }

    // extent endpoints are real cells, so band 0 and band 4 both appear
    assert!(mesh.colors.contains(&MARS.bands[0]));
    assert!(mesh.colors.contains(&MARS.bands[4]));
}

#[test]
fn test_custom_grid_band_split() {
    // heights 0..=4 with band width 0.8
    let grid = HeightGrid::from_rows(vec![vec![0.0, 1.0], vec![3.0, 4.0]]).unwrap();
    let extent = grid.extent();
    assert_eq!(band_index(0.0, &extent), 0);
    assert_eq!(band_index(1.0, &extent), 1);
    assert_eq!(band_index(3.0, &extent), 3);
    assert_eq!(band_index(4.0, &extent), 4);
}
