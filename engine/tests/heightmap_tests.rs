//! Heightmap Tests - Diamond-Square Invariants
//!
//! Corner seeding, flat runs, extent correctness, border wraparound and the
//! roughness-decay quirk.

use twin_terrain_engine::TerrainError;
use twin_terrain_engine::terrain::{
    CORNER_SEED, HeightGrid, HeightmapGenerator, MAX_ROUGHNESS, MIN_ROUGHNESS, decay_roughness,
    generate_heightfield,
};

const SIZES: [usize; 5] = [2, 3, 5, 9, 17];

fn corners(grid: &HeightGrid) -> [f32; 4] {
    let last = grid.size() - 1;
    [
        grid.get(0, 0),
        grid.get(last, 0),
        grid.get(0, last),
        grid.get(last, last),
    ]
}

// ============================================================================
// Corner / flat invariants
// ============================================================================

#[test]
fn test_corners_keep_seed_value() {
    for (seed, &size) in SIZES.iter().enumerate() {
        for roughness in [0.1, 0.5, 4.0] {
            let (grid, _) = HeightmapGenerator::with_seed(seed as u64)
                .generate(size, roughness)
                .unwrap();
            assert_eq!(corners(&grid), [CORNER_SEED; 4], "size {size}, roughness {roughness}");
        }
    }
}

#[test]
fn test_zero_roughness_is_flat() {
    for size in SIZES {
        let (grid, extent) = generate_heightfield(size, 0.0).unwrap();
        assert!(
            grid.heights().iter().all(|&h| h == CORNER_SEED),
            "size {size} should be flat"
        );
        assert_eq!(extent.min, CORNER_SEED);
        assert_eq!(extent.max, CORNER_SEED);
    }
}

#[test]
fn test_every_cell_written() {
    let (grid, _) = HeightmapGenerator::with_seed(5).generate(33, 0.5).unwrap();
    assert_eq!(grid.heights().len(), 33 * 33);
    assert!(grid.heights().iter().all(|h| h.is_finite()));
}

// ============================================================================
// Extent
// ============================================================================

#[test]
fn test_extent_bounds_and_attained() {
    for seed in 0..8 {
        let (grid, extent) = HeightmapGenerator::with_seed(seed).generate(17, 0.5).unwrap();
        let heights = grid.heights();

        assert!(heights.iter().all(|&h| extent.contains(h)));
        assert!(heights.contains(&extent.min), "min must be an actual cell");
        assert!(heights.contains(&extent.max), "max must be an actual cell");
        assert!(extent.min <= CORNER_SEED && CORNER_SEED <= extent.max);
    }
}

#[test]
fn test_rough_run_is_not_flat() {
    let (_, extent) = HeightmapGenerator::with_seed(9).generate(17, 0.5).unwrap();
    assert!(!extent.is_flat());
}

// ============================================================================
// Toroidal wraparound
// ============================================================================

#[test]
fn test_opposite_borders_match() {
    for seed in 0..4 {
        for size in [3, 5, 9, 17] {
            let (grid, _) = HeightmapGenerator::with_seed(seed)
                .generate(size, 2.0)
                .unwrap();
            let last = size - 1;

            assert_eq!(grid.row(0), grid.row(last), "rows differ, size {size}");
            assert_eq!(grid.column(0), grid.column(last), "columns differ, size {size}");
        }
    }
}

// ============================================================================
// Roughness decay quirk
// ============================================================================

#[test]
fn test_fractional_roughness_pins_after_first_level() {
    // Both default landmass roughness values collapse to the 0.1 floor after one level.
    assert_eq!(decay_roughness(0.1), MIN_ROUGHNESS);
    assert_eq!(decay_roughness(0.5), MIN_ROUGHNESS);
    assert_eq!(decay_roughness(decay_roughness(0.5)), MIN_ROUGHNESS);
}

#[test]
fn test_large_roughness_steps_down() {
    let mut r = 16.0;
    let mut levels = Vec::new();
    for _ in 0..6 {
        r = decay_roughness(r);
        levels.push(r);
    }
    assert_eq!(levels, vec![8.0, 4.0, 2.0, 1.0, MIN_ROUGHNESS, MIN_ROUGHNESS]);
}

// ============================================================================
// Determinism / errors
// ============================================================================

#[test]
fn test_seeded_generation_reproducible() {
    let a = HeightmapGenerator::with_seed(42).generate(17, 0.5).unwrap();
    let b = HeightmapGenerator::with_seed(42).generate(17, 0.5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    let (a, _) = HeightmapGenerator::with_seed(1).generate(17, 0.5).unwrap();
    let (b, _) = HeightmapGenerator::with_seed(2).generate(17, 0.5).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_unusable_roughness_rejected() {
    for roughness in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN, 3.0e38] {
        let result = HeightmapGenerator::with_seed(1).generate(5, roughness);
        assert!(
            matches!(result, Err(TerrainError::InvalidRoughness { .. })),
            "roughness {roughness} should be rejected"
        );
    }
}

#[test]
fn test_huge_finite_roughness_does_not_panic() {
    // Span 2r is still finite; heights may overflow but generation returns.
    let result = HeightmapGenerator::with_seed(1).generate(5, MAX_ROUGHNESS);
    assert!(!matches!(result, Err(TerrainError::InvalidRoughness { .. })));
}

#[test]
fn test_invalid_sizes_rejected() {
    for size in [0, 1, 4, 10, 16] {
        let result = generate_heightfield(size, 0.5);
        assert!(
            matches!(result, Err(TerrainError::InvalidGridSize { size: s }) if s == size),
            "size {size} should be rejected"
        );
    }
}
