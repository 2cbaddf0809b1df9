//! Height Banding Palettes
//!
//! Splits a heightfield's `[min, max]` into five equal bands and maps each
//! band to a fixed RGB colour.

use serde::{Deserialize, Serialize};

use super::heightmap::HeightExtent;

/// Number of contiguous height bands per palette.
pub const BAND_COUNT: usize = 5;

/// Five colours, lowest band first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
    pub name: &'static str,
    pub bands: [[f32; 3]; BAND_COUNT],
}

/// Blue water, tan beach, light green, green, brown peaks.
pub const EARTH: ColorPalette = ColorPalette {
    name: "earth",
    bands: [
        [0.243, 0.612, 0.788], // Blue
        [0.941, 0.839, 0.686], // Tan
        [0.639, 0.878, 0.424], // Light green
        [0.243, 0.612, 0.118], // Green
        [0.361, 0.282, 0.161], // Brown
    ],
};

/// Purple lowlands rising through tan and reds to orange.
pub const MARS: ColorPalette = ColorPalette {
    name: "mars",
    bands: [
        [0.31, 0.043, 0.859],  // Purple
        [0.772, 0.651, 0.455], // Tan
        [0.91, 0.431, 0.322],  // Light red
        [0.831, 0.165, 0.067], // Red
        [0.929, 0.549, 0.114], // Orange
    ],
};

/// Palette selector used by scene configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    #[default]
    Earth,
    Mars,
}

impl PaletteKind {
    pub fn palette(self) -> &'static ColorPalette {
        match self {
            PaletteKind::Earth => &EARTH,
            PaletteKind::Mars => &MARS,
        }
    }
}

/// Band `floor((h - min) / ((max - min) / 5))`, clamped to `[0, 4]`.
///
/// A flat extent (`max <= min`) puts everything in band 0. Heights outside the
/// extent clamp to the nearest end band.
pub fn band_index(height: f32, extent: &HeightExtent) -> usize {
    if extent.is_flat() {
        return 0;
    }
    let band_width = extent.range() / BAND_COUNT as f32;
    let band = ((height - extent.min) / band_width).floor();
    // NaN and negatives saturate to 0 in the cast
    (band.max(0.0) as usize).min(BAND_COUNT - 1)
}

pub fn pick_color(height: f32, extent: &HeightExtent, palette: &ColorPalette) -> [f32; 3] {
    palette.bands[band_index(height, extent)]
}
