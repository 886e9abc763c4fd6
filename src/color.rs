use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: group key → Color32
// ---------------------------------------------------------------------------

/// Maps the group keys of one chart dimension (seasons, hours) to distinct
/// colours, assigned in the order the keys are given.
#[derive(Debug, Clone)]
pub struct ColorMap<K: Ord> {
    mapping: BTreeMap<K, Color32>,
    default_color: Color32,
}

impl<K: Ord + Copy> ColorMap<K> {
    /// Build a colour map with one evenly spaced hue per key.
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let keys: Vec<K> = keys.into_iter().collect();
        let palette = generate_palette(keys.len());
        let mapping: BTreeMap<K, Color32> = keys.into_iter().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a key.
    pub fn color_for(&self, key: K) -> Color32 {
        self.mapping.get(&key).copied().unwrap_or(self.default_color)
    }
}
