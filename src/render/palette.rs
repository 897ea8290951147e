//! Named five-color palettes and continuous lookup between their stops

use crate::math::interpolation::{lerp_rgba, segment};

/// Ordered five-stop color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Display name
    pub name: &'static str,
    /// Stops from `t = 0` to `t = 1`
    pub colors: [[u8; 4]; 5],
}

/// Fixed set of palettes cycled by the art mode
pub static PALETTES: [Palette; 5] = [
    Palette {
        name: "ember",
        colors: [
            [37, 17, 41, 255],
            [115, 28, 60, 255],
            [203, 64, 55, 255],
            [240, 142, 64, 255],
            [250, 222, 140, 255],
        ],
    },
    Palette {
        name: "lagoon",
        colors: [
            [8, 29, 59, 255],
            [19, 84, 122, 255],
            [37, 150, 160, 255],
            [126, 206, 190, 255],
            [232, 246, 222, 255],
        ],
    },
    Palette {
        name: "meadow",
        colors: [
            [32, 44, 28, 255],
            [70, 104, 52, 255],
            [142, 164, 74, 255],
            [222, 204, 118, 255],
            [246, 238, 205, 255],
        ],
    },
    Palette {
        name: "dusk",
        colors: [
            [24, 22, 54, 255],
            [74, 52, 116, 255],
            [158, 84, 146, 255],
            [232, 130, 136, 255],
            [253, 206, 170, 255],
        ],
    },
    Palette {
        name: "ink",
        colors: [
            [20, 20, 22, 255],
            [72, 72, 78, 255],
            [138, 138, 140, 255],
            [204, 200, 190, 255],
            [244, 240, 228, 255],
        ],
    },
];

impl Palette {
    /// Palette at `index`, wrapping around the fixed set
    pub fn by_index(index: usize) -> &'static Self {
        let wrapped = index % PALETTES.len();
        PALETTES.get(wrapped).unwrap_or(&PALETTES[0])
    }

    /// Number of available palettes
    pub fn count() -> usize {
        PALETTES.len()
    }

    /// Continuous color at `t` in `[0, 1]`, blending adjacent stops
    pub fn interpolate(&self, t: f64) -> [u8; 4] {
        let t = if t.is_finite() { t } else { 0.0 };
        let (index, fraction) = segment(t, self.colors.len());
        let low = self.colors.get(index).copied().unwrap_or([0, 0, 0, 255]);
        let high = self.colors.get(index + 1).copied().unwrap_or(low);
        lerp_rgba(low, high, fraction)
    }
}

/// Perceived brightness of a color in `[0, 255]` (Rec. 601 weights)
pub fn luminance(color: [u8; 4]) -> f64 {
    let [r, g, b, _] = color;
    0.114f64.mul_add(
        f64::from(b),
        0.299f64.mul_add(f64::from(r), 0.587 * f64::from(g)),
    )
}

/// Dark or light ink that stays readable on top of `color`
pub fn contrast_color(color: [u8; 4]) -> [u8; 4] {
    if luminance(color) > 140.0 {
        [24, 22, 28, 255]
    } else {
        [240, 236, 228, 255]
    }
}

/// Opaque color from a hue turn in `[0, 1)` at full saturation and brightness
///
/// Hues outside the unit range wrap; a non-finite hue is treated as red.
pub fn hue_color(hue: f64) -> [u8; 4] {
    let hue = if hue.is_finite() { hue.rem_euclid(1.0) } else { 0.0 };
    let sector = hue * 6.0;
    let rising = sector.fract();
    let channel = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;
    let (r, g, b) = match sector.floor() as u32 {
        0 => (1.0, rising, 0.0),
        1 => (1.0 - rising, 1.0, 0.0),
        2 => (0.0, 1.0, rising),
        3 => (0.0, 1.0 - rising, 1.0),
        4 => (rising, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - rising),
    };
    [channel(r), channel(g), channel(b), 255]
}
