//! Optional image sample used by the art mode, and PNG export of frames

use crate::io::error::{Result, SketchError, file_error};
use crate::math::interpolation::lerp;
use crate::render::palette::luminance;
use image::RgbaImage;
use std::path::Path;

/// Grid samples per axis for the brightness deviation of a region
const BRIGHTNESS_SAMPLES: u32 = 14;
/// Grid samples per axis for the average color of a region
///
/// Odd so that single-pixel stripes do not land every sample on one phase.
const COLOR_SAMPLES: u32 = 15;

/// Read-only bitmap sampled for local brightness variation and average color
///
/// Regions are addressed in normalized `[0, 1]` coordinates so the sample can
/// be stretched over any subdivision root.
#[derive(Debug, Clone)]
pub struct ImageSample {
    image: RgbaImage,
}

/// Running statistics over the sampled pixels of a region
#[derive(Debug, Clone, Copy, Default)]
struct RegionStats {
    count: u32,
    sum: [f64; 3],
    luma_sum: f64,
    luma_sq_sum: f64,
}

impl ImageSample {
    /// Load a bitmap from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|source| SketchError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        Ok(Self::from_image(image))
    }

    /// Wrap an in-memory bitmap
    pub const fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Standard deviation of brightness (0..255 scale) over a normalized region
    pub fn brightness_std(&self, u0: f64, v0: f64, u1: f64, v1: f64) -> f64 {
        let stats = self.region_stats((u0, v0, u1, v1), BRIGHTNESS_SAMPLES);
        if stats.count == 0 {
            return 0.0;
        }
        let n = f64::from(stats.count);
        let mean = stats.luma_sum / n;
        (stats.luma_sq_sum / n - mean * mean).max(0.0).sqrt()
    }

    /// Average opaque color over a normalized region
    pub fn average_color(&self, u0: f64, v0: f64, u1: f64, v1: f64) -> [u8; 4] {
        let stats = self.region_stats((u0, v0, u1, v1), COLOR_SAMPLES);
        if stats.count == 0 {
            return [0, 0, 0, 255];
        }
        let n = f64::from(stats.count);
        let [r, g, b] = stats.sum.map(|channel| (channel / n).round().clamp(0.0, 255.0) as u8);
        [r, g, b, 255]
    }

    // Samples the centers of a `samples` x `samples` grid laid over the region
    fn region_stats(&self, region: (f64, f64, f64, f64), samples: u32) -> RegionStats {
        let (width, height) = self.image.dimensions();
        let mut stats = RegionStats::default();
        if width == 0 || height == 0 {
            return stats;
        }

        let (u0, v0, u1, v1) = region;
        let (u0, u1) = ordered(u0, u1);
        let (v0, v1) = ordered(v0, v1);
        let center = |index: u32| (f64::from(index) + 0.5) / f64::from(samples);

        for j in 0..samples {
            let y = pixel_at(lerp(v0, v1, center(j)), height);
            for i in 0..samples {
                let x = pixel_at(lerp(u0, u1, center(i)), width);
                let color = self.image.get_pixel(x, y).0;
                let [r, g, b, _] = color;
                let luma = luminance(color);
                stats.count += 1;
                stats.sum[0] += f64::from(r);
                stats.sum[1] += f64::from(g);
                stats.sum[2] += f64::from(b);
                stats.luma_sum += luma;
                stats.luma_sq_sum += luma * luma;
            }
        }
        stats
    }
}

// Normalized interval with non-finite bounds mapped to zero, smaller bound first
fn ordered(start: f64, end: f64) -> (f64, f64) {
    let normalize = |value: f64| if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    let (start, end) = (normalize(start), normalize(end));
    if start <= end { (start, end) } else { (end, start) }
}

// Pixel index containing a normalized coordinate, for a non-empty extent
fn pixel_at(position: f64, extent: u32) -> u32 {
    ((position * f64::from(extent)).floor() as u32).min(extent - 1)
}

/// Save a rendered frame as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_error(parent, "create directory"))?;
    }

    image
        .save(output_path)
        .map_err(|e| SketchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
