//! Frame capture and GIF export of a sketch run

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SketchError, file_error, invalid_parameter};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Collects rendered frames for an animated GIF
///
/// Frame skipping is decided up front: if the requested frame delay is below
/// what viewers reliably display, only every `skip_factor`-th frame is kept and
/// shown for the viewer minimum, which preserves the apparent animation speed.
/// The most recent skipped frame is retained so the animation always ends on
/// the final state.
pub struct FrameRecorder {
    frames: Vec<RgbaImage>,
    pending_last: Option<RgbaImage>,
    recorded: usize,
    delay_ms: u32,
    skip_factor: usize,
}

impl FrameRecorder {
    /// Recorder for frames produced every `frame_delay_ms` milliseconds
    pub fn new(frame_delay_ms: u32) -> Self {
        let frame_delay_ms = frame_delay_ms.max(1);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        Self {
            frames: Vec::new(),
            pending_last: None,
            recorded: 0,
            delay_ms: frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS),
            skip_factor: skip_factor as usize,
        }
    }

    /// Recorder matching a frame rate
    pub fn from_fps(fps: f64) -> Self {
        let delay = if fps.is_finite() && fps > 0.0 {
            (1000.0 / fps).round().clamp(1.0, f64::from(u32::MAX)) as u32
        } else {
            VIEWER_MIN_FRAME_DELAY_MS
        };
        Self::new(delay)
    }

    /// Offer a frame; it is kept or skipped according to the skip factor
    pub fn record(&mut self, frame: &RgbaImage) {
        if self.recorded % self.skip_factor == 0 {
            self.frames.push(frame.clone());
            self.pending_last = None;
        } else {
            self.pending_last = Some(frame.clone());
        }
        self.recorded += 1;
    }

    /// Number of frames that will be written, excluding the final hold
    pub fn frame_count(&self) -> usize {
        self.frames.len() + usize::from(self.pending_last.is_some())
    }

    pub const fn skip_factor(&self) -> usize {
        self.skip_factor
    }

    /// Delay between written frames
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Export the captured frames as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        let last = self
            .pending_last
            .as_ref()
            .or_else(|| self.frames.last())
            .ok_or_else(|| {
                invalid_parameter(
                    "gif",
                    &output_path.display(),
                    &"no frames were recorded",
                )
            })?;

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .chain(self.pending_last.iter())
            .map(|image| to_frame(image.clone(), self.delay_ms))
            .collect();

        // Final frame displays longer for better visibility
        frames.push(to_frame(
            last.clone(),
            self.delay_ms.saturating_mul(FINAL_FRAME_HOLD),
        ));

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(file_error(parent, "create directory"))?;
        }

        let file =
            std::fs::File::create(output_path).map_err(file_error(output_path, "create file"))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SketchError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}

fn to_frame(image: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}
