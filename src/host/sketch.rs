//! Owned application context driven by the frame loop

use crate::host::input::{ClickTracker, InputEvent, InputScript};
use crate::io::configuration::MAX_SURFACE_DIMENSION;
use crate::io::image::ImageSample;
use crate::modes::{FrameContext, Mode, ModeKind};
use crate::render::canvas::Canvas;
use crate::render::overlay::draw_help;
use image::RgbaImage;

const GLOBAL_HELP: &str = "1-5 modes  h help  r reset";
// Odd multiplier spreading successive reset counts across the seed space
const RESET_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// The running sketch: active mode, surface and input state
///
/// Each frame applies the frame's input events, then updates and renders the
/// active mode once. Switching modes rebuilds the mode from the sketch seed and
/// discards the previous state. `h` and `r` are handled here for every mode:
/// the first toggles the help band, the second rebuilds the current mode from
/// a fresh seed.
#[derive(Debug)]
pub struct Sketch {
    width: u32,
    height: u32,
    seed: u64,
    fps: f64,
    frame: u64,
    mode: Mode,
    canvas: Canvas,
    image: Option<ImageSample>,
    clicks: ClickTracker,
    show_help: bool,
    resets: u64,
}

impl Sketch {
    /// Start a sketch in `kind` on a `width x height` surface
    ///
    /// Dimensions are clamped to `1..=MAX_SURFACE_DIMENSION`; a non-positive
    /// or non-finite `fps` falls back to one frame per second.
    pub fn new(kind: ModeKind, seed: u64, width: u32, height: u32, fps: f64) -> Self {
        let (width, height) = clamp_surface(width, height);
        Self {
            width,
            height,
            seed,
            fps: if fps.is_finite() && fps > 0.0 { fps } else { 1.0 },
            frame: 0,
            mode: Mode::new(kind, seed, width, height),
            canvas: Canvas::new(width, height),
            image: None,
            clicks: ClickTracker::new(),
            show_help: false,
            resets: 0,
        }
    }

    /// Attach the optional image sample used by the art mode
    #[must_use]
    pub fn with_image(mut self, image: Option<ImageSample>) -> Self {
        self.image = image;
        self
    }

    /// Start with the help band shown
    #[must_use]
    pub const fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    /// Number of `r` resets so far
    pub const fn resets(&self) -> u64 {
        self.resets
    }

    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    pub const fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    pub const fn kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Index of the next frame to run
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub const fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Last rendered frame
    pub const fn image(&self) -> &RgbaImage {
        self.canvas.image()
    }

    /// Replace the active mode with a fresh one
    pub fn switch_mode(&mut self, kind: ModeKind) {
        self.mode = Mode::new(kind, self.seed, self.width, self.height);
        self.clicks.reset();
        tracing::debug!(mode = self.mode.visualization().name(), "mode switched");
    }

    /// Rebuild the current mode from a seed derived from the reset count
    pub fn reset_mode(&mut self) {
        self.resets += 1;
        let seed = self.seed ^ self.resets.wrapping_mul(RESET_SEED_STEP);
        self.mode = Mode::new(self.kind(), seed, self.width, self.height);
        self.clicks.reset();
        tracing::debug!(mode = self.mode.visualization().name(), seed, "mode reset");
    }

    /// Change the surface size and let the mode relayout
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = clamp_surface(width, height);
        self.width = width;
        self.height = height;
        self.canvas.resize(width, height);
        self.mode.visualization_mut().on_resize(width, height);
        tracing::debug!(width, height, "surface resized");
    }

    /// Apply one input event
    ///
    /// Digit keys select modes and `h`/`r` are global; other keys go to the mode.
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::PointerPressed { x, y, button } => {
                let double = self.clicks.press(self.frame, x, y);
                let mode = self.mode.visualization_mut();
                mode.on_pointer_pressed(x, y, button);
                if double {
                    mode.on_double_click(x, y);
                }
            }
            InputEvent::PointerDragged { x, y, button } => {
                self.mode.visualization_mut().on_pointer_dragged(x, y, button);
            }
            InputEvent::PointerReleased { x, y } => {
                self.mode.visualization_mut().on_pointer_released(x, y);
            }
            InputEvent::Wheel { x, y, delta } => {
                self.mode.visualization_mut().on_wheel(x, y, delta);
            }
            InputEvent::DoubleClick { x, y } => self.mode.visualization_mut().on_double_click(x, y),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    fn handle_key(&mut self, key: char) {
        if let Some(kind) = ModeKind::from_key(key) {
            self.switch_mode(kind);
            return;
        }
        match key {
            'h' => self.show_help = !self.show_help,
            'r' => self.reset_mode(),
            _ => {
                if !self.mode.visualization_mut().on_key(key) {
                    tracing::trace!(%key, "key ignored");
                }
            }
        }
    }

    /// Apply every event the script schedules for the current frame
    pub fn apply_script(&mut self, script: &InputScript) {
        for event in script.events_at(self.frame) {
            self.handle(event);
        }
    }

    /// Run one update-then-render pass and return the rendered frame
    pub fn advance(&mut self) -> &RgbaImage {
        let context = FrameContext {
            frame: self.frame,
            elapsed: self.frame as f64 / self.fps,
            delta: 1.0 / self.fps,
            width: self.width,
            height: self.height,
            image: self.image.as_ref(),
        };
        self.mode.visualization_mut().update(&context);
        let mode = self.mode.visualization();
        mode.render(&mut self.canvas, &context);
        if self.show_help {
            let heading = format!("{} {}  {GLOBAL_HELP}", self.kind().key(), mode.name());
            draw_help(&mut self.canvas, &[heading.as_str(), mode.help()]);
        }
        self.frame += 1;
        self.canvas.image()
    }

    /// Apply the frame's scripted events, then advance
    pub fn run_frame(&mut self, script: &InputScript) -> &RgbaImage {
        self.apply_script(script);
        self.advance()
    }
}

fn clamp_surface(width: u32, height: u32) -> (u32, u32) {
    (
        width.clamp(1, MAX_SURFACE_DIMENSION),
        height.clamp(1, MAX_SURFACE_DIMENSION),
    )
}
