//! Divide-and-conquer generative art mode
//!
//! Each frame the root region is subdivided afresh from the noise field and
//! the current settings; no tree survives between frames. Drag pans, the wheel
//! zooms about the pointer and a double click resets the view. With automatic
//! depth the budget climbs one level per second and wraps.

/// Leaf coloring, patterns and decorations
pub mod leaf;
/// Toggles and key commands
pub mod settings;
/// Recursive region subdivision
pub mod subdivider;

use crate::host::input::PointerButton;
use crate::io::configuration::{ANIMATION_SPEED, BACKGROUND, GUTTER_SHADE_ALPHA, MARGIN};
use crate::io::image::ImageSample;
use crate::math::noise::ValueNoise;
use crate::modes::{FrameContext, Visualization};
use crate::render::canvas::Canvas;
use crate::spatial::rect::Rect;
use crate::spatial::view::ViewTransform;
use leaf::{Decorations, LeafPainter};
use rand::{Rng, SeedableRng, rngs::StdRng};
use settings::{ArtCommand, ArtSettings};
use subdivider::{Leaf, SubdivisionParams, Subdivider};

/// State of the generative art mode
#[derive(Debug)]
pub struct ArtMode {
    settings: ArtSettings,
    noise: ValueNoise,
    rng: StdRng,
    view: ViewTransform,
    root: Rect,
    time: f64,
    clock: f64,
}

impl ArtMode {
    /// Create the mode for a surface, deriving the noise seed from `seed`
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = ValueNoise::new(rng.random());
        Self {
            settings: ArtSettings::default(),
            noise,
            rng,
            view: ViewTransform::new(),
            root: Rect::from_surface(width, height, MARGIN),
            time: 0.0,
            clock: 0.0,
        }
    }

    pub const fn settings(&self) -> &ArtSettings {
        &self.settings
    }

    pub const fn settings_mut(&mut self) -> &mut ArtSettings {
        &mut self.settings
    }

    pub const fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Root region in world coordinates
    pub const fn root(&self) -> Rect {
        self.root
    }

    /// Current noise time
    pub const fn time(&self) -> f64 {
        self.time
    }

    pub const fn noise_seed(&self) -> u64 {
        self.noise.seed()
    }

    /// Replace the noise field with one from a freshly drawn seed
    pub fn reseed(&mut self) {
        self.noise = ValueNoise::new(self.rng.random());
        tracing::debug!(seed = self.noise.seed(), "art noise reseeded");
    }

    /// Seconds of running time seen by the last update
    pub const fn clock(&self) -> f64 {
        self.clock
    }

    /// Depth budget of the current frame
    pub fn max_depth(&self) -> u32 {
        self.settings.depth_for(&self.root, self.clock)
    }

    fn params(&self) -> SubdivisionParams {
        SubdivisionParams {
            quad: self.settings.quad,
            max_depth: self.max_depth(),
            gutter: self.settings.gutter_size(),
            time: self.time,
            image_mode: self.settings.image_mode,
        }
    }

    /// Leaves of the current frame
    pub fn leaves(&self, image: Option<&ImageSample>) -> Vec<Leaf> {
        Subdivider::new(&self.noise, self.root, self.params())
            .with_sample(image)
            .leaves()
    }

    /// Painter configured for the current frame
    pub fn painter<'a>(&'a self, image: Option<&'a ImageSample>) -> LeafPainter<'a> {
        let decorations = Decorations {
            patterns: self.settings.patterns,
            outline: self.settings.outline,
            labels: self.settings.labels,
            image_colors: self.settings.fills_from_image(),
        };
        LeafPainter::new(
            &self.noise,
            self.settings.palette(),
            self.root,
            self.settings.depth_limit(&self.root),
            self.time,
            decorations,
        )
        .with_sample(image)
    }
}

impl Visualization for ArtMode {
    fn name(&self) -> &'static str {
        "divide and conquer"
    }

    fn help(&self) -> &'static str {
        "q quad  p palette  a animate  d auto depth  +- depth  g gutter  o outline  \
         t patterns  l labels  i image  c image colors  s reseed  v view"
    }

    fn update(&mut self, ctx: &FrameContext<'_>) {
        if ctx.elapsed.is_finite() {
            self.clock = ctx.elapsed.max(0.0);
        }
        if self.settings.animate && ctx.delta.is_finite() && ctx.delta > 0.0 {
            self.time += ctx.delta * ANIMATION_SPEED;
        }
    }

    fn render(&self, canvas: &mut Canvas, ctx: &FrameContext<'_>) {
        canvas.clear(BACKGROUND);
        if self.settings.gutter {
            // Leaves cover everything but the gutters
            let root = self.view.rect_to_screen(&self.root);
            canvas.shade_rect(&root, [0, 0, 0, 255], GUTTER_SHADE_ALPHA);
        }
        let painter = self.painter(ctx.image);
        for leaf in self.leaves(ctx.image) {
            painter.paint(canvas, &leaf, &self.view);
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.root = Rect::from_surface(width, height, MARGIN);
    }

    fn on_key(&mut self, key: char) -> bool {
        let Some(command) = ArtCommand::from_key(key) else {
            return false;
        };
        match command {
            ArtCommand::Reseed => self.reseed(),
            ArtCommand::ResetView => self.view.reset(),
            _ => {
                self.settings.apply(command);
            }
        }
        tracing::debug!(?command, "art command");
        true
    }

    fn on_pointer_pressed(&mut self, x: f64, y: f64, _button: PointerButton) {
        self.view.begin_drag(x, y);
    }

    fn on_pointer_dragged(&mut self, x: f64, y: f64, _button: PointerButton) {
        self.view.drag_to(x, y);
    }

    fn on_pointer_released(&mut self, x: f64, y: f64) {
        self.view.drag_to(x, y);
        self.view.end_drag();
    }

    fn on_wheel(&mut self, x: f64, y: f64, delta: f64) {
        self.view.zoom_at(x, y, delta);
    }

    fn on_double_click(&mut self, _x: f64, _y: f64) {
        self.view.reset();
    }
}
