//! Visualization modes and the hooks the frame loop drives
//!
//! Every mode implements [`Visualization`]; only `name` and `render` are
//! required, the other hooks default to no-ops. [`Mode`] is the tagged union
//! the host holds, rebuilt from scratch whenever the mode changes.

/// Binary search over a sorted array
pub mod binary_search;
/// Conway's Game of Life
pub mod life;
/// Step-by-step quicksort
pub mod quicksort;
/// Breadth-first and depth-first maze traversal
pub mod traversal;

use crate::art::ArtMode;
use crate::host::input::PointerButton;
use crate::io::configuration::MARGIN;
use crate::io::image::ImageSample;
use crate::render::canvas::Canvas;
use crate::spatial::rect::Rect;
use binary_search::BinarySearchMode;
use life::LifeMode;
use quicksort::QuicksortMode;
use traversal::TraversalMode;

/// Per-frame values handed to every hook of a frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Frame index, starting at zero
    pub frame: u64,
    /// Seconds since the sketch started
    pub elapsed: f64,
    /// Seconds covered by this frame
    pub delta: f64,
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Optional image sample, loaded once before the loop
    pub image: Option<&'a ImageSample>,
}

/// Hooks shared by all visualization modes
pub trait Visualization {
    /// Human readable mode name
    fn name(&self) -> &'static str;

    /// Key summary shown in the help overlay
    fn help(&self) -> &'static str {
        ""
    }

    /// Advance the mode by one frame
    fn update(&mut self, _ctx: &FrameContext<'_>) {}

    /// Draw the current state
    fn render(&self, canvas: &mut Canvas, ctx: &FrameContext<'_>);

    /// Recompute layout for a new surface size
    fn on_resize(&mut self, _width: u32, _height: u32) {}

    /// Handle a key press; returns whether the key was recognized
    fn on_key(&mut self, _key: char) -> bool {
        false
    }

    fn on_pointer_pressed(&mut self, _x: f64, _y: f64, _button: PointerButton) {}

    fn on_pointer_dragged(&mut self, _x: f64, _y: f64, _button: PointerButton) {}

    fn on_pointer_released(&mut self, _x: f64, _y: f64) {}

    /// Wheel input at a surface point; positive deltas scroll down
    fn on_wheel(&mut self, _x: f64, _y: f64, _delta: f64) {}

    fn on_double_click(&mut self, _x: f64, _y: f64) {}
}

/// Kind of visualization, used for selection by key or CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ModeKind {
    /// Binary search over a sorted array
    BinarySearch,
    /// Step-by-step quicksort
    Quicksort,
    /// BFS/DFS maze traversal
    Traversal,
    /// Conway's Game of Life
    Life,
    /// Divide-and-conquer generative art
    Art,
}

impl ModeKind {
    /// Every kind, in selection-key order
    pub const ALL: [Self; 5] = [
        Self::BinarySearch,
        Self::Quicksort,
        Self::Traversal,
        Self::Life,
        Self::Art,
    ];

    /// Kind selected by a digit key `1`..`5`
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::BinarySearch),
            '2' => Some(Self::Quicksort),
            '3' => Some(Self::Traversal),
            '4' => Some(Self::Life),
            '5' => Some(Self::Art),
            _ => None,
        }
    }

    /// Digit key that selects this kind
    pub const fn key(self) -> char {
        match self {
            Self::BinarySearch => '1',
            Self::Quicksort => '2',
            Self::Traversal => '3',
            Self::Life => '4',
            Self::Art => '5',
        }
    }
}

/// Region shared by the bar-chart modes: the surface minus a margin and a label band
pub fn bar_area(width: u32, height: u32) -> Rect {
    let area = Rect::from_surface(width, height, MARGIN);
    let band = (area.height * 0.15).min(LABEL_BAND);
    Rect::new(area.x, area.y + band, area.width, area.height - band)
}

const LABEL_BAND: f64 = 28.0;

/// Rectangle of bar `index` out of `count`, with height proportional to `value / max`
pub fn bar_rect(area: &Rect, index: usize, count: usize, value: u32, max: u32) -> Rect {
    let count = count.max(1);
    let slot = area.width / count as f64;
    let gap = (slot * 0.15).min(3.0);
    let height = area.height * f64::from(value) / f64::from(max.max(1));
    Rect::new(
        (index as f64).mul_add(slot, area.x) + gap / 2.0,
        area.bottom() - height,
        slot - gap,
        height,
    )
}

/// Active visualization with its state
#[derive(Debug)]
pub enum Mode {
    /// Binary search state
    BinarySearch(BinarySearchMode),
    /// Quicksort state
    Quicksort(QuicksortMode),
    /// Traversal state
    Traversal(TraversalMode),
    /// Life state
    Life(LifeMode),
    /// Art state
    Art(Box<ArtMode>),
}

impl Mode {
    /// Build a fresh mode of the given kind for a surface
    pub fn new(kind: ModeKind, seed: u64, width: u32, height: u32) -> Self {
        match kind {
            ModeKind::BinarySearch => {
                Self::BinarySearch(BinarySearchMode::new(seed, width, height))
            }
            ModeKind::Quicksort => Self::Quicksort(QuicksortMode::new(seed, width, height)),
            ModeKind::Traversal => Self::Traversal(TraversalMode::new(seed, width, height)),
            ModeKind::Life => Self::Life(LifeMode::new(seed, width, height)),
            ModeKind::Art => Self::Art(Box::new(ArtMode::new(seed, width, height))),
        }
    }

    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::BinarySearch(_) => ModeKind::BinarySearch,
            Self::Quicksort(_) => ModeKind::Quicksort,
            Self::Traversal(_) => ModeKind::Traversal,
            Self::Life(_) => ModeKind::Life,
            Self::Art(_) => ModeKind::Art,
        }
    }

    /// Borrow the active variant through the shared hooks
    pub fn visualization(&self) -> &dyn Visualization {
        match self {
            Self::BinarySearch(mode) => mode,
            Self::Quicksort(mode) => mode,
            Self::Traversal(mode) => mode,
            Self::Life(mode) => mode,
            Self::Art(mode) => mode.as_ref(),
        }
    }

    /// Mutably borrow the active variant through the shared hooks
    pub fn visualization_mut(&mut self) -> &mut dyn Visualization {
        match self {
            Self::BinarySearch(mode) => mode,
            Self::Quicksort(mode) => mode,
            Self::Traversal(mode) => mode,
            Self::Life(mode) => mode,
            Self::Art(mode) => mode.as_mut(),
        }
    }
}
