//! Sketch constants and runtime configuration defaults

// Surface and frame loop defaults
/// Default surface width in pixels
pub const DEFAULT_WIDTH: u32 = 640;
/// Default surface height in pixels (matches the embed frame height)
pub const DEFAULT_HEIGHT: u32 = 640;
/// Default number of frames rendered by the host
pub const DEFAULT_FRAMES: u64 = 120;
/// Default frame rate used to derive animation time
pub const DEFAULT_FPS: f64 = 60.0;
/// Fixed seed for reproducible sketches
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed surface dimension
pub const MAX_SURFACE_DIMENSION: u32 = 8_192;

/// Background color shared by all modes
pub const BACKGROUND: [u8; 4] = [18, 18, 24, 255];

// Divide-and-conquer art
/// Margin between the surface edge and the root subdivision cell
pub const MARGIN: f64 = 20.0;
/// Cells with a side below this are never split
pub const MIN_CELL_SIZE: f64 = 8.0;
/// Upper bound for any depth budget
pub const MAX_DEPTH: u32 = 12;
/// Depth budget used when auto-depth is off
pub const DEFAULT_MANUAL_DEPTH: u32 = 6;
/// Seconds each depth is shown while auto-depth cycles through the levels
pub const AUTO_DEPTH_SECONDS: f64 = 1.0;
/// Lower clamp for split ratios
pub const SPLIT_RATIO_MIN: f64 = 0.18;
/// Upper clamp for split ratios
pub const SPLIT_RATIO_MAX: f64 = 0.82;
/// Golden-ratio split candidate
pub const GOLDEN_RATIO_SPLIT: f64 = 0.618_033_988_749_895;
/// Maximum total perturbation applied to a blended split ratio
pub const RATIO_JITTER: f64 = 0.08;
/// Aspect ratio beyond which the split axis is forced
pub const ASPECT_FORCE_SPLIT: f64 = 1.6;
/// Gap drawn between sibling cells when gutters are enabled
pub const GUTTER_SIZE: f64 = 4.0;
/// Opacity of the dark wash left visible in gutters
pub const GUTTER_SHADE_ALPHA: f64 = 12.0 / 255.0;
/// Image regions flatter than this brightness deviation become leaves
pub const BRIGHTNESS_STD_THRESHOLD: f64 = 14.0;
/// First recursion level at which early stopping may occur
pub const EARLY_STOP_MIN_LEVEL: u32 = 2;
/// Early stop probability gained per recursion level
pub const EARLY_STOP_SLOPE: f64 = 0.07;
/// Ceiling for the early stop probability
pub const EARLY_STOP_MAX: f64 = 0.6;
/// Spatial frequency of noise lookups in world units
pub const NOISE_SCALE: f64 = 0.006;
/// Depth offset along the noise time axis per recursion level
pub const NOISE_LEVEL_STEP: f64 = 0.37;
/// Width of the noise perturbation of palette lookups
pub const PALETTE_NOISE: f64 = 0.4;
/// Animation time advanced per second of frame time
pub const ANIMATION_SPEED: f64 = 0.25;
/// Octaves summed by the coherent noise source
pub const NOISE_OCTAVES: u32 = 4;
/// Amplitude falloff between noise octaves
pub const NOISE_FALLOFF: f64 = 0.5;

// View transform limits
/// Smallest zoom factor
pub const MIN_SCALE: f64 = 0.1;
/// Largest zoom factor
pub const MAX_SCALE: f64 = 40.0;
/// Wheel delta to zoom exponent conversion
pub const ZOOM_SENSITIVITY: f64 = 0.001;

// Pointer gestures
/// Two presses within this many frames form a double click
pub const DOUBLE_CLICK_FRAMES: u64 = 18;
/// Maximum pointer travel between the presses of a double click
pub const DOUBLE_CLICK_DISTANCE: f64 = 6.0;

// Algorithm modes
/// Number of bars in the binary search array
pub const BINARY_SEARCH_LEN: usize = 32;
/// Frames between binary search steps
pub const BINARY_SEARCH_STEP_FRAMES: u64 = 20;
/// Frames a finished result stays on screen before restarting
pub const RESULT_HOLD_FRAMES: u64 = 90;
/// Number of bars sorted by quicksort
pub const QUICKSORT_LEN: usize = 48;
/// Partition steps performed per frame
pub const QUICKSORT_STEPS_PER_FRAME: usize = 2;
/// Maze rows for the traversal mode
pub const TRAVERSAL_ROWS: usize = 24;
/// Maze columns for the traversal mode
pub const TRAVERSAL_COLS: usize = 32;
/// Probability that a maze cell is a wall
pub const TRAVERSAL_WALL_DENSITY: f64 = 0.28;
/// Frontier expansions per frame
pub const TRAVERSAL_STEPS_PER_FRAME: usize = 2;
/// Pixel size of a Life cell
pub const LIFE_CELL_SIZE: u32 = 10;
/// Frames between Life generations
pub const LIFE_STEP_FRAMES: u64 = 4;
/// Fraction of live cells after randomizing
pub const LIFE_DENSITY: f64 = 0.3;
/// Age gained per generation by a live cell
pub const LIFE_AGE_GAIN: f32 = 0.04;
/// Age kept per generation by a dead cell
pub const LIFE_AGE_DECAY: f32 = 0.965;
/// Brightness of the trail left by dead cells
pub const LIFE_TRAIL: f64 = 0.9;
/// Largest brush radius in cells
pub const LIFE_MAX_BRUSH: u32 = 64;
/// Largest number of generations per step
pub const LIFE_MAX_SPEED: u32 = 64;

// Output settings
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Final GIF frame is held this many times longer
pub const FINAL_FRAME_HOLD: u32 = 25;
