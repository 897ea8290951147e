//! Conway's Game of Life on a toroidal grid
//!
//! Every cell carries an age that grows while it lives and decays after it
//! dies. Live cells take their hue from the age; dead cells fade out as a
//! grey trail.

use crate::host::input::PointerButton;
use crate::io::configuration::{
    BACKGROUND, LIFE_AGE_DECAY, LIFE_AGE_GAIN, LIFE_CELL_SIZE, LIFE_DENSITY, LIFE_MAX_BRUSH,
    LIFE_MAX_SPEED, LIFE_STEP_FRAMES, LIFE_TRAIL,
};
use crate::math::interpolation::lerp_rgba;
use crate::modes::{FrameContext, Visualization};
use crate::render::canvas::Canvas;
use crate::render::palette::hue_color;
use crate::spatial::grid::GridLayout;
use ndarray::{Array2, Zip};
use rand::{Rng, SeedableRng, rngs::StdRng};

const TRAIL_COLOR: [u8; 4] = [255, 255, 255, 255];
// Age given to painted cells that were younger
const PAINTED_AGE: f32 = 0.6;
// (row, col) offsets of a south-east glider
const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Life visualization state
#[derive(Debug)]
pub struct LifeMode {
    rng: StdRng,
    cells: Array2<u8>,
    ages: Array2<f32>,
    layout: GridLayout,
    generation: u64,
    ticks: u64,
    paused: bool,
    stroke: bool,
    pointer: Option<(f64, f64)>,
    brush: u32,
    speed: u32,
}

impl LifeMode {
    /// Random soup filling the surface
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        let layout = GridLayout::cover(width, height, LIFE_CELL_SIZE);
        let dim = (layout.rows(), layout.cols());
        let mut mode = Self {
            rng: StdRng::seed_from_u64(seed),
            cells: Array2::zeros(dim),
            ages: Array2::zeros(dim),
            layout,
            generation: 0,
            ticks: 0,
            paused: false,
            stroke: false,
            pointer: None,
            brush: 0,
            speed: 1,
        };
        mode.randomize();
        mode
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Generations computed since the last randomize or clear
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Brush radius in cells; zero paints a single cell
    pub const fn brush(&self) -> u32 {
        self.brush
    }

    /// Generations computed per step tick
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    pub fn alive(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).is_some_and(|&cell| cell != 0)
    }

    /// Age of a cell in `[0, 1]`, zero outside the grid
    pub fn age(&self, row: usize, col: usize) -> f32 {
        self.ages.get((row, col)).copied().unwrap_or(0.0)
    }

    /// Set a cell; out-of-range cells are ignored
    ///
    /// Newly live cells are at least `PAINTED_AGE` old, killed cells lose
    /// their trail.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = u8::from(alive);
        }
        if let Some(age) = self.ages.get_mut((row, col)) {
            *age = if alive { age.max(PAINTED_AGE) } else { 0.0 };
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Live neighbours of a cell, wrapping around every edge
    pub fn neighbors(&self, row: usize, col: usize) -> u8 {
        let (rows, cols) = (self.rows(), self.cols());
        let mut count = 0;
        for dr in [rows - 1, 0, 1] {
            for dc in [cols - 1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let neighbor = ((row + dr) % rows, (col + dc) % cols);
                count += self.cells.get(neighbor).copied().unwrap_or(0);
            }
        }
        count
    }

    /// Compute the next generation and age every cell
    pub fn step(&mut self) {
        let next = Array2::from_shape_fn(self.cells.dim(), |(row, col)| {
            let neighbors = self.neighbors(row, col);
            u8::from(matches!((self.alive(row, col), neighbors), (true, 2 | 3) | (false, 3)))
        });
        Zip::from(&mut self.ages).and(&next).for_each(|age, &cell| {
            *age = if cell != 0 {
                (*age + LIFE_AGE_GAIN).min(1.0)
            } else {
                *age * LIFE_AGE_DECAY
            };
        });
        self.cells = next;
        self.generation += 1;
    }

    /// Fill the grid with a random soup of middle-aged cells
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        self.ages = Array2::from_shape_fn(self.cells.dim(), |_| {
            if rng.random_bool(LIFE_DENSITY) {
                rng.random_range(0.3..0.8)
            } else {
                0.0
            }
        });
        self.cells = self.ages.mapv(|age| u8::from(age > 0.0));
        self.generation = 0;
        tracing::debug!(live = self.live_count(), "life randomized");
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.ages.fill(0.0);
        self.generation = 0;
    }

    pub const fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Change the brush radius by `delta`, clamped to `0..=LIFE_MAX_BRUSH`
    pub fn adjust_brush(&mut self, delta: i32) {
        self.brush = self.brush.saturating_add_signed(delta).min(LIFE_MAX_BRUSH);
    }

    /// Change the generations per tick by `delta`, clamped to `1..=LIFE_MAX_SPEED`
    pub fn adjust_speed(&mut self, delta: i32) {
        self.speed = self.speed.saturating_add_signed(delta).clamp(1, LIFE_MAX_SPEED);
    }

    /// Set every cell within the brush radius of the cell under `(x, y)`
    pub fn brush_at(&mut self, x: f64, y: f64, alive: bool) {
        let Some((row, col)) = self.layout.cell_at(x, y) else {
            return;
        };
        let radius = i64::from(self.brush);
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr * dr + dc * dc > radius * radius {
                    continue;
                }
                let target = (row as i64 + dr, col as i64 + dc);
                if let (Ok(r), Ok(c)) = (usize::try_from(target.0), usize::try_from(target.1)) {
                    self.set_cell(r, c, alive);
                }
            }
        }
    }

    /// Drop a glider with its bounding box at the cell under the pointer
    ///
    /// Falls back to the grid center before any pointer input. Glider cells
    /// past the grid edge are skipped.
    pub fn place_glider(&mut self) {
        let anchor = self
            .pointer
            .and_then(|(x, y)| self.layout.cell_at(x, y))
            .unwrap_or((self.rows() / 2, self.cols() / 2));
        for (dr, dc) in GLIDER {
            self.set_cell(anchor.0 + dr, anchor.1 + dc, true);
        }
    }
}

/// Fill of a cell: hue from the age while alive, a fading grey trail once dead
///
/// `None` when a dead cell's trail has faded below one color step.
pub fn cell_color(alive: bool, age: f32) -> Option<[u8; 4]> {
    if alive {
        return Some(hue_color(f64::from(age)));
    }
    let brightness = LIFE_TRAIL * f64::from(age.max(0.0)).powf(0.9);
    (brightness * 255.0 >= 0.5).then(|| lerp_rgba(BACKGROUND, TRAIL_COLOR, brightness))
}

impl Visualization for LifeMode {
    fn name(&self) -> &'static str {
        "game of life"
    }

    fn help(&self) -> &'static str {
        "p pause  n step  c clear  g glider  [ ] brush  < > speed  right drag erases"
    }

    fn update(&mut self, _ctx: &FrameContext<'_>) {
        if self.paused {
            return;
        }
        self.ticks += 1;
        if self.ticks >= LIFE_STEP_FRAMES {
            self.ticks = 0;
            for _ in 0..self.speed {
                self.step();
            }
        }
    }

    fn render(&self, canvas: &mut Canvas, _ctx: &FrameContext<'_>) {
        canvas.clear(BACKGROUND);
        for ((row, col), &cell) in self.cells.indexed_iter() {
            if let Some(color) = cell_color(cell != 0, self.age(row, col)) {
                canvas.fill_rect(&self.layout.cell_rect(row, col).inset(0.5), color);
            }
        }
    }

    /// Keep the cell size, grow or shrink the grid and carry over the overlap
    fn on_resize(&mut self, width: u32, height: u32) {
        self.layout = GridLayout::cover(width, height, LIFE_CELL_SIZE);
        let dim = (self.layout.rows(), self.layout.cols());
        let cells = Array2::from_shape_fn(dim, |index| self.cells.get(index).copied().unwrap_or(0));
        let ages = Array2::from_shape_fn(dim, |index| self.ages.get(index).copied().unwrap_or(0.0));
        self.cells = cells;
        self.ages = ages;
    }

    fn on_key(&mut self, key: char) -> bool {
        match key {
            'p' | ' ' => self.toggle_pause(),
            'n' => self.step(),
            'c' => self.clear(),
            'g' => self.place_glider(),
            '[' => self.adjust_brush(-1),
            ']' => self.adjust_brush(1),
            ',' | '<' => self.adjust_speed(-1),
            '.' | '>' => self.adjust_speed(1),
            _ => return false,
        }
        true
    }

    fn on_pointer_pressed(&mut self, x: f64, y: f64, button: PointerButton) {
        self.pointer = Some((x, y));
        self.stroke = true;
        self.brush_at(x, y, button == PointerButton::Primary);
    }

    fn on_pointer_dragged(&mut self, x: f64, y: f64, button: PointerButton) {
        self.pointer = Some((x, y));
        if self.stroke {
            self.brush_at(x, y, button == PointerButton::Primary);
        }
    }

    fn on_pointer_released(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
        self.stroke = false;
    }
}
