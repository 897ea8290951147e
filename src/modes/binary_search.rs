//! Binary search over a sorted array, one midpoint at a time

use crate::io::configuration::{
    BACKGROUND, BINARY_SEARCH_LEN, BINARY_SEARCH_STEP_FRAMES, RESULT_HOLD_FRAMES,
};
use crate::modes::{FrameContext, Visualization, bar_area, bar_rect};
use crate::render::canvas::Canvas;
use crate::render::font::draw_number;
use crate::spatial::rect::Rect;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cmp::Ordering;

/// Largest value drawn into the array
pub const MAX_VALUE: u32 = 99;
/// Share of targets picked from the array rather than from the gaps
const PRESENT_TARGET_CHANCE: f64 = 0.7;

const OUTSIDE_COLOR: [u8; 4] = [58, 60, 72, 255];
const WINDOW_COLOR: [u8; 4] = [86, 132, 214, 255];
const MIDPOINT_COLOR: [u8; 4] = [240, 160, 60, 255];
const FOUND_COLOR: [u8; 4] = [92, 200, 120, 255];
const TARGET_COLOR: [u8; 4] = [230, 84, 84, 255];
const LABEL_COLOR: [u8; 4] = [220, 220, 228, 255];

/// Result of a finished search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// Target sits at this index
    Found(usize),
    /// Target is not in the array
    Absent,
}

/// Binary search visualization state
#[derive(Debug)]
pub struct BinarySearchMode {
    rng: StdRng,
    values: Vec<u32>,
    target: u32,
    lo: usize,
    hi: usize,
    midpoints: Vec<usize>,
    outcome: Option<SearchOutcome>,
    ticks: u64,
    area: Rect,
}

impl BinarySearchMode {
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        let mut mode = Self {
            rng: StdRng::seed_from_u64(seed),
            values: Vec::new(),
            target: 0,
            lo: 0,
            hi: 0,
            midpoints: Vec::new(),
            outcome: None,
            ticks: 0,
            area: bar_area(width, height),
        };
        mode.regenerate();
        mode
    }

    /// Sorted, distinct values being searched
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Half-open index window still under consideration
    pub const fn window(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    /// Midpoints compared so far, in order
    pub fn midpoints(&self) -> &[usize] {
        &self.midpoints
    }

    pub const fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Draw a new sorted array and a new target
    pub fn regenerate(&mut self) {
        let count = BINARY_SEARCH_LEN.min(MAX_VALUE as usize);
        let mut values: Vec<u32> =
            rand::seq::index::sample(&mut self.rng, MAX_VALUE as usize, count)
                .into_iter()
                .map(|index| index as u32 + 1)
                .collect();
        values.sort_unstable();
        self.values = values;
        self.choose_target();
    }

    /// Pick a new target, usually one that is present
    pub fn choose_target(&mut self) {
        let present = self.rng.random_bool(PRESENT_TARGET_CHANCE);
        let target = if present && !self.values.is_empty() {
            let index = self.rng.random_range(0..self.values.len());
            self.values.get(index).copied().unwrap_or(0)
        } else {
            // Zero is below every value, so it is a guaranteed miss
            (0..8)
                .map(|_| self.rng.random_range(1..=MAX_VALUE))
                .find(|candidate| self.values.binary_search(candidate).is_err())
                .unwrap_or(0)
        };
        self.set_target(target);
    }

    /// Restart the search for a specific target
    pub fn set_target(&mut self, target: u32) {
        self.target = target;
        self.lo = 0;
        self.hi = self.values.len();
        self.midpoints.clear();
        self.outcome = None;
        self.ticks = 0;
        tracing::debug!(target, "binary search restarted");
    }

    /// Compare one midpoint; returns the outcome once the search has finished
    pub fn step(&mut self) -> Option<SearchOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        if self.lo >= self.hi {
            self.outcome = Some(SearchOutcome::Absent);
            return self.outcome;
        }

        let mid = self.lo + (self.hi - self.lo) / 2;
        self.midpoints.push(mid);
        match self.values.get(mid).map(|value| value.cmp(&self.target)) {
            Some(Ordering::Equal) => self.outcome = Some(SearchOutcome::Found(mid)),
            Some(Ordering::Less) => self.lo = mid + 1,
            Some(Ordering::Greater) | None => self.hi = mid,
        }
        self.outcome
    }

    /// Step until the search finishes
    pub fn run_to_completion(&mut self) -> SearchOutcome {
        // Each comparison at least halves the window, plus one step to report absence
        for _ in 0..=self.values.len() + 1 {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
        self.outcome.unwrap_or(SearchOutcome::Absent)
    }

    fn bar_color(&self, index: usize) -> [u8; 4] {
        match self.outcome {
            Some(SearchOutcome::Found(found)) if found == index => FOUND_COLOR,
            Some(_) => OUTSIDE_COLOR,
            None if self.midpoints.last() == Some(&index) => MIDPOINT_COLOR,
            None if index >= self.lo && index < self.hi => WINDOW_COLOR,
            None => OUTSIDE_COLOR,
        }
    }
}

impl Visualization for BinarySearchMode {
    fn name(&self) -> &'static str {
        "binary search"
    }

    fn help(&self) -> &'static str {
        "n new target"
    }

    fn update(&mut self, _ctx: &FrameContext<'_>) {
        self.ticks += 1;
        if self.outcome.is_none() {
            if self.ticks >= BINARY_SEARCH_STEP_FRAMES {
                self.ticks = 0;
                self.step();
            }
        } else if self.ticks >= RESULT_HOLD_FRAMES {
            self.choose_target();
        }
    }

    fn render(&self, canvas: &mut Canvas, _ctx: &FrameContext<'_>) {
        canvas.clear(BACKGROUND);
        let count = self.values.len();
        for (index, &value) in self.values.iter().enumerate() {
            let bar = bar_rect(&self.area, index, count, value, MAX_VALUE);
            canvas.fill_rect(&bar, self.bar_color(index));
        }

        let target_height = self.area.height * f64::from(self.target) / f64::from(MAX_VALUE);
        let target_y = self.area.bottom() - target_height;
        let target_line = Rect::new(self.area.x, target_y, self.area.width, 1.0);
        canvas.fill_rect(&target_line, TARGET_COLOR);

        let label_color = match self.outcome {
            Some(SearchOutcome::Found(_)) => FOUND_COLOR,
            Some(SearchOutcome::Absent) => TARGET_COLOR,
            None => LABEL_COLOR,
        };
        let label_y = (self.area.y - 20.0).max(2.0).round() as i64;
        let label_x = self.area.x.round() as i64;
        draw_number(canvas, label_x, label_y, u64::from(self.target), 3, label_color);
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.area = bar_area(width, height);
    }

    fn on_key(&mut self, key: char) -> bool {
        if key == 'n' {
            self.choose_target();
            return true;
        }
        false
    }
}
