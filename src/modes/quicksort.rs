//! Quicksort driven one comparison at a time
//!
//! Recursion is replaced by an explicit stack of inclusive index ranges so the
//! sort can pause between any two comparisons. Partitioning follows the Lomuto
//! scheme with the last element of each range as pivot.

use crate::io::configuration::{
    BACKGROUND, QUICKSORT_LEN, QUICKSORT_STEPS_PER_FRAME, RESULT_HOLD_FRAMES,
};
use crate::modes::{FrameContext, Visualization, bar_area, bar_rect};
use crate::render::canvas::Canvas;
use crate::spatial::rect::Rect;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

const IDLE_COLOR: [u8; 4] = [70, 74, 90, 255];
const RANGE_COLOR: [u8; 4] = [96, 140, 210, 255];
const PIVOT_COLOR: [u8; 4] = [230, 84, 84, 255];
const SCAN_COLOR: [u8; 4] = [240, 190, 70, 255];
const STORE_COLOR: [u8; 4] = [200, 120, 220, 255];
const SORTED_COLOR: [u8; 4] = [92, 200, 120, 255];

/// In-progress Lomuto partition of `lo..=hi`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// First index of the range
    pub lo: usize,
    /// Last index of the range, holding the pivot
    pub hi: usize,
    /// Pivot value
    pub pivot: u32,
    /// Next slot for a value smaller than the pivot
    pub store: usize,
    /// Next index to compare against the pivot
    pub scan: usize,
}

/// Quicksort visualization state
#[derive(Debug)]
pub struct QuicksortMode {
    rng: StdRng,
    values: Vec<u32>,
    stack: Vec<(usize, usize)>,
    partition: Option<Partition>,
    comparisons: u64,
    done: bool,
    hold: u64,
    area: Rect,
}

impl QuicksortMode {
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        let mut mode = Self {
            rng: StdRng::seed_from_u64(seed),
            values: (1..=QUICKSORT_LEN as u32).collect(),
            stack: Vec::new(),
            partition: None,
            comparisons: 0,
            done: false,
            hold: 0,
            area: bar_area(width, height),
        };
        mode.reshuffle();
        mode
    }

    /// Start sorting an explicit sequence
    #[must_use]
    pub fn with_values(mut self, values: Vec<u32>) -> Self {
        self.values = values;
        self.restart();
        self
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub const fn partition(&self) -> Option<Partition> {
        self.partition
    }

    /// Comparisons performed since the last restart
    pub const fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub const fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_sorted(&self) -> bool {
        self.values.is_sorted()
    }

    /// Shuffle the bars and start over
    pub fn reshuffle(&mut self) {
        self.values.shuffle(&mut self.rng);
        self.restart();
        tracing::debug!(len = self.values.len(), "quicksort reshuffled");
    }

    fn restart(&mut self) {
        self.stack.clear();
        if self.values.len() > 1 {
            self.stack.push((0, self.values.len() - 1));
        }
        self.partition = None;
        self.comparisons = 0;
        self.done = false;
        self.hold = 0;
    }

    /// Advance by one unit of work; returns false once the array is sorted
    pub fn step(&mut self) -> bool {
        if self.done {
            return false;
        }

        let Some(mut part) = self.partition else {
            // Ranges of length one or less are already in place
            while let Some((lo, hi)) = self.stack.pop() {
                if lo < hi {
                    let pivot = self.values.get(hi).copied().unwrap_or(0);
                    self.partition = Some(Partition {
                        lo,
                        hi,
                        pivot,
                        store: lo,
                        scan: lo,
                    });
                    return true;
                }
            }
            self.done = true;
            return false;
        };

        if part.scan < part.hi {
            self.comparisons += 1;
            if self.values.get(part.scan).is_some_and(|&value| value < part.pivot) {
                self.values.swap(part.store, part.scan);
                part.store += 1;
            }
            part.scan += 1;
            self.partition = Some(part);
        } else {
            self.values.swap(part.store, part.hi);
            if part.store + 1 < part.hi {
                self.stack.push((part.store + 1, part.hi));
            }
            if part.store > part.lo + 1 {
                self.stack.push((part.lo, part.store - 1));
            }
            self.partition = None;
        }
        true
    }

    /// Step until sorted
    pub fn run_to_completion(&mut self) {
        while self.step() {}
    }

    fn bar_color(&self, index: usize) -> [u8; 4] {
        if self.done {
            return SORTED_COLOR;
        }
        let Some(part) = self.partition else {
            return IDLE_COLOR;
        };
        if index == part.hi {
            PIVOT_COLOR
        } else if index == part.scan {
            SCAN_COLOR
        } else if index == part.store {
            STORE_COLOR
        } else if (part.lo..=part.hi).contains(&index) {
            RANGE_COLOR
        } else {
            IDLE_COLOR
        }
    }
}

impl Visualization for QuicksortMode {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn update(&mut self, _ctx: &FrameContext<'_>) {
        if self.done {
            self.hold += 1;
            if self.hold >= RESULT_HOLD_FRAMES {
                self.reshuffle();
            }
            return;
        }
        for _ in 0..QUICKSORT_STEPS_PER_FRAME {
            if !self.step() {
                tracing::debug!(comparisons = self.comparisons, "quicksort finished");
                break;
            }
        }
    }

    fn render(&self, canvas: &mut Canvas, _ctx: &FrameContext<'_>) {
        canvas.clear(BACKGROUND);
        let count = self.values.len();
        let max = self.values.iter().copied().max().unwrap_or(1);
        for (index, &value) in self.values.iter().enumerate() {
            let bar = bar_rect(&self.area, index, count, value, max);
            canvas.fill_rect(&bar, self.bar_color(index));
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.area = bar_area(width, height);
    }
}
