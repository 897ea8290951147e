//! Breadth-first and depth-first search through a grid maze
//!
//! Both orders share one double-ended frontier: breadth-first pops from the
//! front, depth-first from the back. Cells are marked visited when enqueued so
//! each cell enters the frontier at most once.

use crate::io::configuration::{
    BACKGROUND, MARGIN, RESULT_HOLD_FRAMES, TRAVERSAL_COLS, TRAVERSAL_ROWS,
    TRAVERSAL_STEPS_PER_FRAME, TRAVERSAL_WALL_DENSITY,
};
use crate::host::input::PointerButton;
use crate::modes::{FrameContext, Visualization};
use crate::render::canvas::Canvas;
use crate::spatial::grid::GridLayout;
use bitvec::prelude::*;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

const FLOOR_COLOR: [u8; 4] = [36, 38, 48, 255];
const WALL_COLOR: [u8; 4] = [120, 124, 140, 255];
const VISITED_COLOR: [u8; 4] = [58, 92, 150, 255];
const FRONTIER_COLOR: [u8; 4] = [240, 190, 70, 255];
const CURRENT_COLOR: [u8; 4] = [250, 250, 250, 255];
const PATH_COLOR: [u8; 4] = [92, 200, 120, 255];
const START_COLOR: [u8; 4] = [80, 200, 220, 255];
const GOAL_COLOR: [u8; 4] = [230, 84, 84, 255];

/// Grid cell as `(row, col)`
pub type Cell = (usize, usize);

/// Frontier discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Pop from the front: level by level, shortest paths
    #[default]
    BreadthFirst,
    /// Pop from the back: dive along one branch first
    DepthFirst,
}

impl Order {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::BreadthFirst => Self::DepthFirst,
            Self::DepthFirst => Self::BreadthFirst,
        }
    }
}

/// Progress of the current search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// Frontier still has cells to expand
    Searching,
    /// Goal reached; the path is available
    Found,
    /// Frontier emptied without reaching the goal
    Exhausted,
}

/// Maze traversal visualization state
#[derive(Debug)]
pub struct TraversalMode {
    rng: StdRng,
    order: Order,
    walls: Array2<bool>,
    frontier: VecDeque<Cell>,
    visited: BitVec,
    parents: Vec<Option<usize>>,
    current: Option<Cell>,
    path: Vec<Cell>,
    status: SearchStatus,
    hold: u64,
    surface: (u32, u32),
    layout: GridLayout,
}

impl TraversalMode {
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        let mut mode = Self {
            rng: StdRng::seed_from_u64(seed),
            order: Order::default(),
            walls: Array2::from_elem((TRAVERSAL_ROWS, TRAVERSAL_COLS), false),
            frontier: VecDeque::new(),
            visited: BitVec::new(),
            parents: Vec::new(),
            current: None,
            path: Vec::new(),
            status: SearchStatus::Searching,
            hold: 0,
            surface: (width, height),
            layout: GridLayout::fit(width, height, TRAVERSAL_ROWS, TRAVERSAL_COLS, MARGIN),
        };
        mode.regenerate();
        mode
    }

    /// Replace the maze with an explicit wall grid and restart
    ///
    /// Start and goal are always cleared.
    #[must_use]
    pub fn with_walls(mut self, walls: Array2<bool>) -> Self {
        let (rows, cols) = walls.dim();
        self.walls = if rows == 0 || cols == 0 {
            Array2::from_elem((1, 1), false)
        } else {
            walls
        };
        self.clear_endpoints();
        let (width, height) = self.surface;
        self.on_resize(width, height);
        self.restart();
        self
    }

    pub fn rows(&self) -> usize {
        self.walls.nrows()
    }

    pub fn cols(&self) -> usize {
        self.walls.ncols()
    }

    pub const fn start(&self) -> Cell {
        (0, 0)
    }

    /// Bottom-right cell
    pub fn goal(&self) -> Cell {
        (self.rows().saturating_sub(1), self.cols().saturating_sub(1))
    }

    pub const fn order(&self) -> Order {
        self.order
    }

    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    /// Start-to-goal path once found, empty otherwise
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.get(cell).copied().unwrap_or(true)
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.index_of(cell)
            .is_some_and(|index| self.visited.get(index).as_deref() == Some(&true))
    }

    /// Number of cells marked visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.count_ones()
    }

    /// Switch between breadth-first and depth-first and restart
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        tracing::debug!(order = ?self.order, "traversal order switched");
        self.restart();
    }

    /// Draw fresh seeded walls and restart
    pub fn regenerate(&mut self) {
        let rng = &mut self.rng;
        self.walls = Array2::from_shape_fn(self.walls.dim(), |_| {
            rng.random_bool(TRAVERSAL_WALL_DENSITY)
        });
        self.clear_endpoints();
        self.restart();
    }

    /// Flip a wall and restart; start and goal are never walled
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        if cell == self.start() || cell == self.goal() {
            return false;
        }
        let Some(wall) = self.walls.get_mut(cell) else {
            return false;
        };
        *wall = !*wall;
        self.restart();
        true
    }

    /// Reset the search over the current maze
    pub fn restart(&mut self) {
        let cells = self.rows() * self.cols();
        self.frontier.clear();
        self.visited = bitvec![0; cells];
        self.parents = vec![None; cells];
        self.current = None;
        self.path.clear();
        self.status = SearchStatus::Searching;
        self.hold = 0;

        let start = self.start();
        self.mark_visited(start);
        self.frontier.push_back(start);
    }

    /// Expand one frontier cell; returns false once the search has ended
    pub fn step(&mut self) -> bool {
        if self.status != SearchStatus::Searching {
            return false;
        }
        let popped = match self.order {
            Order::BreadthFirst => self.frontier.pop_front(),
            Order::DepthFirst => self.frontier.pop_back(),
        };
        let Some(cell) = popped else {
            self.status = SearchStatus::Exhausted;
            self.current = None;
            tracing::debug!(visited = self.visited_count(), "traversal exhausted");
            return false;
        };
        self.current = Some(cell);

        if cell == self.goal() {
            self.status = SearchStatus::Found;
            self.path = self.reconstruct_path(cell);
            tracing::debug!(length = self.path.len(), "traversal reached goal");
            return false;
        }

        let Some(parent) = self.index_of(cell) else {
            return true;
        };
        for neighbor in self.neighbors(cell) {
            if !self.is_wall(neighbor) && !self.is_visited(neighbor) {
                self.mark_visited(neighbor);
                if let Some(slot) = self
                    .index_of(neighbor)
                    .and_then(|index| self.parents.get_mut(index))
                {
                    *slot = Some(parent);
                }
                self.frontier.push_back(neighbor);
            }
        }
        true
    }

    /// Step until the search ends
    pub fn run_to_completion(&mut self) -> SearchStatus {
        while self.step() {}
        self.status
    }

    fn neighbors(&self, (row, col): Cell) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(4);
        if row > 0 {
            cells.push((row - 1, col));
        }
        if col + 1 < self.cols() {
            cells.push((row, col + 1));
        }
        if row + 1 < self.rows() {
            cells.push((row + 1, col));
        }
        if col > 0 {
            cells.push((row, col - 1));
        }
        cells
    }

    fn reconstruct_path(&self, goal: Cell) -> Vec<Cell> {
        let mut path = vec![goal];
        let mut index = self.index_of(goal);
        // A path never revisits a cell, so it has at most one entry per cell
        for _ in 0..self.parents.len() {
            let Some(parent) = index.and_then(|i| self.parents.get(i).copied().flatten()) else {
                break;
            };
            path.push(self.cell_of(parent));
            index = Some(parent);
        }
        path.reverse();
        path
    }

    fn mark_visited(&mut self, cell: Cell) {
        if let Some(index) = self.index_of(cell) {
            if let Some(mut bit) = self.visited.get_mut(index) {
                *bit = true;
            }
        }
    }

    fn index_of(&self, (row, col): Cell) -> Option<usize> {
        (row < self.rows() && col < self.cols()).then_some(row * self.cols() + col)
    }

    fn cell_of(&self, index: usize) -> Cell {
        let cols = self.cols().max(1);
        (index / cols, index % cols)
    }

    fn clear_endpoints(&mut self) {
        let start = self.start();
        let goal = self.goal();
        for cell in [start, goal] {
            if let Some(wall) = self.walls.get_mut(cell) {
                *wall = false;
            }
        }
    }

    fn cell_color(&self, cell: Cell) -> [u8; 4] {
        if cell == self.start() {
            START_COLOR
        } else if cell == self.goal() {
            GOAL_COLOR
        } else if self.is_wall(cell) {
            WALL_COLOR
        } else if self.path.contains(&cell) {
            PATH_COLOR
        } else if self.current == Some(cell) {
            CURRENT_COLOR
        } else if self.frontier.contains(&cell) {
            FRONTIER_COLOR
        } else if self.is_visited(cell) {
            VISITED_COLOR
        } else {
            FLOOR_COLOR
        }
    }
}

impl Visualization for TraversalMode {
    fn name(&self) -> &'static str {
        match self.order {
            Order::BreadthFirst => "breadth-first search",
            Order::DepthFirst => "depth-first search",
        }
    }

    fn help(&self) -> &'static str {
        "b breadth/depth first  click toggles walls"
    }

    fn update(&mut self, _ctx: &FrameContext<'_>) {
        if self.status == SearchStatus::Searching {
            for _ in 0..TRAVERSAL_STEPS_PER_FRAME {
                if !self.step() {
                    break;
                }
            }
            return;
        }
        self.hold += 1;
        if self.hold >= RESULT_HOLD_FRAMES {
            self.regenerate();
        }
    }

    fn render(&self, canvas: &mut Canvas, _ctx: &FrameContext<'_>) {
        canvas.clear(BACKGROUND);
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let rect = self.layout.cell_rect(row, col).inset(0.5);
                canvas.fill_rect(&rect, self.cell_color((row, col)));
            }
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.surface = (width, height);
        self.layout = GridLayout::fit(width, height, self.rows(), self.cols(), MARGIN);
    }

    fn on_key(&mut self, key: char) -> bool {
        if key == 'b' {
            self.toggle_order();
            return true;
        }
        false
    }

    fn on_pointer_pressed(&mut self, x: f64, y: f64, _button: PointerButton) {
        if let Some(cell) = self.layout.cell_at(x, y) {
            self.toggle_wall(cell);
        }
    }
}
