//! Cell layout for the grid-based visualization modes
//!
//! A layout maps a `rows x cols` cell grid onto a surface, centering the grid
//! in any leftover space. Layouts are recomputed whenever the surface resizes.

use crate::spatial::rect::Rect;

/// Placement of a cell grid on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    cell_size: f64,
    offset_x: f64,
    offset_y: f64,
}

impl GridLayout {
    /// Fit a fixed number of rows and columns inside the surface minus a margin
    ///
    /// Cells are square; the cell size never drops below one pixel.
    pub fn fit(width: u32, height: u32, rows: usize, cols: usize, margin: f64) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let available = Rect::from_surface(width, height, margin);
        let cell_size = (available.width / cols as f64)
            .min(available.height / rows as f64)
            .floor()
            .max(1.0);
        Self::centered(width, height, rows, cols, cell_size)
    }

    /// Cover the surface with as many cells of a fixed size as fit
    ///
    /// At least one row and one column are always produced.
    pub fn cover(width: u32, height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        let rows = (height / cell_size).max(1) as usize;
        let cols = (width / cell_size).max(1) as usize;
        Self::centered(width, height, rows, cols, f64::from(cell_size))
    }

    fn centered(width: u32, height: u32, rows: usize, cols: usize, cell_size: f64) -> Self {
        let grid_width = cols as f64 * cell_size;
        let grid_height = rows as f64 * cell_size;
        Self {
            rows,
            cols,
            cell_size,
            offset_x: ((f64::from(width) - grid_width) / 2.0).floor(),
            offset_y: ((f64::from(height) - grid_height) / 2.0).floor(),
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Top-left corner of the grid on the surface
    pub const fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Surface rectangle covered by a cell
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            (col as f64).mul_add(self.cell_size, self.offset_x),
            (row as f64).mul_add(self.cell_size, self.offset_y),
            self.cell_size,
            self.cell_size,
        )
    }

    /// Area covered by all cells
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.cols as f64 * self.cell_size,
            self.rows as f64 * self.cell_size,
        )
    }

    /// Cell under a surface point, if any
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        let col = ((x - self.offset_x) / self.cell_size).floor() as usize;
        let row = ((y - self.offset_y) / self.cell_size).floor() as usize;
        // Rounding at the far edge can land one past the last cell
        Some((row.min(self.rows.saturating_sub(1)), col.min(self.cols.saturating_sub(1))))
    }
}
