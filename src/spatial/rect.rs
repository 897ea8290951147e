//! Axis-aligned rectangle regions and the splits that subdivide them
//!
//! Splits reserve an optional gutter between siblings. The gutter never
//! exceeds the smaller part of the split, so children keep non-negative sizes
//! and children plus gutter always tile the parent exactly.

/// Axis-aligned box in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent, never negative
    pub width: f64,
    /// Vertical extent, never negative
    pub height: f64,
}

/// Direction of the cut line of a binary split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    /// Vertical cut line producing left and right children
    Vertical,
    /// Horizontal cut line producing top and bottom children
    Horizontal,
}

impl Rect {
    /// Create a rectangle, clamping negative or non-finite sizes to zero
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    /// Root region of a surface: the whole surface minus a margin on every side
    pub fn from_surface(width: u32, height: u32, margin: f64) -> Self {
        Self::new(0.0, 0.0, f64::from(width), f64::from(height)).inset(margin)
    }

    /// Shrink by `amount` on every side, collapsing to the center if too small
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        let dx = amount.min(self.width / 2.0);
        let dy = amount.min(self.height / 2.0);
        Self::new(
            self.x + dx,
            self.y + dy,
            2.0f64.mul_add(-dx, self.width),
            2.0f64.mul_add(-dy, self.height),
        )
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Width over height; infinite for a flat rectangle with positive width
    pub fn aspect_ratio(&self) -> f64 {
        if self.height <= 0.0 {
            if self.width > 0.0 { f64::INFINITY } else { 1.0 }
        } else {
            self.width / self.height
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width.mul_add(0.5, self.x), self.height.mul_add(0.5, self.y))
    }

    /// Test whether a point lies inside (left/top inclusive, right/bottom exclusive)
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Position of this rectangle relative to `outer`, as normalized `(u0, v0, u1, v1)`
    ///
    /// Values are clamped to `[0, 1]`; a degenerate `outer` maps to the full range.
    pub fn normalized_within(&self, outer: &Self) -> (f64, f64, f64, f64) {
        if outer.width <= 0.0 || outer.height <= 0.0 {
            return (0.0, 0.0, 1.0, 1.0);
        }
        let u = |value: f64| ((value - outer.x) / outer.width).clamp(0.0, 1.0);
        let v = |value: f64| ((value - outer.y) / outer.height).clamp(0.0, 1.0);
        (u(self.x), v(self.y), u(self.right()), v(self.bottom()))
    }

    /// Split with a cut line along `axis` at `ratio` of the cut dimension
    ///
    /// The ratio is clamped to `[0, 1]`. Returns the children in reading order
    /// (left/top first) together with the gutter that was actually reserved.
    pub fn split(&self, axis: SplitAxis, ratio: f64, gutter: f64) -> (Self, Self, f64) {
        match axis {
            SplitAxis::Vertical => {
                let (first, second, gap) = split_extent(self.width, ratio, gutter);
                (
                    Self::new(self.x, self.y, first, self.height),
                    Self::new(self.right() - second, self.y, second, self.height),
                    gap,
                )
            }
            SplitAxis::Horizontal => {
                let (first, second, gap) = split_extent(self.height, ratio, gutter);
                (
                    Self::new(self.x, self.y, self.width, first),
                    Self::new(self.x, self.bottom() - second, self.width, second),
                    gap,
                )
            }
        }
    }

    /// Split into up to four children at independent horizontal and vertical ratios
    ///
    /// Children with a side below one unit are skipped. The order is top-left,
    /// top-right, bottom-left, bottom-right.
    pub fn split_quad(&self, ratio_x: f64, ratio_y: f64, gutter: f64) -> Vec<Self> {
        let (left, right, _) = split_extent(self.width, ratio_x, gutter);
        let (top, bottom, _) = split_extent(self.height, ratio_y, gutter);

        let columns = [(self.x, left), (self.right() - right, right)];
        let rows = [(self.y, top), (self.bottom() - bottom, bottom)];

        let mut children = Vec::with_capacity(4);
        for &(y, height) in &rows {
            for &(x, width) in &columns {
                if width >= 1.0 && height >= 1.0 {
                    children.push(Self::new(x, y, width, height));
                }
            }
        }
        children
    }
}

/// Gutter that fits between two parts without exceeding the smaller one
pub fn fitted_gutter(first: f64, second: f64, requested: f64) -> f64 {
    sanitize_extent(requested).min(first.min(second).max(0.0))
}

// Returns (first length, second length, gap) with first + second + gap == extent
fn split_extent(extent: f64, ratio: f64, gutter: f64) -> (f64, f64, f64) {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.5
    };
    let first = extent * ratio;
    let second = extent - first;
    let gap = fitted_gutter(first, second, gutter);
    (first - gap / 2.0, second - gap / 2.0, gap)
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
