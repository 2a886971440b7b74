//! Axis-aligned geometry shared by the figure model and the alignment code.
//!
//! Coordinates are y-down: the "north" edge of a rectangle is its smallest y.

use serde::{Deserialize, Serialize};

/// Movement below this fraction of the coordinate magnitude is treated as
/// rounding noise.
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Axis-aligned rectangle described by its origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from two corners (min and max).
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Largest absolute coordinate of any edge.
    pub fn magnitude(&self) -> f64 {
        self.x
            .abs()
            .max(self.y.abs())
            .max(self.max_x().abs())
            .max(self.max_y().abs())
    }

    /// Returns the smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            self.x.min(other.x),
            self.y.min(other.y),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Returns this rectangle moved by `t`.
    pub fn translated(&self, t: Translation) -> Rect {
        Rect::new(self.x + t.dx, self.y + t.dy, self.width, self.height)
    }

    /// Union of a sequence of rectangles, or `None` for an empty sequence.
    pub fn union_all<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Rect>,
    {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }
}

/// A 2D translation vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Translation that undoes this one.
    pub fn inverse(&self) -> Self {
        Self::new(-self.dx, -self.dy)
    }

    /// True when both components are rounding noise for coordinates of
    /// the given magnitude (never less than 1).
    pub fn is_negligible(&self, magnitude: f64) -> bool {
        let tolerance = RELATIVE_TOLERANCE * magnitude.abs().max(1.0);
        self.dx.abs() <= tolerance && self.dy.abs() <= tolerance
    }
}
