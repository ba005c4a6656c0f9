//! Rectangular region particles are clamped into.
//!
//! Bounds are given clockwise starting from the top, with the usual CSS-style
//! shorthand for fewer than four values.

use smog_core::geometry::Vector;

/// A rectangle described by its four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Bounds {
    /// Creates bounds from the four sides.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Resolves clockwise shorthand into bounds.
    ///
    /// - `[top, right, bottom, left]`
    /// - `[top, right, bottom]`, left reuses right
    /// - `[a, b]`, top and bottom are `a`, right and left are `b`
    /// - `[a]`, all four sides are `a`
    ///
    /// Any other number of values yields `None`.
    pub fn from_clockwise(values: &[f64]) -> Option<Self> {
        match *values {
            [top, right, bottom, left] => Some(Self::new(top, right, bottom, left)),
            [top, right, bottom] => Some(Self::new(top, right, bottom, right)),
            [vertical, horizontal] => Some(Self::new(vertical, horizontal, vertical, horizontal)),
            [all] => Some(Self::new(all, all, all, all)),
            _ => None,
        }
    }

    /// Top side
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Right side
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Bottom side
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Left side
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Whether the sides form a non-degenerate rectangle (top > bottom, right > left).
    pub fn is_valid(&self) -> bool {
        self.top > self.bottom && self.right > self.left
    }

    /// The four sides, clockwise from the top.
    pub fn to_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Clamps a position into the bounds.
    ///
    /// The x coordinate is kept within `[bottom, top]` and the y coordinate
    /// within `[left, right]`: the vertical sides bound x and the horizontal
    /// sides bound y. Upper limits are applied before lower limits, so for a
    /// degenerate rectangle the lower limit wins.
    // FIXME: the axis pairing is swapped against the top/bottom = y convention.
    // Kept as is until the intended mapping is confirmed by callers.
    pub fn clamp(&self, position: Vector) -> Vector {
        let x = position.x().min(self.top).max(self.bottom);
        let y = position.y().min(self.right).max(self.left);
        Vector::new(x, y)
    }
}
