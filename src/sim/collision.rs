//! Axis-aligned bounding-box collision
//!
//! Player, obstacles and the goal door are all plain rectangles in world
//! space, so a single overlap test covers every pairing.

use crate::Vector2;

/// A positioned rectangle (top-left corner plus extent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vector2,
    pub size: Vector2,
}

impl Rect {
    pub fn new(pos: Vector2, size: Vector2) -> Self {
        Self { pos, size }
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// True when both extents are positive
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Check whether two rectangles intersect
///
/// Touching edges count as overlap: the test is the negation of "strictly
/// separated on some axis". A rectangle with zero or negative extent never
/// overlaps anything.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    if !a.is_solid() || !b.is_solid() {
        return false;
    }
    !(a.pos.x > b.right() || a.right() < b.pos.x || a.pos.y > b.bottom() || a.bottom() < b.pos.y)
}
