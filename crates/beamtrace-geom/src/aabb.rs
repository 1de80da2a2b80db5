//! Axis-aligned bounding boxes in 2D.

use beamtrace_math::Point2;

/// An axis-aligned bounding box in 2D document space.
///
/// Used to accelerate ray-shape queries (a ray that misses the box cannot
/// hit the shape) and as the absorbing document boundary of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Lower-left corner.
    pub min: Point2,
    /// Upper-right corner.
    pub max: Point2,
}

impl Aabb2 {
    /// Create a box from its lower-left and upper-right corners.
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all given points.
    ///
    /// Returns a degenerate box at the origin for an empty slice.
    pub fn from_points(points: &[Point2]) -> Self {
        let mut min = points.first().copied().unwrap_or_else(Point2::origin);
        let mut max = min;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb2) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Box grown by `pad` on every side.
    ///
    /// A box around an axis-aligned line segment has zero thickness; padding
    /// keeps the slab test well-defined for such boxes.
    pub fn padded(&self, pad: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - pad, self.min.y - pad),
            max: Point2::new(self.max.x + pad, self.max.y + pad),
        }
    }

    /// Test whether a point lies inside the box (inclusive).
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Box width.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Box height.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
