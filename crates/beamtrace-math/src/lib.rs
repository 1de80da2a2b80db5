#![warn(missing_docs)]

//! Math types for the beamtrace optics kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! 2D beam tracing: points, vectors, directions, a few vector operations
//! used by the optics laws, and tolerance configuration.

use nalgebra::{Unit, Vector2};

/// A point in 2D document space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D document space.
pub type Vec2 = Vector2<f64>;

/// A unit (normalized) direction vector in 2D document space.
pub type Dir2 = Unit<Vector2<f64>>;

/// Rotate a vector by +90 degrees: `(x, y) -> (-y, x)`.
#[inline]
pub fn perp(v: &Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rotate a vector by `angle` radians counter-clockwise.
pub fn rotate(v: &Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Reflect a direction about a surface normal: `d - 2(d·n)n`.
///
/// `n` must be unit length but its orientation does not matter; both
/// orientations produce the same reflected vector.
#[inline]
pub fn reflect(d: &Vec2, n: &Vec2) -> Vec2 {
    d - 2.0 * d.dot(n) * n
}

/// Tolerance configuration for geometric queries.
///
/// Threaded explicitly into intersection queries and the tracer rather
/// than being module-level constants, so callers and tests can vary them.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Minimum distance a ray must travel before a collision counts.
    ///
    /// Hits at or below this parameter are discarded, which prevents a
    /// ray from immediately re-intersecting the surface it was emitted
    /// from. In document units.
    pub min_travel: f64,
    /// Almost-zero threshold for polynomial root classification and
    /// degenerate-derivative detection.
    pub root: f64,
}

impl Tolerance {
    /// Default tolerances (1e-7 document units min travel, 1e-8 root).
    pub const DEFAULT: Self = Self {
        min_travel: 1e-7,
        root: 1e-8,
    };

    /// Check if a scalar is effectively zero at root precision.
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() < self.root
    }

    /// Check if two points are coincident within the travel tolerance.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() < self.min_travel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
