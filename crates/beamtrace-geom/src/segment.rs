//! Parametric path segments and their ray intersection queries.

use beamtrace_math::{perp, Dir2, Point2, Tolerance, Vec2};

use crate::roots::cubic_real_roots;
use crate::{Aabb2, Ray};

/// Padding applied to segment bounding boxes so that axis-aligned lines
/// do not produce zero-thickness boxes.
const AABB_PAD: f64 = 1e-6;

/// One parametric segment of a vector path, evaluated over `u ∈ [0, 1]`.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// A straight line from `start` to `end`.
    Line {
        /// Start point.
        start: Point2,
        /// End point.
        end: Point2,
    },
    /// A cubic Bézier curve,
    /// `X(u) = (1-u)³ p0 + 3u(1-u)² p1 + 3u²(1-u) p2 + u³ p3`.
    Cubic {
        /// First control point (curve start).
        p0: Point2,
        /// Second control point.
        p1: Point2,
        /// Third control point.
        p2: Point2,
        /// Fourth control point (curve end).
        p3: Point2,
    },
}

/// One intersection between a ray and a segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentHit {
    /// Parameter along the ray (travel distance, since directions are unit).
    pub t: f64,
    /// Curve parameter of the hit, in `[0, 1]`.
    pub u: f64,
    /// The intersection point.
    pub point: Point2,
    /// Normal to the segment at the hit; orientation is unresolved
    /// (callers orient it against the incoming direction).
    pub normal: Dir2,
}

impl Segment {
    /// Evaluate the segment at curve parameter `u`.
    pub fn eval(&self, u: f64) -> Point2 {
        match self {
            Segment::Line { start, end } => start + u * (end - start),
            Segment::Cubic { p0, p1, p2, p3 } => {
                let w = 1.0 - u;
                Point2::from(
                    w * w * w * p0.coords
                        + 3.0 * u * w * w * p1.coords
                        + 3.0 * u * u * w * p2.coords
                        + u * u * u * p3.coords,
                )
            }
        }
    }

    /// Unit tangent at curve parameter `u`.
    ///
    /// For a cubic whose first derivative vanishes at `u` (a cusp or a
    /// retracted control point), the second and then third derivative are
    /// used instead. Returns `None` only for fully degenerate segments.
    pub fn tangent(&self, u: f64, tol: &Tolerance) -> Option<Dir2> {
        match self {
            Segment::Line { start, end } => {
                let d = end - start;
                if d.norm() < tol.root {
                    None
                } else {
                    Some(Dir2::new_normalize(d))
                }
            }
            Segment::Cubic { p0, p1, p2, p3 } => {
                let e3 = p0.coords - 3.0 * p1.coords + 3.0 * p2.coords - p3.coords;
                let e2 = p0.coords - 2.0 * p1.coords + p2.coords;
                let e1 = p0.coords - p1.coords;

                let d1 = -3.0 * e3 * u * u + 6.0 * e2 * u - 3.0 * e1;
                if d1.norm() > tol.root {
                    return Some(Dir2::new_normalize(d1));
                }
                let d2 = -6.0 * e3 * u + 6.0 * e2;
                if d2.norm() > tol.root {
                    return Some(Dir2::new_normalize(d2));
                }
                let d3 = -6.0 * e3;
                if d3.norm() > tol.root {
                    return Some(Dir2::new_normalize(d3));
                }
                None
            }
        }
    }

    /// Unit normal at curve parameter `u` (tangent rotated +90°).
    ///
    /// Orientation is not fixed here; callers resolve it against the
    /// incoming ray direction.
    pub fn normal(&self, u: f64, tol: &Tolerance) -> Option<Dir2> {
        self.tangent(u, tol)
            .map(|t| Dir2::new_unchecked(perp(t.as_ref())))
    }

    /// Start point of the segment (`eval(0)`).
    pub fn start(&self) -> Point2 {
        match self {
            Segment::Line { start, .. } => *start,
            Segment::Cubic { p0, .. } => *p0,
        }
    }

    /// End point of the segment (`eval(1)`).
    pub fn end(&self) -> Point2 {
        match self {
            Segment::Line { end, .. } => *end,
            Segment::Cubic { p3, .. } => *p3,
        }
    }

    /// Check if this segment is degenerate (all control points coincident).
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        self.tangent(0.0, tol).is_none()
    }

    /// Bounding box of the segment, slightly padded.
    ///
    /// For a cubic this is the control-point box, which always contains
    /// the curve (convex hull property).
    pub fn aabb(&self) -> Aabb2 {
        let b = match self {
            Segment::Line { start, end } => Aabb2::from_points(&[*start, *end]),
            Segment::Cubic { p0, p1, p2, p3 } => Aabb2::from_points(&[*p0, *p1, *p2, *p3]),
        };
        b.padded(AABB_PAD)
    }

    /// All intersections of `ray` with this segment, sorted by ascending
    /// ray parameter.
    ///
    /// Hits with `t ≤ tol.min_travel` are discarded so a ray emitted from
    /// a surface never immediately re-collides with it. Degenerate
    /// geometry produces no hits rather than unstable ones.
    pub fn hits(&self, ray: &Ray, tol: &Tolerance) -> Vec<SegmentHit> {
        let mut hits = match self {
            Segment::Line { start, end } => self.line_hits(*start, *end, ray, tol),
            Segment::Cubic { p0, p1, p2, p3 } => self.cubic_hits(*p0, *p1, *p2, *p3, ray, tol),
        };
        hits.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal));
        hits
    }

    /// Closed-form line intersection: solve the 2x2 system
    /// `origin + t*d = start + u*e`.
    fn line_hits(&self, start: Point2, end: Point2, ray: &Ray, tol: &Tolerance) -> Vec<SegmentHit> {
        let d = ray.direction.as_ref();
        let e: Vec2 = end - start;
        let denom = d.x * e.y - d.y * e.x;
        // Parallel or zero-length: no solution
        if denom.abs() < tol.root {
            return Vec::new();
        }
        let s = start - ray.origin;
        let t = (s.x * e.y - s.y * e.x) / denom;
        let u = -(d.x * s.y - d.y * s.x) / denom;
        if !(0.0..=1.0).contains(&u) || t <= tol.min_travel {
            return Vec::new();
        }
        vec![SegmentHit {
            t,
            u,
            point: ray.at(t),
            normal: Dir2::new_normalize(perp(&e)),
        }]
    }

    /// Cubic intersection: project the curve onto the perpendicular of the
    /// ray direction, which turns the implicit line equation into a cubic
    /// polynomial in the curve parameter.
    fn cubic_hits(
        &self,
        p0: Point2,
        p1: Point2,
        p2: Point2,
        p3: Point2,
        ray: &Ray,
        tol: &Tolerance,
    ) -> Vec<SegmentHit> {
        let d = ray.direction.as_ref();
        let a = perp(d);
        let a0 = a.dot(&(p0 - ray.origin));
        let a1 = -3.0 * a.dot(&(p0 - p1));
        let a2 = 3.0 * a.dot(&(p0.coords - 2.0 * p1.coords + p2.coords));
        let a3 = a.dot(&(-p0.coords + 3.0 * p1.coords - 3.0 * p2.coords + p3.coords));

        cubic_real_roots(a0, a1, a2, a3, tol)
            .into_iter()
            .filter(|u| (0.0..=1.0).contains(u))
            .filter_map(|u| {
                let point = self.eval(u);
                let t = (point - ray.origin).dot(d);
                if t <= tol.min_travel {
                    return None;
                }
                let normal = self.normal(u, tol)?;
                Some(SegmentHit { t, u, point, normal })
            })
            .collect()
    }
}
