//! Compound shapes: ordered segment sequences forming a path boundary.

use beamtrace_math::{Dir2, Point2, Tolerance, Vec2};

use crate::{Aabb2, GeometryError, Ray, Result, Segment};

/// An ordered sequence of connected path segments, open or closed.
///
/// Insertion order is traversal order along the boundary. A shape is pure
/// geometry; pairing it with an optical material is the scene's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    segments: Vec<Segment>,
    closed: bool,
    aabb: Aabb2,
}

/// Geometric information about the nearest collision of a ray with a shape.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Travel distance along the ray.
    pub t: f64,
    /// The collision point.
    pub point: Point2,
    /// Unit normal at the collision point, orientation unresolved.
    pub normal: Dir2,
}

impl Intersection {
    /// The normal oriented against an incoming direction (`n · d < 0`),
    /// i.e. pointing back toward the side the ray arrived from.
    pub fn normal_against(&self, incoming: &Vec2) -> Dir2 {
        if self.normal.dot(incoming) > 0.0 {
            Dir2::new_unchecked(-self.normal.into_inner())
        } else {
            self.normal
        }
    }
}

impl Shape {
    /// Create a shape from its boundary segments.
    ///
    /// `closed` declares whether the last segment connects back to the
    /// first; containment queries are only defined for closed shapes.
    pub fn new(segments: Vec<Segment>, closed: bool) -> Result<Self> {
        if segments.is_empty() {
            return Err(GeometryError::EmptyShape);
        }
        let mut aabb = segments[0].aabb();
        for seg in &segments[1..] {
            aabb = aabb.union(&seg.aabb());
        }
        Ok(Self {
            segments,
            closed,
            aabb,
        })
    }

    /// The boundary segments in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the boundary is closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Bounding box of the whole boundary.
    pub fn aabb(&self) -> Aabb2 {
        self.aabb
    }

    /// Nearest intersection of `ray` with the boundary, if any.
    ///
    /// Scans segments in traversal order keeping the strictly smallest
    /// travel distance, so among equidistant hits the earliest segment
    /// wins. Hits within the self-intersection guard are discarded.
    pub fn intersect(&self, ray: &Ray, tol: &Tolerance) -> Option<Intersection> {
        if ray.intersect_aabb(&self.aabb).is_none() {
            return None;
        }
        let mut nearest: Option<Intersection> = None;
        for seg in &self.segments {
            for hit in seg.hits(ray, tol) {
                let closer = match &nearest {
                    Some(best) => hit.t < best.t,
                    None => true,
                };
                if closer {
                    nearest = Some(Intersection {
                        t: hit.t,
                        point: hit.point,
                        normal: hit.normal,
                    });
                }
            }
        }
        nearest
    }

    /// Number of boundary crossings of `ray` ahead of its origin.
    pub fn hit_count(&self, ray: &Ray, tol: &Tolerance) -> usize {
        if ray.intersect_aabb(&self.aabb).is_none() {
            return 0;
        }
        self.segments.iter().map(|s| s.hits(ray, tol).len()).sum()
    }

    /// Whether the ray's origin lies inside the shape.
    ///
    /// A point is inside if a ray cast from it crosses the boundary an odd
    /// number of times. Only defined for closed shapes.
    pub fn is_inside(&self, ray: &Ray, tol: &Tolerance) -> Result<bool> {
        if !self.closed {
            return Err(GeometryError::OpenShape);
        }
        Ok(self.hit_count(ray, tol) % 2 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Tolerance = Tolerance::DEFAULT;

    /// Unit-square boundary with corners (0,0) and (s,s).
    fn square(s: f64) -> Shape {
        let c = [
            Point2::new(0.0, 0.0),
            Point2::new(s, 0.0),
            Point2::new(s, s),
            Point2::new(0.0, s),
        ];
        let segments = (0..4)
            .map(|i| Segment::Line {
                start: c[i],
                end: c[(i + 1) % 4],
            })
            .collect();
        Shape::new(segments, true).unwrap()
    }

    #[test]
    fn test_empty_shape_rejected() {
        assert_eq!(
            Shape::new(Vec::new(), false).unwrap_err(),
            GeometryError::EmptyShape
        );
    }

    #[test]
    fn test_nearest_intersection() {
        let shape = square(2.0);
        let ray = Ray::new(Point2::new(-1.0, 1.0), Vec2::new(1.0, 0.0));
        let hit = shape.intersect(&ray, &TOL).unwrap();
        // The left edge at x = 0 is nearer than the right edge at x = 2
        assert!((hit.t - 1.0).abs() < 1e-10);
        assert!((hit.point - Point2::new(0.0, 1.0)).norm() < 1e-10);
    }

    #[test]
    fn test_intersection_normal_orientation() {
        let shape = square(2.0);
        let ray = Ray::new(Point2::new(-1.0, 1.0), Vec2::new(1.0, 0.0));
        let hit = shape.intersect(&ray, &TOL).unwrap();
        let n = hit.normal_against(ray.direction.as_ref());
        assert!((n.x + 1.0).abs() < 1e-10);
        assert!(n.y.abs() < 1e-10);
        // Opposite orientation request flips it
        let n2 = hit.normal_against(&Vec2::new(-1.0, 0.0));
        assert!((n2.x - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_miss() {
        let shape = square(2.0);
        let ray = Ray::new(Point2::new(-1.0, 5.0), Vec2::new(1.0, 0.0));
        assert!(shape.intersect(&ray, &TOL).is_none());
    }

    #[test]
    fn test_inside_parity() {
        let shape = square(2.0);
        let inside = Ray::new(Point2::new(1.0, 1.0), Vec2::new(1.0, 0.3));
        assert!(shape.is_inside(&inside, &TOL).unwrap());
        let outside = Ray::new(Point2::new(-1.0, 1.0), Vec2::new(1.0, 0.3));
        assert!(!shape.is_inside(&outside, &TOL).unwrap());
        let behind = Ray::new(Point2::new(5.0, 1.0), Vec2::new(1.0, 0.3));
        assert!(!shape.is_inside(&behind, &TOL).unwrap());
    }

    #[test]
    fn test_inside_open_shape_errors() {
        let seg = Segment::Line {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(1.0, 0.0),
        };
        let shape = Shape::new(vec![seg], false).unwrap();
        let ray = Ray::new(Point2::new(0.5, -1.0), Vec2::new(0.0, 1.0));
        assert_eq!(
            shape.is_inside(&ray, &TOL).unwrap_err(),
            GeometryError::OpenShape
        );
    }

    #[test]
    fn test_hit_count() {
        let shape = square(2.0);
        let through = Ray::new(Point2::new(-1.0, 1.0), Vec2::new(1.0, 0.0));
        assert_eq!(shape.hit_count(&through, &TOL), 2);
        let from_inside = Ray::new(Point2::new(1.0, 1.0), Vec2::new(1.0, 0.0));
        assert_eq!(shape.hit_count(&from_inside, &TOL), 1);
    }
}
