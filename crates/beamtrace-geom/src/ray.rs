//! Ray representation and the slab test against bounding boxes.

use beamtrace_math::{Dir2, Point2, Vec2};

use crate::Aabb2;

/// A semi-infinite 2D line defined by an origin point and a unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point2,
    /// Unit direction of the ray.
    pub direction: Dir2,
    /// Precomputed reciprocal of direction components for fast AABB tests.
    inv_direction: Vec2,
    /// Sign of direction components (0 if positive, 1 if negative).
    sign: [usize; 2],
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized.
    pub fn new(origin: Point2, direction: Vec2) -> Self {
        let dir = Dir2::new_normalize(direction);
        // Division by zero yields inf, which the slab test handles.
        let inv = Vec2::new(1.0 / dir.x, 1.0 / dir.y);
        let sign = [
            if inv.x < 0.0 { 1 } else { 0 },
            if inv.y < 0.0 { 1 } else { 0 },
        ];
        Self {
            origin,
            direction: dir,
            inv_direction: inv,
            sign,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point2 {
        self.origin + t * self.direction.as_ref()
    }

    /// Test ray-AABB intersection using the slab method.
    ///
    /// Returns `Some((t_min, t_max))` if the ray intersects the box, where
    /// `t_min` and `t_max` are the entry and exit parameters. Returns `None`
    /// if there is no intersection ahead of the origin.
    ///
    /// Handles infinite values correctly for axis-aligned rays.
    #[inline]
    pub fn intersect_aabb(&self, aabb: &Aabb2) -> Option<(f64, f64)> {
        let bounds = [aabb.min, aabb.max];

        let tx1 = (bounds[self.sign[0]].x - self.origin.x) * self.inv_direction.x;
        let tx2 = (bounds[1 - self.sign[0]].x - self.origin.x) * self.inv_direction.x;

        let mut t_min = tx1;
        let mut t_max = tx2;

        let ty1 = (bounds[self.sign[1]].y - self.origin.y) * self.inv_direction.y;
        let ty2 = (bounds[1 - self.sign[1]].y - self.origin.y) * self.inv_direction.y;

        t_min = t_min.max(ty1);
        t_max = t_max.min(ty2);

        if t_max >= t_min && t_max >= 0.0 {
            Some((t_min.max(0.0), t_max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn test_ray_direction_normalized() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
        let p = ray.at(5.0);
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!((p.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_aabb_hit() {
        let ray = Ray::new(Point2::new(-5.0, 0.5), Vec2::new(1.0, 0.0));
        let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let result = ray.intersect_aabb(&aabb);
        assert!(result.is_some());
        let (t_min, t_max) = result.unwrap();
        assert!((t_min - 5.0).abs() < 1e-10);
        assert!((t_max - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_aabb_miss() {
        let ray = Ray::new(Point2::new(-5.0, 5.0), Vec2::new(1.0, 0.0));
        let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert!(ray.intersect_aabb(&aabb).is_none());
    }

    #[test]
    fn test_ray_inside_aabb() {
        // Ray origin inside the box
        let ray = Ray::new(Point2::new(0.5, 0.5), Vec2::new(1.0, 0.0));
        let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let result = ray.intersect_aabb(&aabb);
        assert!(result.is_some());
        let (t_min, t_max) = result.unwrap();
        assert!(t_min >= 0.0);
        assert!((t_max - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_ray_aabb_diagonal() {
        let ray = Ray::new(Point2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert!(ray.intersect_aabb(&aabb).is_some());
    }

    #[test]
    fn test_ray_aabb_behind() {
        // Ray pointing away from box
        let ray = Ray::new(Point2::new(-5.0, 0.5), Vec2::new(-1.0, 0.0));
        let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert!(ray.intersect_aabb(&aabb).is_none());
    }

    #[test]
    fn test_ray_aabb_axis_parallel_on_edge() {
        // Vertical ray through a padded zero-height box
        let aabb = Aabb2::new(Point2::new(0.0, 1.0), Point2::new(2.0, 1.0)).padded(1e-6);
        let ray = Ray::new(Point2::new(1.0, -1.0), Vec2::new(0.0, 1.0));
        assert!(ray.intersect_aabb(&aabb).is_some());
    }
}
