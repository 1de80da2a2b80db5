//! Scene assembly: shapes, materials and the document boundary.

use beamtrace_geom::{Aabb2, Intersection, Ray, Shape};
use beamtrace_math::{Point2, Tolerance};
use beamtrace_optics::Material;

/// A shape paired with the optical material governing its boundary.
#[derive(Debug, Clone)]
pub struct OpticalObject {
    /// The boundary geometry.
    pub shape: Shape,
    /// The optical behavior of the boundary.
    pub material: Material,
}

/// An immutable collection of optical objects inside a document boundary.
///
/// The boundary rectangle is an always-present absorbing fallback: any
/// beam that reaches it terminates there. Shapes tagged `beam` are kept
/// separately as sources; shapes without a recognized material are not
/// stored at all — they neither block nor bend beams, which emits the
/// same kink-free geometry as tracing straight through them.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<OpticalObject>,
    sources: Vec<Shape>,
    boundary: Aabb2,
}

impl Scene {
    /// Create an empty scene with the given document boundary.
    pub fn new(boundary: Aabb2) -> Self {
        Self {
            objects: Vec::new(),
            sources: Vec::new(),
            boundary,
        }
    }

    /// Add a shape annotated with a raw material tag.
    ///
    /// The tag is expected to hold at most one directive (`beam`,
    /// `mirror`, `beam_dump`, `beam_splitter`, `glass:<index>`); `None`
    /// or an unrecognized tag drops the shape as materialless.
    pub fn add_shape(&mut self, shape: Shape, tag: Option<&str>) {
        if let Some(material) = tag.and_then(Material::from_tag) {
            self.add_object(shape, material);
        }
    }

    /// Add a shape with an already-resolved material.
    pub fn add_object(&mut self, shape: Shape, material: Material) {
        if material == Material::Beam {
            self.sources.push(shape);
        } else {
            self.objects.push(OpticalObject { shape, material });
        }
    }

    /// The interacting objects, in insertion order.
    pub fn objects(&self) -> &[OpticalObject] {
        &self.objects
    }

    /// The source shapes, in insertion order.
    pub fn sources(&self) -> &[Shape] {
        &self.sources
    }

    /// The absorbing document boundary.
    pub fn boundary(&self) -> Aabb2 {
        self.boundary
    }

    /// Whether a point lies within the document boundary.
    pub fn contains(&self, p: &Point2) -> bool {
        self.boundary.contains(p)
    }

    /// The first collision of `ray` with any object, as the object index
    /// and the intersection geometry.
    ///
    /// Objects are scanned in insertion order keeping the strictly
    /// smallest travel distance, so when two objects report an
    /// equidistant hit the earliest-inserted one wins. This is the
    /// documented tie-breaking rule.
    pub fn first_hit(&self, ray: &Ray, tol: &Tolerance) -> Option<(usize, Intersection)> {
        let mut result: Option<(usize, Intersection)> = None;
        for (index, obj) in self.objects.iter().enumerate() {
            if let Some(hit) = obj.shape.intersect(ray, tol) {
                let closer = match &result {
                    Some((_, best)) => hit.t < best.t,
                    None => true,
                };
                if closer {
                    result = Some((index, hit));
                }
            }
        }
        result
    }

    /// Travel distance at which `ray` exits the document boundary.
    ///
    /// `None` only for rays that never cross the boundary box ahead of
    /// their origin (possible only for rays seeded outside of it).
    pub fn boundary_exit(&self, ray: &Ray) -> Option<f64> {
        ray.intersect_aabb(&self.boundary).map(|(_, t_max)| t_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamtrace_geom::Segment;
    use beamtrace_math::Vec2;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn boundary() -> Aabb2 {
        Aabb2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0))
    }

    fn vertical_line(x: f64) -> Shape {
        Shape::new(
            vec![Segment::Line {
                start: Point2::new(x, 40.0),
                end: Point2::new(x, 60.0),
            }],
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_add_shape_routing() {
        let mut scene = Scene::new(boundary());
        scene.add_shape(vertical_line(10.0), Some("beam"));
        scene.add_shape(vertical_line(20.0), Some("mirror"));
        scene.add_shape(vertical_line(30.0), Some("unobtainium"));
        scene.add_shape(vertical_line(40.0), None);
        assert_eq!(scene.sources().len(), 1);
        assert_eq!(scene.objects().len(), 1);
        assert_eq!(scene.objects()[0].material, Material::Mirror);
    }

    #[test]
    fn test_first_hit_nearest() {
        let mut scene = Scene::new(boundary());
        scene.add_shape(vertical_line(60.0), Some("mirror"));
        scene.add_shape(vertical_line(30.0), Some("beam_dump"));
        let ray = Ray::new(Point2::new(5.0, 50.0), Vec2::new(1.0, 0.0));
        let (index, hit) = scene.first_hit(&ray, &TOL).unwrap();
        assert_eq!(index, 1);
        assert!((hit.t - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_hit_tie_breaks_by_insertion_order() {
        let mut scene = Scene::new(boundary());
        scene.add_shape(vertical_line(30.0), Some("mirror"));
        scene.add_shape(vertical_line(30.0), Some("beam_dump"));
        let ray = Ray::new(Point2::new(5.0, 50.0), Vec2::new(1.0, 0.0));
        let (index, _) = scene.first_hit(&ray, &TOL).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_first_hit_none() {
        let mut scene = Scene::new(boundary());
        scene.add_shape(vertical_line(30.0), Some("mirror"));
        let ray = Ray::new(Point2::new(5.0, 90.0), Vec2::new(1.0, 0.0));
        assert!(scene.first_hit(&ray, &TOL).is_none());
    }

    #[test]
    fn test_boundary_exit() {
        let scene = Scene::new(boundary());
        let ray = Ray::new(Point2::new(40.0, 50.0), Vec2::new(1.0, 0.0));
        let t = scene.boundary_exit(&ray).unwrap();
        assert!((t - 60.0).abs() < 1e-10);
        assert!(scene.contains(&Point2::new(40.0, 50.0)));
        assert!(!scene.contains(&Point2::new(140.0, 50.0)));
    }
}
