#![warn(missing_docs)]

//! beamtrace — 2D optical beam tracing over vector-path scenes.
//!
//! Traces the propagation of light beams through a scene of vector-path
//! shapes tagged with optical materials (mirrors, absorbers, splitters,
//! refractive glass), producing the polyline geometry of every resulting
//! beam segment including branches spawned by reflection, refraction and
//! splitting.
//!
//! # Example
//!
//! ```
//! use beamtrace::{trace, Aabb2, Point2, Scene, Segment, Shape, TraceConfig, Vec2};
//!
//! let boundary = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0));
//! let mut scene = Scene::new(boundary);
//!
//! // A beam firing along +x from (11, 50)
//! let seed = Shape::new(
//!     vec![Segment::Line {
//!         start: Point2::new(10.0, 50.0),
//!         end: Point2::new(11.0, 50.0),
//!     }],
//!     false,
//! )
//! .unwrap();
//! scene.add_shape(seed, Some("beam"));
//!
//! // A mirror tilted 45 degrees across its path
//! let mirror = Shape::new(
//!     vec![Segment::Line {
//!         start: Point2::new(45.0, 45.0),
//!         end: Point2::new(55.0, 55.0),
//!     }],
//!     false,
//! )
//! .unwrap();
//! scene.add_shape(mirror, Some("mirror"));
//!
//! let forest = trace(&scene, &TraceConfig::default());
//! // The beam reaches the mirror, turns 90 degrees and is absorbed at
//! // the document boundary.
//! assert_eq!(forest.trees[0].segments.len(), 2);
//! ```

pub use beamtrace_geom;
pub use beamtrace_math;
pub use beamtrace_optics;
pub use beamtrace_trace;

pub use beamtrace_geom::{
    Aabb2, GeometryError, Intersection, Ray, Segment, SegmentHit, Shape,
};
pub use beamtrace_math::{Dir2, Point2, Tolerance, Vec2};
pub use beamtrace_optics::Material;
pub use beamtrace_trace::{
    trace, BeamForest, BeamTree, OpticalObject, Scene, TraceConfig, TracedSegment,
};
