#![warn(missing_docs)]

//! Geometric primitives and ray intersection for the beamtrace kernel.
//!
//! This crate provides the 2D geometry the tracer works with: parametric
//! path segments (straight lines and cubic Bézier curves), compound
//! shapes built from them, and exact ray intersection queries.
//!
//! # Architecture
//!
//! - [`Ray`] - Semi-infinite 2D line with origin and unit direction
//! - [`Aabb2`] - Axis-aligned bounding box used for query acceleration
//! - [`Segment`] - One parametric path segment (line or cubic Bézier)
//! - [`Shape`] - An ordered sequence of segments forming a boundary
//! - [`roots`] - Closed-form real-root extraction for the curve solver

mod aabb;
mod ray;
pub mod roots;
mod segment;
mod shape;

use thiserror::Error;

pub use aabb::Aabb2;
pub use ray::Ray;
pub use segment::{Segment, SegmentHit};
pub use shape::{Intersection, Shape};

/// Errors that can occur when building or querying geometry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A shape must contain at least one segment.
    #[error("shape has no segments")]
    EmptyShape,

    /// Containment queries are only defined for closed shapes.
    #[error("open shape has no inside")]
    OpenShape,
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
