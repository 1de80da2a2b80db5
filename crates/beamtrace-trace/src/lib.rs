#![warn(missing_docs)]

//! Scene model and beam propagation for the beamtrace kernel.
//!
//! This crate ties the geometry and optics crates together: a [`Scene`]
//! pairs shapes with their materials inside an absorbing document
//! boundary, and [`trace`] propagates every source-seeded beam through
//! it, following reflections, refractions and splits up to a configured
//! depth bound.
//!
//! # Architecture
//!
//! - [`Scene`] - immutable shape collection plus the boundary rectangle
//! - [`trace`] / [`TraceConfig`] - work-list beam propagation
//! - [`BeamForest`] - the output: one [`BeamTree`] of [`TracedSegment`]s
//!   per source shape

mod forest;
mod scene;
mod tracer;

pub use forest::{BeamForest, BeamTree, TracedSegment};
pub use scene::{OpticalObject, Scene};
pub use tracer::{trace, TraceConfig};
