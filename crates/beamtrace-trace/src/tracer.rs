//! Work-list beam propagation.
//!
//! Propagation is an explicit work list of branch tips rather than native
//! recursion: depth is carried per ray, so the depth bound is a plain
//! loop guard and memory stays bounded even for splitter cascades and
//! mirror cavities. Tracing is purely functional over the immutable
//! scene, which makes per-source trees embarrassingly parallel.

use std::collections::VecDeque;

use beamtrace_geom::{Ray, Shape};
use beamtrace_math::Tolerance;
use beamtrace_optics::Material;
use log::{debug, warn};
use rayon::prelude::*;

use crate::{BeamForest, BeamTree, Scene, TracedSegment};

/// Propagation parameters.
#[derive(Debug, Clone, Copy)]
pub struct TraceConfig {
    /// Maximum number of interactions along any single branch. A branch
    /// reaching the bound is truncated and counted, never a fatal error.
    pub max_depth: u32,
    /// Geometric tolerances threaded into every intersection query.
    pub tolerance: Tolerance,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            tolerance: Tolerance::DEFAULT,
        }
    }
}

/// A pending branch tip on the work list.
#[derive(Debug, Clone, Copy)]
struct Tip {
    ray: Ray,
    depth: u32,
    parent: Option<usize>,
}

/// Trace every source-seeded beam through the scene.
///
/// One [`BeamTree`] is grown per source shape. Trees are traced in
/// parallel and collected in source order, so the output is deterministic
/// regardless of thread scheduling. A scene without sources yields an
/// empty forest.
pub fn trace(scene: &Scene, config: &TraceConfig) -> BeamForest {
    let trees = scene
        .sources()
        .par_iter()
        .enumerate()
        .map(|(source, shape)| trace_source(scene, config, source, shape))
        .collect();
    let forest = BeamForest { trees };
    debug!(
        "traced {} source(s): {} segment(s), {} truncated branch(es)",
        scene.sources().len(),
        forest.total_segments(),
        forest.total_truncated()
    );
    forest
}

/// Seed rays for one source shape: one ray per constituent segment,
/// starting at the segment's endpoint and directed along its tangent.
fn seed_rays(shape: &Shape, tol: &Tolerance) -> Vec<Ray> {
    shape
        .segments()
        .iter()
        .filter_map(|seg| {
            let dir = seg.tangent(1.0, tol)?;
            Some(Ray::new(seg.end(), dir.into_inner()))
        })
        .collect()
}

fn trace_source(scene: &Scene, config: &TraceConfig, source: usize, shape: &Shape) -> BeamTree {
    let tol = &config.tolerance;
    let mut tree = BeamTree {
        source,
        segments: Vec::new(),
        truncated: 0,
    };
    // Seeds outside the document boundary would never terminate and are
    // skipped up front.
    let mut tips: VecDeque<Tip> = seed_rays(shape, tol)
        .into_iter()
        .filter(|ray| scene.contains(&ray.origin))
        .map(|ray| Tip {
            ray,
            depth: 0,
            parent: None,
        })
        .collect();

    while let Some(tip) = tips.pop_front() {
        if tip.depth > config.max_depth {
            // Zero-length terminal marker; the branch is cut, not the trace
            tree.segments.push(TracedSegment {
                start: tip.ray.origin,
                end: tip.ray.origin,
                parent: tip.parent,
                depth: tip.depth,
            });
            tree.truncated += 1;
            continue;
        }

        let object_hit = scene.first_hit(&tip.ray, tol);
        let boundary_t = scene.boundary_exit(&tip.ray);

        // The boundary is absorptive; an object interacts only when its
        // hit is strictly nearer than the boundary exit.
        let interacting = match (object_hit, boundary_t) {
            (Some((index, hit)), Some(exit)) if hit.t < exit => Some((index, hit)),
            (Some((index, hit)), None) => Some((index, hit)),
            _ => None,
        };

        let Some((index, hit)) = interacting else {
            // Boundary absorption, or (degenerate seed placement) nothing
            // ahead at all: the branch terminates here.
            let end = match boundary_t {
                Some(exit) => tip.ray.at(exit),
                None => tip.ray.origin,
            };
            tree.segments.push(TracedSegment {
                start: tip.ray.origin,
                end,
                parent: tip.parent,
                depth: tip.depth,
            });
            continue;
        };

        let segment_index = tree.segments.len();
        tree.segments.push(TracedSegment {
            start: tip.ray.origin,
            end: hit.point,
            parent: tip.parent,
            depth: tip.depth,
        });

        let obj = &scene.objects()[index];
        // Refraction needs a defined inside; a glass boundary on an open
        // shape absorbs instead.
        if matches!(obj.material, Material::Glass { .. }) && !obj.shape.is_closed() {
            continue;
        }
        let inside = match obj.material {
            Material::Glass { .. } => obj.shape.is_inside(&tip.ray, tol).unwrap_or(false),
            _ => false,
        };
        for child in obj.material.generated_rays(&tip.ray, &hit, inside) {
            // Nudge the child off the surface it was emitted from
            let dir = child.direction.into_inner();
            let nudged = Ray::new(child.origin + tol.min_travel * dir, dir);
            tips.push_back(Tip {
                ray: nudged,
                depth: tip.depth + 1,
                parent: Some(segment_index),
            });
        }
    }

    if tree.truncated > 0 {
        warn!(
            "source {}: {} branch(es) truncated at depth {}; not all beams were fully traced",
            source, tree.truncated, config.max_depth
        );
    }
    tree
}
