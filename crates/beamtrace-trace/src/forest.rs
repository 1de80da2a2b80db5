//! The tracer's output data model.

use beamtrace_math::Point2;
use serde::{Deserialize, Serialize};

/// A completed, bounded piece of a beam's path.
///
/// Produced by the tracer, consumed by external renderers; never mutated
/// once emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracedSegment {
    /// Start point of the segment.
    pub start: Point2,
    /// End point of the segment.
    pub end: Point2,
    /// Index of the parent segment within the same tree, `None` for a
    /// segment seeded directly by the source.
    pub parent: Option<usize>,
    /// Branch depth: number of interactions since the source seed.
    pub depth: u32,
}

impl TracedSegment {
    /// Whether this is a zero-length terminal marker (emitted when a
    /// branch is truncated at the depth bound).
    pub fn is_terminal_marker(&self) -> bool {
        self.start == self.end
    }
}

/// All beam segments grown from one source shape.
///
/// Segments are stored in emission order; `parent` links express the
/// branching structure (a splitter hit gives two segments with the same
/// parent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamTree {
    /// Index of the originating source shape in the scene.
    pub source: usize,
    /// Emitted segments, tree-local parent indices.
    pub segments: Vec<TracedSegment>,
    /// Number of branches cut short by the depth bound.
    pub truncated: usize,
}

impl BeamTree {
    /// Reconstruct the root-to-leaf polylines of this tree, one per leaf
    /// segment, each as the list of its vertices.
    ///
    /// Zero-length terminal markers contribute no vertex of their own.
    pub fn polylines(&self) -> Vec<Vec<Point2>> {
        let mut has_child = vec![false; self.segments.len()];
        for seg in &self.segments {
            if let Some(p) = seg.parent {
                has_child[p] = true;
            }
        }
        let mut lines = Vec::new();
        for (i, seg) in self.segments.iter().enumerate() {
            // A truncated branch ends at the marker's parent; a live branch
            // ends at any childless non-marker segment.
            let tip = if seg.is_terminal_marker() {
                match seg.parent {
                    Some(p) => &self.segments[p],
                    None => continue,
                }
            } else if has_child[i] {
                continue;
            } else {
                seg
            };
            let mut chain = vec![tip.end, tip.start];
            let mut cursor = tip.parent;
            while let Some(p) = cursor {
                chain.push(self.segments[p].start);
                cursor = self.segments[p].parent;
            }
            chain.reverse();
            lines.push(chain);
        }
        lines
    }
}

/// The complete trace output: one tree per source shape, ordered by
/// source index regardless of trace scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamForest {
    /// The per-source beam trees.
    pub trees: Vec<BeamTree>,
}

impl BeamForest {
    /// Whether the forest contains no segments at all.
    pub fn is_empty(&self) -> bool {
        self.trees.iter().all(|t| t.segments.is_empty())
    }

    /// Total number of traced segments across all trees.
    pub fn total_segments(&self) -> usize {
        self.trees.iter().map(|t| t.segments.len()).sum()
    }

    /// Total number of branches truncated by the depth bound.
    pub fn total_truncated(&self) -> usize {
        self.trees.iter().map(|t| t.truncated).sum()
    }
}
