//! Greedy triangle-pair fusion into quads.
//!
//! Purpose
//! - Turn a triangulation of the filled cloud into a quad-dominant mesh by
//!   fusing pairs of triangles across a shared edge.
//!
//! Model
//! - Triangles made only of boundary points whose centroid falls outside the
//!   contour are pruned (concave bridges of an unconstrained triangulation).
//! - A triangle's timestamp is the smallest creation order among its vertices.
//! - Four passes run in a fixed order over every shared edge (exactly two
//!   triangles), skipping edges with a used triangle:
//!   A. longest-edge, equal timestamps; B. longest-edge, any timestamps;
//!   C. score ≤ threshold, equal timestamps; D. score ≤ threshold, any timestamps.
//! - A fused edge `(e0, e1)` with triangles `t1 < t2` yields the quad
//!   `[e0, third(t1), e1, third(t2)]`, which traces the boundary without crossing.
//!
//! Invariants
//! - Edges are visited in ascending `(min, max)` vertex order, so the result is
//!   a pure function of the cloud and the triangle list.
//! - Every triangle ends up in exactly one of: pruned, a quad, `QuadMesh::triangles`.
//!
//! References
//! - Code cross-refs: `score::quad_score`, `contour::is_inside`, `triangulate::Triangulator`

mod score;

use std::collections::BTreeMap;

use nalgebra::Vector2;

use crate::cfg::MeshCfg;
use crate::contour::Contour;
use crate::error::{MeshError, Result};
use crate::sample::PointCloud;

pub use score::quad_score;

pub type Triangle = [usize; 3];
pub type Quad = [usize; 4];

/// Untouched triangles plus fused quads, indexing a frozen `PointCloud`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuadMesh {
    pub triangles: Vec<Triangle>,
    pub quads: Vec<Quad>,
}

impl QuadMesh {
    pub fn face_count(&self) -> usize {
        self.triangles.len() + self.quads.len()
    }

    /// All faces as index slices: triangles first, then quads.
    pub fn polygons(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.triangles
            .iter()
            .map(|t| &t[..])
            .chain(self.quads.iter().map(|q| &q[..]))
    }
}

/// Counters from one merge run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Boundary-only triangles dropped for lying outside the contour.
    pub pruned: usize,
    pub longest_strict: usize,
    pub longest_relaxed: usize,
    pub nice_strict: usize,
    pub nice_relaxed: usize,
    /// Edges claimed by more than two triangles; never fused.
    pub non_manifold_edges: usize,
}

impl MergeStats {
    pub fn quads(&self) -> usize {
        self.longest_strict + self.longest_relaxed + self.nice_strict + self.nice_relaxed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    LongestEdge,
    Score,
}

#[derive(Clone, Copy, Debug)]
struct SharedEdge {
    e0: usize,
    e1: usize,
    t1: usize,
    t2: usize,
}

/// Fuse triangle pairs of `triangles` (over `cloud`) into quads.
pub fn merge_quads(
    contour: &Contour,
    cloud: &PointCloud,
    triangles: &[Triangle],
    cfg: &MeshCfg,
) -> Result<(QuadMesh, MergeStats)> {
    cfg.validate()?;
    check_indices(cloud, triangles)?;

    let mut stats = MergeStats::default();
    let mut used = vec![false; triangles.len()];

    for (i, t) in triangles.iter().enumerate() {
        if t.iter().any(|&v| cloud[v].is_interior()) {
            continue;
        }
        let centroid = t.iter().map(|&v| cloud[v].location).sum::<Vector2<f64>>() / 3.0;
        if !contour.contains(centroid) {
            used[i] = true;
            stats.pruned += 1;
        }
    }

    let (shared, non_manifold) = shared_edges(triangles);
    stats.non_manifold_edges = non_manifold;
    if non_manifold > 0 {
        tracing::warn!(non_manifold, "edges shared by more than two triangles are skipped");
    }

    let stamps: Vec<u64> = triangles
        .iter()
        .map(|t| t.iter().map(|&v| cloud[v].creation_order).min().unwrap_or(0))
        .collect();

    let mut quads = Vec::new();
    let passes = [
        (Rule::LongestEdge, true),
        (Rule::LongestEdge, false),
        (Rule::Score, true),
        (Rule::Score, false),
    ];
    for (rule, strict) in passes {
        let mut fused = 0;
        for e in &shared {
            if used[e.t1] || used[e.t2] {
                continue;
            }
            if strict && stamps[e.t1] != stamps[e.t2] {
                continue;
            }
            let quad = [
                e.e0,
                third(&triangles[e.t1], e.e0, e.e1),
                e.e1,
                third(&triangles[e.t2], e.e0, e.e1),
            ];
            let accept = match rule {
                Rule::LongestEdge => {
                    is_longest(cloud, &triangles[e.t1], e) && is_longest(cloud, &triangles[e.t2], e)
                }
                Rule::Score => {
                    let pts = quad.map(|v| cloud[v].location);
                    quad_score(&pts) <= cfg.quad_score_threshold
                }
            };
            if accept {
                used[e.t1] = true;
                used[e.t2] = true;
                quads.push(quad);
                fused += 1;
            }
        }
        match (rule, strict) {
            (Rule::LongestEdge, true) => stats.longest_strict = fused,
            (Rule::LongestEdge, false) => stats.longest_relaxed = fused,
            (Rule::Score, true) => stats.nice_strict = fused,
            (Rule::Score, false) => stats.nice_relaxed = fused,
        }
    }

    let triangles: Vec<Triangle> = triangles
        .iter()
        .enumerate()
        .filter(|(i, _)| !used[*i])
        .map(|(_, t)| *t)
        .collect();
    tracing::debug!(
        triangles = triangles.len(),
        quads = quads.len(),
        pruned = stats.pruned,
        "merge_quads"
    );
    Ok((QuadMesh { triangles, quads }, stats))
}

fn check_indices(cloud: &PointCloud, triangles: &[Triangle]) -> Result<()> {
    for (i, t) in triangles.iter().enumerate() {
        if let Some(&v) = t.iter().find(|&&v| v >= cloud.len()) {
            return Err(MeshError::triangulation(format!(
                "triangle {i} references point {v}, cloud has {}",
                cloud.len()
            )));
        }
        if t[0] == t[1] || t[1] == t[2] || t[0] == t[2] {
            return Err(MeshError::triangulation(format!(
                "triangle {i} repeats a vertex: {t:?}"
            )));
        }
    }
    Ok(())
}

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edges with exactly two triangles in key order, plus the count of edges with more.
fn shared_edges(triangles: &[Triangle]) -> (Vec<SharedEdge>, usize) {
    let mut map: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    for (i, t) in triangles.iter().enumerate() {
        for k in 0..3 {
            map.entry(edge_key(t[k], t[(k + 1) % 3]))
                .or_default()
                .push(i);
        }
    }
    let mut shared = Vec::new();
    let mut non_manifold = 0;
    for ((e0, e1), tris) in map {
        match tris.as_slice() {
            &[t1, t2] => shared.push(SharedEdge {
                e0,
                e1,
                t1: t1.min(t2),
                t2: t1.max(t2),
            }),
            [_] => {}
            _ => non_manifold += 1,
        }
    }
    (shared, non_manifold)
}

/// The vertex of `t` that is neither `a` nor `b`.
fn third(t: &Triangle, a: usize, b: usize) -> usize {
    t.iter()
        .copied()
        .find(|&v| v != a && v != b)
        .unwrap_or(t[0])
}

/// No other edge of `t` is strictly longer than the shared edge.
fn is_longest(cloud: &PointCloud, t: &Triangle, e: &SharedEdge) -> bool {
    let len = |a: usize, b: usize| (cloud[a].location - cloud[b].location).norm();
    let shared = len(e.e0, e.e1);
    let x = third(t, e.e0, e.e1);
    len(e.e0, x) <= shared && len(e.e1, x) <= shared
}

#[cfg(test)]
mod tests;
