//! Front-advancing interior fill.
//!
//! Purpose
//! - Grow interior points from the boundary samples until the region enclosed
//!   by the contour is covered at roughly `spacing` density.
//!
//! Model
//! - `W` (the pending queue) starts with every edge sample; `M` (all live
//!   points) starts with every boundary point.
//! - Popping `p` proposes three candidates at distance `spacing`: along
//!   `p`'s growth direction and along its ±90° rotations. Each candidate keeps
//!   the direction that produced it as its own normal.
//! - Candidates outside the contour are dropped. A candidate with no live point
//!   closer than `Pm = spacing/√2` is accepted and queued. Otherwise the
//!   nearest point decides: a boundary point absorbs the candidate; an interior
//!   point is replaced by the midpoint of the two (no normal), and the search
//!   repeats from the midpoint until it lands or is absorbed.
//! - A merged point takes over the pending slot of whatever it replaced, so a
//!   merge never grows `W`; with accepted points at least `Pm` apart the run
//!   terminates for any bounded contour.
//!
//! Invariants
//! - No two interior points are closer than `Pm`.
//! - Boundary points are never moved or removed.
//! - Nearest-point ties go to the older point (smaller creation order).
//!
//! References
//! - Code cross-refs: `sample::{sample_boundary, PointCloud}`, `contour::is_inside`,
//!   `grid::SpatialGrid`

mod grid;

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::cfg::MeshCfg;
use crate::contour::Contour;
use crate::curve::{rotate_ccw, rotate_cw};
use crate::error::{MeshError, Result};
use crate::sample::{PointCloud, PointKind, SampledPoint};

use grid::SpatialGrid;

/// Counters from one front-advancing run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrontStats {
    /// Points popped from the queue and grown from.
    pub expanded: usize,
    /// Candidates placed without merging.
    pub accepted: usize,
    /// Candidates outside the contour.
    pub rejected_outside: usize,
    /// Candidates (or merged points) swallowed by a boundary point.
    pub absorbed: usize,
    /// Interior pairs replaced by their midpoint.
    pub merged: usize,
}

/// Fill the interior of `contour`, starting from its sampled `boundary`.
///
/// Takes ownership of the boundary cloud and returns the complete cloud:
/// boundary points first (unchanged, same order), then surviving interior
/// points in placement order.
pub fn advance_front(
    contour: &Contour,
    boundary: PointCloud,
    cfg: &MeshCfg,
) -> Result<(PointCloud, FrontStats)> {
    cfg.validate()?;
    let mut front = Front::new(contour, boundary, cfg);
    front.run()?;
    Ok(front.finish())
}

struct Front<'a> {
    contour: &'a Contour,
    spacing: f64,
    merge_dist: f64,
    max_points: Option<usize>,
    /// Tombstoned storage: removed points leave `None` behind.
    slots: Vec<Option<SampledPoint>>,
    /// Membership in `W`; queue entries whose flag is cleared are skipped.
    queued: Vec<bool>,
    pending: VecDeque<usize>,
    grid: SpatialGrid,
    next_order: u64,
    live: usize,
    stats: FrontStats,
}

impl<'a> Front<'a> {
    fn new(contour: &'a Contour, boundary: PointCloud, cfg: &MeshCfg) -> Self {
        let merge_dist = cfg.merge_threshold();
        let (points, next_order) = boundary.into_parts();
        let mut front = Self {
            contour,
            spacing: cfg.spacing,
            merge_dist,
            max_points: cfg.max_points,
            slots: Vec::with_capacity(points.len() * 4),
            queued: Vec::with_capacity(points.len() * 4),
            pending: VecDeque::new(),
            grid: SpatialGrid::new(merge_dist),
            next_order,
            live: 0,
            stats: FrontStats::default(),
        };
        for p in points {
            let seeds = p.kind == PointKind::EdgeSample;
            let slot = front.insert(p);
            if seeds {
                front.enqueue(slot);
            }
        }
        front
    }

    fn insert(&mut self, p: SampledPoint) -> usize {
        let slot = self.slots.len();
        self.grid.insert(slot, p.location);
        self.slots.push(Some(p));
        self.queued.push(false);
        self.live += 1;
        slot
    }

    fn enqueue(&mut self, slot: usize) {
        self.queued[slot] = true;
        self.pending.push_back(slot);
    }

    fn remove(&mut self, slot: usize) -> Option<SampledPoint> {
        let p = self.slots[slot].take()?;
        self.grid.remove(slot, p.location);
        self.queued[slot] = false;
        self.live -= 1;
        Some(p)
    }

    fn stamp(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    fn run(&mut self) -> Result<()> {
        while let Some(slot) = self.pending.pop_front() {
            if !std::mem::replace(&mut self.queued[slot], false) {
                continue;
            }
            let Some(p) = self.slots[slot] else {
                continue;
            };
            self.stats.expanded += 1;
            let dir = p.growth_direction();
            for d in [dir, rotate_ccw(dir), rotate_cw(dir)] {
                let candidate = p.location + d * self.spacing;
                if !self.contour.contains(candidate) {
                    self.stats.rejected_outside += 1;
                    continue;
                }
                self.place(candidate, d)?;
            }
        }
        Ok(())
    }

    /// Accept, merge, or drop one interior candidate.
    fn place(&mut self, location: Vector2<f64>, normal: Vector2<f64>) -> Result<()> {
        let mut location = location;
        let mut normal = Some(normal);
        let mut merged = false;
        let mut inherits_pending = false;
        loop {
            let Some(near) = self
                .grid
                .nearest_within(location, self.merge_dist, &self.slots)
            else {
                if let Some(limit) = self.max_points {
                    if self.live >= limit {
                        return Err(MeshError::PointBudgetExceeded { limit });
                    }
                }
                let creation_order = self.stamp();
                let slot = self.insert(SampledPoint {
                    kind: PointKind::Interior,
                    location,
                    normal,
                    creation_order,
                });
                if !merged {
                    self.stats.accepted += 1;
                }
                if !merged || inherits_pending {
                    self.enqueue(slot);
                }
                return Ok(());
            };
            let Some(occupant) = self.slots[near] else {
                return Ok(());
            };
            if occupant.is_boundary() {
                self.stats.absorbed += 1;
                return Ok(());
            }
            inherits_pending |= self.queued[near];
            self.remove(near);
            location = (location + occupant.location) * 0.5;
            normal = None;
            merged = true;
            self.stats.merged += 1;
        }
    }

    fn finish(self) -> (PointCloud, FrontStats) {
        let points: Vec<SampledPoint> = self.slots.into_iter().flatten().collect();
        let interior = points.iter().filter(|p| p.is_interior()).count();
        tracing::debug!(
            interior,
            total = points.len(),
            expanded = self.stats.expanded,
            accepted = self.stats.accepted,
            rejected_outside = self.stats.rejected_outside,
            absorbed = self.stats.absorbed,
            merged = self.stats.merged,
            "advance_front"
        );
        (PointCloud::from_parts(points, self.next_order), self.stats)
    }
}

#[cfg(test)]
mod tests;
