//! Uniform bucket grid over live point slots.
//!
//! Cells are `cell`-sized squares keyed by floored coordinates. A radius query
//! scans the `(2r+1)²` block of cells around the query point, `r = ceil(radius / cell)`.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::sample::SampledPoint;

type CellKey = (i64, i64);

#[derive(Clone, Debug)]
pub(crate) struct SpatialGrid {
    cell: f64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl SpatialGrid {
    pub(crate) fn new(cell: f64) -> Self {
        Self {
            cell,
            cells: HashMap::new(),
        }
    }

    #[inline]
    fn key(&self, p: Vector2<f64>) -> CellKey {
        (
            (p.x / self.cell).floor() as i64,
            (p.y / self.cell).floor() as i64,
        )
    }

    pub(crate) fn insert(&mut self, slot: usize, p: Vector2<f64>) {
        self.cells.entry(self.key(p)).or_default().push(slot);
    }

    pub(crate) fn remove(&mut self, slot: usize, p: Vector2<f64>) {
        let key = self.key(p);
        if let Some(bucket) = self.cells.get_mut(&key) {
            bucket.retain(|&s| s != slot);
            if bucket.is_empty() {
                self.cells.remove(&key);
            }
        }
    }

    /// Closest live slot strictly within `radius` of `p`.
    ///
    /// Ties on distance go to the smaller `creation_order`, so the answer does
    /// not depend on bucket or hash order.
    pub(crate) fn nearest_within(
        &self,
        p: Vector2<f64>,
        radius: f64,
        slots: &[Option<SampledPoint>],
    ) -> Option<usize> {
        let reach = (radius / self.cell).ceil().max(1.0) as i64;
        let (cx, cy) = self.key(p);
        let r2 = radius * radius;
        let mut best: Option<(f64, u64, usize)> = None;
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &slot in bucket {
                    let Some(q) = slots[slot].as_ref() else {
                        continue;
                    };
                    let d2 = (q.location - p).norm_squared();
                    if d2 >= r2 {
                        continue;
                    }
                    let better = match best {
                        None => true,
                        Some((bd, bo, _)) => d2 < bd || (d2 == bd && q.creation_order < bo),
                    };
                    if better {
                        best = Some((d2, q.creation_order, slot));
                    }
                }
            }
        }
        best.map(|(_, _, slot)| slot)
    }
}
