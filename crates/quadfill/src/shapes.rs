//! Seeded random inputs: star-shaped contours and jittered-grid patterns.
//!
//! Purpose
//! - Reproducible shapes for tests, benches and the demos. Every draw is a
//!   pure function of its config and a `ReplayToken`.
//!
//! Model
//! - Star contours: walk once around the origin in `n` angular steps. Each
//!   vertex is nudged along the walk by less than half a step and along its ray
//!   by a relative radius wobble, so consecutive vertices keep increasing in
//!   angle and the outline stays simple. With `smooth`, edge `i` becomes the
//!   cubic whose inner controls are `P_i + (P_{i+1} − P_{i−1}) / 6` and
//!   `P_{i+1} − (P_{i+2} − P_i) / 6` (closed Catmull–Rom).
//! - Jittered grid: cover a box with square cells of side `cell`, plus one
//!   extra ring of cells on every side, and drop one uniform site per cell.
//!   Triangulating the sites and clipping the edges to the box gives an
//!   irregular triangle pattern.
//!
//! References
//! - Code cross-refs: `Contour::polygon`, `Contour::new`, `Triangulator`

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::DEFAULT_MAX_POINTS;
use crate::contour::{Contour, Segment};
use crate::error::{MeshError, Result};
use crate::triangulate::Triangulator;

/// How many outline vertices a star contour gets. Values below 3 are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Drawn uniformly from `min..=max`.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn bounds(self) -> (usize, usize) {
        match self {
            VertexCount::Fixed(n) => (n.max(3), n.max(3)),
            VertexCount::Uniform { min, max } => (min.max(3), max.max(min.max(3))),
        }
    }

    fn draw(self, rng: &mut StdRng) -> usize {
        match self.bounds() {
            (lo, hi) if lo == hi => lo,
            (lo, hi) => rng.gen_range(lo..=hi),
        }
    }
}

/// Star contour settings.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Largest shift of a vertex along the walk, in angular steps; at most 0.49.
    pub angle_wobble: f64,
    /// Largest relative change of a vertex radius; at most 0.9.
    pub radius_wobble: f64,
    pub radius: f64,
    /// Start the walk at a random angle instead of +x.
    pub rotate: bool,
    /// Cubic edges through the vertices instead of straight ones.
    pub smooth: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_wobble: 0.3,
            radius_wobble: 0.25,
            radius: 10.0,
            rotate: true,
            smooth: false,
        }
    }
}

/// Names one draw: `seed` picks the family, `index` the member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// ChaCha key built from the raw token bytes.
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        key[16..24].copy_from_slice(b"quadfill");
        StdRng::from_seed(key)
    }
}

/// Star contour vertices, counter-clockwise around the origin.
pub fn draw_radial_points(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let step = TAU / n as f64;
    let angle_amp = cfg.angle_wobble.clamp(0.0, 0.49) * step;
    let radius_amp = cfg.radius_wobble.clamp(0.0, 0.9);
    let radius = cfg.radius.max(1e-9);
    let start = if cfg.rotate { rng.gen_range(0.0..TAU) } else { 0.0 };
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let theta = start + k as f64 * step + rng.gen_range(-1.0_f64..=1.0) * angle_amp;
        let r = radius * (1.0 + rng.gen_range(-1.0_f64..=1.0) * radius_amp);
        out.push(r * Vector2::new(theta.cos(), theta.sin()));
    }
    out
}

/// Random closed star contour around the origin.
pub fn draw_contour_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<Contour> {
    let pts = draw_radial_points(cfg, tok);
    if cfg.smooth {
        Contour::new(catmull_rom_closed(&pts))
    } else {
        Contour::polygon(&pts)
    }
}

fn catmull_rom_closed(pts: &[Vector2<f64>]) -> Vec<Segment> {
    let n = pts.len();
    (0..n)
        .map(|i| {
            let prev = pts[(i + n - 1) % n];
            let p0 = pts[i];
            let p1 = pts[(i + 1) % n];
            let next = pts[(i + 2) % n];
            Segment::cubic(p0, p0 + (p1 - prev) / 6.0, p1 - (next - p0) / 6.0, p1)
        })
        .collect()
}

/// Jittered-grid settings.
#[derive(Clone, Copy, Debug)]
pub struct JitterGridCfg {
    /// Cell side; the mean distance between neighbouring sites.
    pub cell: f64,
    /// Margin added around the box on every side before the grid is laid out.
    pub border: f64,
}

impl Default for JitterGridCfg {
    fn default() -> Self {
        Self {
            cell: 10.0,
            border: 0.0,
        }
    }
}

impl JitterGridCfg {
    pub fn validate(&self) -> Result<()> {
        if !(self.cell.is_finite() && self.cell > 0.0) {
            return Err(MeshError::invalid_config(format!(
                "cell must be positive, got {}",
                self.cell
            )));
        }
        if !(self.border.is_finite() && self.border >= 0.0) {
            return Err(MeshError::invalid_config(format!(
                "border must be non-negative, got {}",
                self.border
            )));
        }
        Ok(())
    }
}

/// One uniform site per grid cell over the box `[lo, hi]` grown by `border`.
///
/// Cells run from index −1 to `⌊extent / cell⌋ + 1` on each axis, column by
/// column, so the sites overhang the box by up to one cell and there are
/// always at least nine of them.
pub fn jittered_grid_sites(
    lo: Vector2<f64>,
    hi: Vector2<f64>,
    cfg: JitterGridCfg,
    tok: ReplayToken,
) -> Result<Vec<Vector2<f64>>> {
    cfg.validate()?;
    let extent = hi - lo;
    if !(extent.x.is_finite() && extent.y.is_finite() && extent.x >= 0.0 && extent.y >= 0.0) {
        return Err(MeshError::invalid_config(format!(
            "box corners out of order: {lo:?} .. {hi:?}"
        )));
    }
    let origin = lo - Vector2::repeat(cfg.border);
    let cells = |len: f64| ((len + 2.0 * cfg.border) / cfg.cell).floor() as usize + 3;
    let (nx, ny) = (cells(extent.x), cells(extent.y));
    if nx.saturating_mul(ny) > DEFAULT_MAX_POINTS {
        return Err(MeshError::invalid_config(format!(
            "{nx}×{ny} cells is too many; choose a larger cell"
        )));
    }
    let mut rng = tok.rng();
    let mut sites = Vec::with_capacity(nx * ny);
    for i in 0..nx {
        for j in 0..ny {
            let corner = Vector2::new(i as f64 - 1.0, j as f64 - 1.0) * cfg.cell;
            let jitter = Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()) * cfg.cell;
            sites.push(origin + corner + jitter);
        }
    }
    Ok(sites)
}

/// Part of `a → b` inside the box `[lo, hi]`, or `None` when nothing of
/// positive length remains.
pub fn clip_segment(
    a: Vector2<f64>,
    b: Vector2<f64>,
    lo: Vector2<f64>,
    hi: Vector2<f64>,
) -> Option<[Vector2<f64>; 2]> {
    let d = b - a;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for axis in 0..2 {
        // Slab test: lo <= a + t·d <= hi on this axis.
        for (num, den) in [(a[axis] - lo[axis], -d[axis]), (hi[axis] - a[axis], d[axis])] {
            if den == 0.0 {
                if num < 0.0 {
                    return None;
                }
            } else {
                let t = num / den;
                if den < 0.0 {
                    t0 = t0.max(t);
                } else {
                    t1 = t1.min(t);
                }
            }
        }
    }
    let (p, q) = (a + d * t0, a + d * t1);
    (t0 < t1 && p != q).then_some([p, q])
}

/// Edges of a triangulated jittered grid, clipped to the box.
///
/// Edges shared by two triangles appear once.
pub fn jittered_grid_edges<T: Triangulator>(
    lo: Vector2<f64>,
    hi: Vector2<f64>,
    cfg: JitterGridCfg,
    tok: ReplayToken,
    triangulator: &T,
) -> Result<Vec<[Vector2<f64>; 2]>> {
    let sites = jittered_grid_sites(lo, hi, cfg, tok)?;
    let tris = triangulator.triangulate(&sites)?;
    let keys: BTreeSet<(usize, usize)> = tris
        .iter()
        .flat_map(|t| [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])])
        .map(|(u, v)| (u.min(v), u.max(v)))
        .collect();
    let edges: Vec<_> = keys
        .into_iter()
        .filter_map(|(u, v)| clip_segment(sites[u], sites[v], lo, hi))
        .collect();
    tracing::debug!(
        sites = sites.len(),
        triangles = tris.len(),
        edges = edges.len(),
        "jittered grid"
    );
    Ok(edges)
}
