//! Segment and contour data types.

use nalgebra::Vector2;

use crate::cfg::{CHAIN_EPS, DIR_EPS};
use crate::curve::{self, CubicCtrl, Orientation};
use crate::error::{MeshError, Result};

use super::build::orientation_of;

/// One piece of a contour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line { pts: [Vector2<f64>; 2] },
    Cubic { ctrl: CubicCtrl },
}

impl Segment {
    #[inline]
    pub fn line(p0: Vector2<f64>, p1: Vector2<f64>) -> Self {
        Segment::Line { pts: [p0, p1] }
    }

    #[inline]
    pub fn cubic(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        Segment::Cubic {
            ctrl: [p0, p1, p2, p3],
        }
    }

    #[inline]
    pub fn start(&self) -> Vector2<f64> {
        match self {
            Segment::Line { pts } => pts[0],
            Segment::Cubic { ctrl } => ctrl[0],
        }
    }

    #[inline]
    pub fn end(&self) -> Vector2<f64> {
        match self {
            Segment::Line { pts } => pts[1],
            Segment::Cubic { ctrl } => ctrl[3],
        }
    }

    /// Control polygon: 2 points for a line, 4 for a cubic.
    #[inline]
    pub fn control_polygon(&self) -> &[Vector2<f64>] {
        match self {
            Segment::Line { pts } => pts,
            Segment::Cubic { ctrl } => ctrl,
        }
    }

    /// Euclidean length for lines, polyline estimate for cubics.
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line { pts } => (pts[1] - pts[0]).norm(),
            Segment::Cubic { ctrl } => curve::estimate_length(ctrl),
        }
    }

    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        match self {
            Segment::Line { pts } => pts[0] + (pts[1] - pts[0]) * t,
            Segment::Cubic { ctrl } => curve::eval_cubic(ctrl, t),
        }
    }

    /// Unit tangent at `t`; zero-length lines and cusps are `DegenerateGeometry`.
    pub fn tangent_at(&self, t: f64) -> Result<Vector2<f64>> {
        match self {
            Segment::Line { pts } => {
                let d = pts[1] - pts[0];
                let len = d.norm();
                if len <= DIR_EPS {
                    return Err(MeshError::degenerate("zero-length line segment"));
                }
                Ok(d / len)
            }
            Segment::Cubic { ctrl } => curve::tangent(ctrl, t),
        }
    }

    /// Tangent at `t`, falling back to the chord direction when the curve is
    /// pinched there (coincident handles, cusps).
    pub fn tangent_or_chord(&self, t: f64) -> Result<Vector2<f64>> {
        match self.tangent_at(t) {
            Ok(tan) => Ok(tan),
            Err(err) => {
                let chord = self.end() - self.start();
                let len = chord.norm();
                if len <= DIR_EPS {
                    return Err(err);
                }
                tracing::debug!(t, "degenerate tangent; using chord direction");
                Ok(chord / len)
            }
        }
    }
}

/// Closed, chained sequence of segments with a fixed orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    segments: Vec<Segment>,
    orientation: Orientation,
}

impl Contour {
    /// Validate chaining, force closure, and compute the orientation.
    ///
    /// A last segment that does not return to the start gets an implicit closing line.
    pub fn new(mut segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(MeshError::malformed("contour has no segments"));
        }
        for (i, pair) in segments.windows(2).enumerate() {
            let gap = (pair[1].start() - pair[0].end()).norm();
            if !gap.is_finite() || gap > CHAIN_EPS {
                return Err(MeshError::malformed(format!(
                    "segment {} ends {gap} away from the start of segment {}",
                    i,
                    i + 1
                )));
            }
        }
        // Joints are made bit-identical so both neighbours see the same vertex.
        for i in 1..segments.len() {
            let joint = segments[i - 1].end();
            snap_start(&mut segments[i], joint);
        }
        let start = segments[0].start();
        let last = segments.len() - 1;
        let end = segments[last].end();
        if (end - start).norm() > CHAIN_EPS {
            segments.push(Segment::line(end, start));
        } else {
            snap_end(&mut segments[last], start);
        }
        let total: f64 = segments.iter().map(Segment::length).sum();
        if !total.is_finite() || total <= DIR_EPS {
            return Err(MeshError::malformed("contour has zero length"));
        }
        let orientation = orientation_of(&segments);
        Ok(Self {
            segments,
            orientation,
        })
    }

    /// Closed polygon through `vertices` (at least two), as line segments.
    pub fn polygon(vertices: &[Vector2<f64>]) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(MeshError::malformed("polygon needs at least two vertices"));
        }
        let segments = vertices
            .windows(2)
            .map(|w| Segment::line(w[0], w[1]))
            .collect();
        Self::new(segments)
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn start(&self) -> Vector2<f64> {
        self.segments[0].start()
    }

    /// Total boundary length (cubics estimated).
    pub fn perimeter(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Axis-aligned bounds of all control points: `(min, max)`.
    pub fn bounding_box(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut lo = Vector2::repeat(f64::INFINITY);
        let mut hi = Vector2::repeat(f64::NEG_INFINITY);
        for p in self.segments.iter().flat_map(|s| s.control_polygon().iter()) {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (lo, hi)
    }

    /// Even-odd point-in-contour test; see `is_inside`.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        super::inside::is_inside(self, p)
    }
}

fn snap_start(seg: &mut Segment, to: Vector2<f64>) {
    match seg {
        Segment::Line { pts } => pts[0] = to,
        Segment::Cubic { ctrl } => ctrl[0] = to,
    }
}

fn snap_end(seg: &mut Segment, to: Vector2<f64>) {
    match seg {
        Segment::Line { pts } => pts[1] = to,
        Segment::Cubic { ctrl } => ctrl[3] = to,
    }
}
