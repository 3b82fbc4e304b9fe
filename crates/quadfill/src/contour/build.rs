//! Command stream → `Contour`, and orientation by signed turning angle.

use nalgebra::Vector2;

use crate::cfg::{CHAIN_EPS, DIR_EPS};
use crate::curve::{cross, Orientation};
use crate::error::{MeshError, Result};

use super::types::{Contour, Segment};

/// Absolute path command, as produced by a host path parser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vector2<f64>),
    LineTo(Vector2<f64>),
    /// Two handles, then the end point.
    CurveTo(Vector2<f64>, Vector2<f64>, Vector2<f64>),
    Close,
}

/// Incremental contour construction from path commands (single sub-path).
#[derive(Clone, Debug, Default)]
pub struct ContourBuilder {
    start: Option<Vector2<f64>>,
    current: Option<Vector2<f64>>,
    segments: Vec<Segment>,
    closed: bool,
}

impl ContourBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: PathCommand) -> Result<&mut Self> {
        match cmd {
            PathCommand::MoveTo(p) => self.move_to(p),
            PathCommand::LineTo(p) => self.line_to(p),
            PathCommand::CurveTo(c1, c2, p) => self.curve_to(c1, c2, p),
            PathCommand::Close => self.close(),
        }
    }

    pub fn move_to(&mut self, p: Vector2<f64>) -> Result<&mut Self> {
        if !self.segments.is_empty() || self.closed {
            return Err(MeshError::malformed(
                "multiple sub-paths are not supported (holes or disjoint shapes)",
            ));
        }
        self.start = Some(p);
        self.current = Some(p);
        Ok(self)
    }

    pub fn line_to(&mut self, p: Vector2<f64>) -> Result<&mut Self> {
        let from = self.drawing_from()?;
        if (p - from).norm() > DIR_EPS {
            self.segments.push(Segment::line(from, p));
        }
        self.current = Some(p);
        Ok(self)
    }

    pub fn curve_to(
        &mut self,
        c1: Vector2<f64>,
        c2: Vector2<f64>,
        p: Vector2<f64>,
    ) -> Result<&mut Self> {
        let from = self.drawing_from()?;
        let spread = [c1, c2, p].iter().map(|q| (q - from).norm()).fold(0.0, f64::max);
        if spread > DIR_EPS {
            self.segments.push(Segment::cubic(from, c1, c2, p));
        }
        self.current = Some(p);
        Ok(self)
    }

    /// Close the sub-path; appends a closing line when the pen is away from the start.
    pub fn close(&mut self) -> Result<&mut Self> {
        let (Some(start), Some(current)) = (self.start, self.current) else {
            return Err(MeshError::malformed("close before any move"));
        };
        if (current - start).norm() > CHAIN_EPS {
            self.segments.push(Segment::line(current, start));
        }
        self.current = Some(start);
        self.closed = true;
        Ok(self)
    }

    /// Finish into a `Contour`; an unclosed path is closed implicitly.
    pub fn finish(self) -> Result<Contour> {
        Contour::new(self.segments)
    }

    fn drawing_from(&self) -> Result<Vector2<f64>> {
        if self.closed {
            return Err(MeshError::malformed(
                "drawing after close starts a second sub-path",
            ));
        }
        self.current
            .ok_or_else(|| MeshError::malformed("drawing command before the first move"))
    }
}

impl Contour {
    /// Build from a complete command stream.
    pub fn from_commands(cmds: &[PathCommand]) -> Result<Contour> {
        let mut builder = ContourBuilder::new();
        for cmd in cmds {
            builder.push(*cmd)?;
        }
        builder.finish()
    }
}

/// Sum of signed angles between consecutive edge directions around the closed
/// contour (cubics contribute their three control-polygon directions).
///
/// Zero-length directions are skipped; parallel pairs contribute nothing.
/// A simple counter-clockwise contour sums to about +2π.
pub fn turning_angle_sum(segments: &[Segment]) -> f64 {
    let dirs: Vec<Vector2<f64>> = segments
        .iter()
        .flat_map(|s| s.control_polygon().windows(2).map(|w| w[1] - w[0]))
        .filter(|d| d.norm() > DIR_EPS)
        .collect();
    let n = dirs.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = dirs[i];
        let b = dirs[(i + 1) % n];
        let cos = a.dot(&b) / (a.norm() * b.norm());
        if !cos.is_finite() || cos >= 1.0 {
            continue;
        }
        let angle = cos.max(-1.0).acos();
        if cross(a, b) >= 0.0 {
            sum += angle;
        } else {
            sum -= angle;
        }
    }
    sum
}

pub(crate) fn orientation_of(segments: &[Segment]) -> Orientation {
    if turning_angle_sum(segments) >= 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}
