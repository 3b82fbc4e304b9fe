use nalgebra::Vector2;

use crate::curve::{cubic_line_params, eval_cubic, rotate_ccw, CubicCtrl};

use super::types::{Contour, Segment};

/// Ray direction: two units along +x, tilted slightly so rays through
/// grid-aligned contour vertices are unlikely.
pub(super) const RAY_STEP: Vector2<f64> = Vector2::new(2.0, 2.0 * 1.618_033_988_7e-4);

/// Even-odd ray casting: count crossings of a ray from `p` with every segment.
///
/// Crossings follow a half-open rule: a point is "above" the ray's supporting
/// line when its signed offset is strictly positive, and a crossing is a change
/// of that flag along the contour. A ray through a shared vertex is therefore
/// counted once when the contour passes through the line there, and zero or
/// two times when it only touches it. Points exactly on the boundary may
/// report either side.
pub fn is_inside(contour: &Contour, p: Vector2<f64>) -> bool {
    let ray = RayFrame::new(p);
    let crossings: usize = contour
        .segments()
        .iter()
        .map(|seg| match seg {
            Segment::Line { pts } => ray.line_crossings(pts[0], pts[1]),
            Segment::Cubic { ctrl } => ray.cubic_crossings(ctrl),
        })
        .sum();
    crossings % 2 == 1
}

struct RayFrame {
    origin: Vector2<f64>,
    dir: Vector2<f64>,
    up: Vector2<f64>,
}

impl RayFrame {
    fn new(origin: Vector2<f64>) -> Self {
        let dir = RAY_STEP.normalize();
        Self {
            origin,
            dir,
            up: rotate_ccw(dir),
        }
    }

    #[inline]
    fn above(&self, q: Vector2<f64>) -> bool {
        self.up.dot(&(q - self.origin)) > 0.0
    }

    /// `q` lies on the ray side of the origin; crossings behind it do not count.
    #[inline]
    fn ahead(&self, q: Vector2<f64>) -> bool {
        self.dir.dot(&(q - self.origin)) >= 0.0
    }

    fn line_crossings(&self, a: Vector2<f64>, b: Vector2<f64>) -> usize {
        if self.above(a) == self.above(b) {
            return 0;
        }
        let ha = self.up.dot(&(a - self.origin));
        let hb = self.up.dot(&(b - self.origin));
        let t = ha / (ha - hb);
        usize::from(self.ahead(a + (b - a) * t))
    }

    /// Flag changes along the cubic, split at the interior roots of the
    /// offset polynomial. Each piece contributes the flag at its midpoint; the
    /// endpoint flags bracket the sequence so shared vertices agree with
    /// neighbouring segments.
    fn cubic_crossings(&self, ctrl: &CubicCtrl) -> usize {
        let line = [self.origin, self.origin + RAY_STEP];
        let mut cuts: Vec<f64> = cubic_line_params(ctrl, &line)
            .into_iter()
            .filter(|&t| t > 0.0 && t < 1.0)
            .collect();
        cuts.sort_by(f64::total_cmp);
        cuts.insert(0, 0.0);
        cuts.push(1.0);

        // (flag, parameter where the flag change into this state happens)
        let mut states: Vec<(bool, f64)> = Vec::with_capacity(cuts.len() + 1);
        states.push((self.above(ctrl[0]), 0.0));
        for w in cuts.windows(2) {
            let mid = eval_cubic(ctrl, 0.5 * (w[0] + w[1]));
            states.push((self.above(mid), w[0]));
        }
        states.push((self.above(ctrl[3]), 1.0));

        states
            .windows(2)
            .filter(|w| w[0].0 != w[1].0)
            .filter(|w| self.ahead(eval_cubic(ctrl, w[1].1)))
            .count()
    }
}
