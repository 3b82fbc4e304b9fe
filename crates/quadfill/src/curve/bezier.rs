use nalgebra::Vector2;

use crate::cfg::{DIR_EPS, SAMPLES_PER_UNIT_LENGTH};
use crate::error::{MeshError, Result};

use super::types::{rotate_ccw, rotate_cw, Facing, Orientation};

/// Control points `[p0, p1, p2, p3]` of a cubic Bezier.
pub type CubicCtrl = [Vector2<f64>; 4];

/// Bernstein-basis evaluation at `t` (not clamped).
#[inline]
pub fn eval_cubic(ctrl: &CubicCtrl, t: f64) -> Vector2<f64> {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    ctrl[0] * (mt2 * mt) + ctrl[1] * (3.0 * mt2 * t) + ctrl[2] * (3.0 * mt * t2) + ctrl[3] * (t2 * t)
}

/// First derivative `B'(t)`.
#[inline]
pub fn derivative(ctrl: &CubicCtrl, t: f64) -> Vector2<f64> {
    let mt = 1.0 - t;
    ((ctrl[1] - ctrl[0]) * (mt * mt) + (ctrl[2] - ctrl[1]) * (2.0 * mt * t)
        + (ctrl[3] - ctrl[2]) * (t * t))
        * 3.0
}

/// Sum of distances from `p0` to each other control point.
///
/// Cheap upper-bound proxy for the curve length; only used to pick a sampling density.
#[inline]
pub fn hull_length(ctrl: &CubicCtrl) -> f64 {
    ctrl[1..].iter().map(|p| (p - ctrl[0]).norm()).sum()
}

/// Number of uniform `t` steps used by `estimate_length` and `t_at_arc_length`.
pub(crate) fn sample_steps(ctrl: &CubicCtrl) -> usize {
    let steps = (hull_length(ctrl) * SAMPLES_PER_UNIT_LENGTH).ceil();
    if steps.is_finite() && steps >= 1.0 {
        steps as usize
    } else {
        1
    }
}

/// Polyline length estimate with `hull_length * SAMPLES_PER_UNIT_LENGTH` uniform steps.
pub fn estimate_length(ctrl: &CubicCtrl) -> f64 {
    let steps = sample_steps(ctrl);
    let dt = 1.0 / steps as f64;
    let mut prev = ctrl[0];
    let mut len = 0.0;
    for k in 1..=steps {
        let p = eval_cubic(ctrl, (k as f64 * dt).min(1.0));
        len += (p - prev).norm();
        prev = p;
    }
    len
}

/// Walk forward from `t_start` in the fixed step of `estimate_length`, summing chord
/// lengths, and return the first step parameter whose accumulated length reaches
/// `target`.
///
/// Returns `None` when the walk reaches `t = 1` first; callers treat that as the
/// curve end.
pub fn t_at_arc_length(ctrl: &CubicCtrl, t_start: f64, target: f64) -> Option<f64> {
    if !(t_start.is_finite() && target.is_finite()) || t_start > 1.0 {
        return None;
    }
    if target <= 0.0 {
        return Some(t_start);
    }
    let dt = 1.0 / sample_steps(ctrl) as f64;
    let mut t = t_start;
    let mut prev = eval_cubic(ctrl, t);
    let mut acc = 0.0;
    while t < 1.0 {
        let next_t = (t + dt).min(1.0);
        let p = eval_cubic(ctrl, next_t);
        acc += (p - prev).norm();
        if acc >= target {
            return Some(next_t);
        }
        prev = p;
        t = next_t;
    }
    None
}

/// Unit tangent at `t`. A vanishing derivative (cusp, coincident handles at an
/// endpoint) is `DegenerateGeometry`.
pub fn tangent(ctrl: &CubicCtrl, t: f64) -> Result<Vector2<f64>> {
    let d = derivative(ctrl, t);
    let len = d.norm();
    if !len.is_finite() || len <= DIR_EPS {
        return Err(MeshError::degenerate(format!(
            "zero-length cubic derivative at t={t}"
        )));
    }
    Ok(d / len)
}

/// Rotate a unit tangent by ±90° so it faces the requested side of a contour
/// with the given orientation. The interior of a counter-clockwise contour lies
/// to the left of its tangent.
#[inline]
pub fn normal(tangent: Vector2<f64>, orientation: Orientation, facing: Facing) -> Vector2<f64> {
    let inward = match orientation {
        Orientation::CounterClockwise => rotate_ccw(tangent),
        Orientation::Clockwise => rotate_cw(tangent),
    };
    match facing {
        Facing::Interior => inward,
        Facing::Exterior => -inward,
    }
}
