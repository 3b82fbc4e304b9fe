//! Shape measures for candidate quads.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector2;

use crate::cfg::DIR_EPS;
use crate::curve::cross;

/// Twice the signed area (shoelace); positive for counter-clockwise vertex order.
pub(crate) fn signed_area2(pts: &[Vector2<f64>]) -> f64 {
    let n = pts.len();
    (0..n).map(|i| cross(pts[i], pts[(i + 1) % n])).sum()
}

/// Interior angles of a simple polygon, in `(0, 2π)`.
///
/// Reflex corners come out above π. Returns `None` for zero-area input or
/// repeated consecutive vertices.
pub(crate) fn interior_angles(pts: &[Vector2<f64>; 4]) -> Option<[f64; 4]> {
    let area2 = signed_area2(pts);
    if area2.abs() <= DIR_EPS {
        return None;
    }
    let sign = area2.signum();
    let mut out = [0.0; 4];
    for (i, slot) in out.iter_mut().enumerate() {
        let a = pts[(i + 3) % 4];
        let b = pts[i];
        let c = pts[(i + 1) % 4];
        let (u, v) = (c - b, a - b);
        if u.norm() <= DIR_EPS || v.norm() <= DIR_EPS {
            return None;
        }
        let mut th = (sign * cross(u, v)).atan2(u.dot(&v));
        if th < 0.0 {
            th += TAU;
        }
        *slot = th;
    }
    Some(out)
}

/// Combined deviation from a square: `Σ|lᵢ − l̄|/l̄ + Σ|θᵢ − π/2|/(π/2)`.
///
/// Zero for a square, `+∞` for degenerate quads.
pub fn quad_score(pts: &[Vector2<f64>; 4]) -> f64 {
    let lens: [f64; 4] = std::array::from_fn(|i| (pts[(i + 1) % 4] - pts[i]).norm());
    let avg = lens.iter().sum::<f64>() / 4.0;
    if avg <= DIR_EPS {
        return f64::INFINITY;
    }
    let Some(angles) = interior_angles(pts) else {
        return f64::INFINITY;
    };
    let edge_term: f64 = lens.iter().map(|l| (l - avg).abs() / avg).sum();
    let angle_term: f64 = angles
        .iter()
        .map(|th| (th - FRAC_PI_2).abs() / FRAC_PI_2)
        .sum();
    edge_term + angle_term
}
