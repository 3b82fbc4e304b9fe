use nalgebra::{Matrix2, Vector2};

use crate::cfg::{DET_EPS, IMAG_EPS, PARAM_EPS};

use super::bezier::{eval_cubic, CubicCtrl};
use super::roots::cubic_roots;

/// Intersections of a cubic with the segment `line[0]→line[1]`, or with the ray
/// from `line[0]` through `line[1]` when `as_ray` is set.
///
/// The cubic's power-basis `x(t), y(t)` is substituted into the implicit line
/// `A·x + B·y + C = 0`; real roots with `t∈[0,1]` are kept when their line
/// parameter `s` satisfies `s∈[0,1]` (segment) or `s≥0` (ray). Tangential
/// contacts are reported once per root, so a double root appears twice.
pub fn intersect_cubic_with_line(
    ctrl: &CubicCtrl,
    line: &[Vector2<f64>; 2],
    as_ray: bool,
) -> Vec<Vector2<f64>> {
    let [l0, l1] = *line;
    let dir = l1 - l0;
    let mut out = Vec::new();
    for t in cubic_line_params(ctrl, line) {
        let x = eval_cubic(ctrl, t.clamp(0.0, 1.0));
        // Solve for s on the axis where the line direction is larger; for a
        // vertical line that is the y-equation.
        let s = if dir.x.abs() >= dir.y.abs() {
            (x.x - l0.x) / dir.x
        } else {
            (x.y - l0.y) / dir.y
        };
        if s < -PARAM_EPS {
            continue;
        }
        if !as_ray && s > 1.0 + PARAM_EPS {
            continue;
        }
        out.push(x);
    }
    out
}

/// Real curve parameters `t∈[-ε, 1+ε]` where the cubic meets the infinite line
/// through `line[0]` and `line[1]`, in root-finder order. A degenerate line has none.
pub(crate) fn cubic_line_params(ctrl: &CubicCtrl, line: &[Vector2<f64>; 2]) -> Vec<f64> {
    let [l0, l1] = *line;
    let dir = l1 - l0;
    if dir.norm_squared() <= DET_EPS * DET_EPS {
        return Vec::new();
    }
    // A x + B y + C = 0 through l0 and l1.
    let a = l1.y - l0.y;
    let b = l0.x - l1.x;
    let c = l0.x * (l0.y - l1.y) + l0.y * (l1.x - l0.x);

    // Power basis: B(t) = k3 t³ + k2 t² + k1 t + k0.
    let [p0, p1, p2, p3] = *ctrl;
    let k3 = -p0 + p1 * 3.0 - p2 * 3.0 + p3;
    let k2 = p0 * 3.0 - p1 * 6.0 + p2 * 3.0;
    let k1 = (p1 - p0) * 3.0;
    let k0 = p0;
    let poly = [
        a * k3.x + b * k3.y,
        a * k2.x + b * k2.y,
        a * k1.x + b * k1.y,
        a * k0.x + b * k0.y + c,
    ];
    cubic_roots(poly)
        .into_iter()
        .filter(|z| z.im.abs() <= IMAG_EPS)
        .map(|z| z.re)
        .filter(|t| (-PARAM_EPS..=1.0 + PARAM_EPS).contains(t))
        .collect()
}

/// Intersection of the segment `line[0]→line[1]` with the ray from `ray[0]`
/// through `ray[1]`: zero or one point.
///
/// Solves `ray[0] + dist·(ray[1]-ray[0]) = line[0] + t·(line[1]-line[0])` with
/// `dist ≥ 0` and `t∈[0,1]`. Parallel or degenerate inputs give an empty list.
pub fn intersect_line_with_ray(
    line: &[Vector2<f64>; 2],
    ray: &[Vector2<f64>; 2],
) -> Vec<Vector2<f64>> {
    let d = ray[1] - ray[0];
    let e = line[1] - line[0];
    let m = Matrix2::from_columns(&[d, -e]);
    let det = m.determinant();
    if !det.is_finite() || det.abs() <= DET_EPS * (d.norm() * e.norm()).max(1.0) {
        return Vec::new();
    }
    let Some(inv) = m.try_inverse() else {
        return Vec::new();
    };
    let sol = inv * (line[0] - ray[0]);
    let (dist, t) = (sol[0], sol[1]);
    if dist < -PARAM_EPS || !(-PARAM_EPS..=1.0 + PARAM_EPS).contains(&t) {
        return Vec::new();
    }
    vec![line[0] + e * t.clamp(0.0, 1.0)]
}
