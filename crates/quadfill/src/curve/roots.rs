use nalgebra::{Complex, Matrix3};

use crate::cfg::DET_EPS;

/// Roots of `c[0]·t³ + c[1]·t² + c[2]·t + c[3]`, real and complex.
///
/// Leading coefficients that are negligible relative to the largest one are
/// dropped, so near-degenerate cubics are solved as quadratics or lines. The
/// cubic case uses the eigenvalues of the companion matrix. An identically zero
/// polynomial has no isolated roots and yields an empty list.
pub fn cubic_roots(c: [f64; 4]) -> Vec<Complex<f64>> {
    let scale = c.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if !scale.is_finite() || scale == 0.0 {
        return Vec::new();
    }
    let Some(lead) = c.iter().position(|v| v.abs() > DET_EPS * scale) else {
        return Vec::new();
    };
    let p = &c[lead..];
    let roots = match p.len() {
        4 => companion_roots(p[0], p[1], p[2], p[3]),
        3 => quadratic_roots(p[0], p[1], p[2]),
        2 => vec![Complex::new(-p[1] / p[0], 0.0)],
        _ => Vec::new(),
    };
    roots
        .into_iter()
        .filter(|z| z.re.is_finite() && z.im.is_finite())
        .collect()
}

fn companion_roots(a: f64, b: f64, c: f64, d: f64) -> Vec<Complex<f64>> {
    // First row carries the normalized coefficients, ones on the subdiagonal.
    #[rustfmt::skip]
    let companion = Matrix3::new(
        -b / a, -c / a, -d / a,
        1.0,    0.0,    0.0,
        0.0,    1.0,    0.0,
    );
    companion.complex_eigenvalues().iter().copied().collect()
}

fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<Complex<f64>> {
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        let re = -b / (2.0 * a);
        let im = (-disc).sqrt() / (2.0 * a);
        return vec![Complex::new(re, im), Complex::new(re, -im)];
    }
    // Numerically stable pairing: avoid cancellation in -b ± sqrt(disc).
    let q = -0.5 * (b + b.signum() * disc.sqrt());
    if q == 0.0 {
        return vec![Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)];
    }
    vec![Complex::new(q / a, 0.0), Complex::new(c / q, 0.0)]
}
