//! Curve math for line and cubic Bezier segments.
//!
//! Purpose
//! - Evaluate cubics, estimate their length, and walk them by arc length so the
//!   boundary sampler can place evenly spaced points.
//! - Provide unit tangents and side-aware normals relative to the contour's
//!   orientation.
//! - Intersect cubics and lines with lines and rays (ray casting needs both).
//!
//! Conventions
//! - Points and vectors are `nalgebra::Vector2<f64>`; cubics are passed as their
//!   four control points `[p0, p1, p2, p3]`.
//! - Parameters are not clamped by the evaluators; callers clamp.
//!
//! References
//! - Code cross-refs: `contour::{Segment, Contour}`, `sample::sample_boundary`,
//!   `contour::is_inside`

mod bezier;
mod intersect;
mod roots;
mod types;

pub use bezier::{
    derivative, estimate_length, eval_cubic, hull_length, normal, t_at_arc_length, tangent,
    CubicCtrl,
};
pub use intersect::{intersect_cubic_with_line, intersect_line_with_ray};
pub use roots::cubic_roots;
pub use types::{cross, rotate_ccw, rotate_cw, Facing, Orientation};

pub(crate) use intersect::cubic_line_params;
