//! Sampled points, point clouds, and boundary sampling.
//!
//! Purpose
//! - `SampledPoint` tags every point with its origin (`PointKind`), a growth
//!   normal, and a creation counter used to group triangles by age later.
//! - `PointCloud` owns the points and the counter; it is the only source of
//!   creation orders during one run.
//! - `sample_boundary` walks the contour at roughly uniform arc-length spacing.
//!
//! References
//! - Code cross-refs: `curve::t_at_arc_length`, `front::advance_front`,
//!   `quad::merge_quads`

mod boundary;
mod types;

pub use boundary::sample_boundary;
pub use types::{PointCloud, PointKind, SampledPoint, DEFAULT_NORMAL};

#[cfg(test)]
mod tests;
