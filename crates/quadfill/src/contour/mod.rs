//! Closed contours built from line and cubic segments.
//!
//! Purpose
//! - Turn an absolute move/line/curve/close command stream into a closed,
//!   chained `Contour` and fix its orientation once.
//! - Answer point-in-contour queries by ray casting (even-odd rule).
//!
//! Invariants
//! - Segment `i` ends where segment `i+1` starts, and the last segment ends at
//!   the first segment's start (snapped exactly when within `CHAIN_EPS`).
//! - `Contour::orientation` is computed at construction and never changes.
//!
//! References
//! - Code cross-refs: `curve::{intersect_cubic_with_line, intersect_line_with_ray}`,
//!   `sample::sample_boundary`, `front::advance_front`, `quad::merge_quads`

mod build;
mod inside;
mod types;

pub use build::{turning_angle_sum, ContourBuilder, PathCommand};
pub use inside::is_inside;
pub use types::{Contour, Segment};
