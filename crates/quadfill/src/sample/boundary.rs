use nalgebra::Vector2;

use crate::cfg::{DIR_EPS, PARAM_EPS};
use crate::contour::{Contour, Segment};
use crate::curve::{normal, t_at_arc_length, Facing, Orientation};
use crate::error::{MeshError, Result};

use super::types::{PointCloud, PointKind};

/// Emit one `Vertex` per segment start and `n-1` evenly spaced `EdgeSample`s per
/// segment, where `n = floor(length / spacing)`.
///
/// Samples on a segment are spaced `length / n` apart (arc length for cubics,
/// found by walking `t_at_arc_length`). Each edge sample carries the unit normal
/// facing the filled region; vertices carry the bisector of the adjacent
/// segment normals when it is defined.
pub fn sample_boundary(contour: &Contour, spacing: f64) -> Result<PointCloud> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(MeshError::invalid_config(format!(
            "spacing must be finite and > 0, got {spacing}"
        )));
    }
    let orientation = contour.orientation();
    let segments = contour.segments();
    let mut cloud = PointCloud::new();
    for (i, seg) in segments.iter().enumerate() {
        let prev = &segments[(i + segments.len() - 1) % segments.len()];
        cloud.push(
            PointKind::Vertex,
            seg.start(),
            corner_normal(prev, seg, orientation),
        );

        let length = seg.length();
        // Slack keeps exact multiples (0.3 / 0.1) from rounding down.
        let n = (length / spacing + PARAM_EPS).floor();
        if !n.is_finite() || n < 1.0 {
            continue;
        }
        let n = n as usize;
        let step = length / n as f64;
        let mut t = 0.0;
        for k in 1..n {
            t = match seg {
                Segment::Line { .. } => k as f64 / n as f64,
                Segment::Cubic { ctrl } => match t_at_arc_length(ctrl, t, step) {
                    Some(next) => next,
                    None => {
                        tracing::warn!(
                            segment = i,
                            sample = k,
                            "arc-length walk ran off the curve; clamping to t=1"
                        );
                        1.0
                    }
                },
            };
            let tan = seg.tangent_or_chord(t)?;
            cloud.push(
                PointKind::EdgeSample,
                seg.point_at(t),
                Some(normal(tan, orientation, Facing::Interior)),
            );
        }
    }
    tracing::debug!(
        segments = segments.len(),
        vertices = cloud.count(PointKind::Vertex),
        edge_samples = cloud.count(PointKind::EdgeSample),
        spacing,
        "sample_boundary"
    );
    Ok(cloud)
}

/// Normalized sum of the interior normals on either side of a corner.
fn corner_normal(prev: &Segment, next: &Segment, orientation: Orientation) -> Option<Vector2<f64>> {
    let before = prev.tangent_or_chord(1.0).ok()?;
    let after = next.tangent_or_chord(0.0).ok()?;
    let sum = normal(before, orientation, Facing::Interior)
        + normal(after, orientation, Facing::Interior);
    let len = sum.norm();
    if len <= DIR_EPS {
        None
    } else {
        Some(sum / len)
    }
}
