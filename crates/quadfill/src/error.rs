use thiserror::Error;

pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors surfaced by the meshing pipeline.
///
/// Intersection routines report "no intersection" (including singular systems)
/// as an empty result, and the arc-length walk reports "ran off the curve" as
/// `None`; neither is an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Zero-length tangent or direction with no usable fallback.
    #[error("degenerate geometry: {what}")]
    DegenerateGeometry { what: String },
    /// Segments that do not chain, an empty path, several sub-paths, or too few points.
    #[error("malformed contour: {reason}")]
    MalformedContour { reason: String },
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    /// The triangulator rejected its input or returned out-of-range indices.
    #[error("triangulation failed: {reason}")]
    Triangulation { reason: String },
    #[error("point cloud exceeded {limit} points; choose a larger spacing or a smaller shape")]
    PointBudgetExceeded { limit: usize },
}

impl MeshError {
    pub(crate) fn degenerate(what: impl Into<String>) -> Self {
        Self::DegenerateGeometry { what: what.into() }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedContour {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn triangulation(reason: impl Into<String>) -> Self {
        Self::Triangulation {
            reason: reason.into(),
        }
    }
}
