//! Quad-dominant meshing of closed 2D contours.
//!
//! Pipeline
//! - `contour`: path commands → closed `Contour` of line/cubic segments, with a
//!   fixed orientation and an even-odd inclusion test.
//! - `sample`: evenly spaced boundary points with interior-facing normals.
//! - `front`: grow interior points from the boundary, never closer than `spacing/√2`.
//! - `triangulate`: external-triangulator seam (Delaunay via `spade` by default).
//! - `quad`: fuse triangle pairs into quads (longest-edge, then shape score).
//! - `pipeline`: runs every stage in order.
//!
//! API Policy
//! - `api` and `prelude` are convenience surfaces; module paths are the source of truth.

pub mod api;
pub mod cfg;
pub mod contour;
pub mod curve;
pub mod error;
pub mod front;
pub mod pipeline;
pub mod quad;
pub mod sample;
pub mod shapes;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::MeshCfg;
pub use error::{MeshError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::MeshCfg;
    pub use crate::contour::{Contour, ContourBuilder, PathCommand, Segment};
    pub use crate::error::{MeshError, Result};
    pub use crate::pipeline::{mesh_contour, mesh_contour_delaunay, MeshOutput, MeshStats};
    pub use crate::quad::QuadMesh;
    pub use crate::sample::{PointCloud, PointKind, SampledPoint};
    pub use crate::triangulate::{DelaunayTriangulator, Triangulator};
    pub use nalgebra::Vector2 as Vec2;
}
