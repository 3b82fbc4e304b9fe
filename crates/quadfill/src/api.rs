//! Curated re-exports of the whole pipeline.
//!
//! Not a stability promise: names follow the modules and change with them.

// Curves
pub use crate::curve::{
    cubic_roots, derivative, estimate_length, eval_cubic, hull_length,
    intersect_cubic_with_line, intersect_line_with_ray, normal, rotate_ccw, rotate_cw,
    t_at_arc_length, tangent, CubicCtrl, Facing, Orientation,
};
// Contours
pub use crate::contour::{
    is_inside, turning_angle_sum, Contour, ContourBuilder, PathCommand, Segment,
};
// Points
pub use crate::sample::{
    sample_boundary, PointCloud, PointKind, SampledPoint, DEFAULT_NORMAL,
};
pub use crate::front::{advance_front, FrontStats};
// Meshing
pub use crate::pipeline::{
    fill_points, mesh_contour, mesh_contour_delaunay, MeshOutput, MeshStats,
};
pub use crate::quad::{merge_quads, quad_score, MergeStats, Quad, QuadMesh, Triangle};
pub use crate::triangulate::{DelaunayTriangulator, Triangulator};
// Random inputs
pub use crate::shapes::{
    clip_segment, draw_contour_radial, draw_radial_points, jittered_grid_edges,
    jittered_grid_sites, JitterGridCfg, RadialCfg, ReplayToken, VertexCount,
};
// Configuration
pub use crate::cfg::{MeshCfg, DEFAULT_MAX_POINTS, DEFAULT_QUAD_SCORE_THRESHOLD};
pub use crate::error::{MeshError, Result};
