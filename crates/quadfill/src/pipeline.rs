//! End-to-end driver: contour → boundary samples → interior fill → triangles → quads.
//!
//! Each stage consumes the complete output of the previous one; the cloud is
//! frozen once the front has finished and every index in the mesh refers to it.

use crate::cfg::MeshCfg;
use crate::contour::Contour;
use crate::error::{MeshError, Result};
use crate::front::{advance_front, FrontStats};
use crate::quad::{merge_quads, MergeStats, QuadMesh};
use crate::sample::{sample_boundary, PointCloud, PointKind};
use crate::triangulate::{DelaunayTriangulator, Triangulator};

/// Per-stage counters of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub boundary_points: usize,
    pub interior_points: usize,
    pub front: FrontStats,
    /// Triangles handed to the merger.
    pub triangles_in: usize,
    pub merge: MergeStats,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshOutput {
    pub cloud: PointCloud,
    pub mesh: QuadMesh,
    pub stats: MeshStats,
}

/// Boundary sampling followed by front advancement.
pub fn fill_points(contour: &Contour, cfg: &MeshCfg) -> Result<(PointCloud, FrontStats)> {
    cfg.validate()?;
    let boundary = sample_boundary(contour, cfg.spacing)?;
    advance_front(contour, boundary, cfg)
}

/// Run the whole pipeline with a caller-supplied triangulator.
///
/// Fails with `MalformedContour` when the filled cloud has fewer than three
/// points: the shape is too small for the requested spacing.
pub fn mesh_contour<T: Triangulator + ?Sized>(
    contour: &Contour,
    cfg: &MeshCfg,
    triangulator: &T,
) -> Result<MeshOutput> {
    let (cloud, front) = fill_points(contour, cfg)?;
    if cloud.len() < 3 {
        return Err(MeshError::malformed(format!(
            "only {} points at spacing {}; choose a larger shape",
            cloud.len(),
            cfg.spacing
        )));
    }
    let triangles = triangulator.triangulate(&cloud.locations())?;
    let (mesh, merge) = merge_quads(contour, &cloud, &triangles, cfg)?;
    let interior_points = cloud.count(PointKind::Interior);
    let stats = MeshStats {
        boundary_points: cloud.len() - interior_points,
        interior_points,
        front,
        triangles_in: triangles.len(),
        merge,
    };
    tracing::info!(
        spacing = cfg.spacing,
        points = cloud.len(),
        interior = stats.interior_points,
        triangles = mesh.triangles.len(),
        quads = mesh.quads.len(),
        "mesh_contour done"
    );
    Ok(MeshOutput { cloud, mesh, stats })
}

/// `mesh_contour` with the built-in Delaunay triangulator.
pub fn mesh_contour_delaunay(contour: &Contour, cfg: &MeshCfg) -> Result<MeshOutput> {
    mesh_contour(contour, cfg, &DelaunayTriangulator)
}
