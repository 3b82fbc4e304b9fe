//! Triangulation seam.
//!
//! The merger only needs index triples over the frozen cloud; any planar
//! triangulation where every edge borders at most two triangles will do.
//! `DelaunayTriangulator` is the default, backed by `spade`.

use nalgebra::Vector2;
use spade::{DelaunayTriangulation, Point2 as Pt2, Triangulation};

use crate::error::{MeshError, Result};

/// Produces triangles as index triples into `points`.
pub trait Triangulator {
    fn triangulate(&self, points: &[Vector2<f64>]) -> Result<Vec<[usize; 3]>>;
}

/// Unconstrained Delaunay triangulation of the point set.
///
/// Coincident input points collapse onto the first occurrence; later copies
/// are never referenced by the output.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelaunayTriangulator;

impl Triangulator for DelaunayTriangulator {
    fn triangulate(&self, points: &[Vector2<f64>]) -> Result<Vec<[usize; 3]>> {
        let mut dt = DelaunayTriangulation::<Pt2<f64>>::new();
        // Vertex handle index -> first input index inserted at that position.
        let mut handle_to_input: Vec<usize> = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            let handle = dt
                .insert(Pt2::new(p.x, p.y))
                .map_err(|e| MeshError::triangulation(format!("point {i} {p:?}: {e:?}")))?;
            if handle.index() == handle_to_input.len() {
                handle_to_input.push(i);
            }
        }
        let tris: Vec<[usize; 3]> = dt
            .inner_faces()
            .map(|face| face.vertices().map(|v| handle_to_input[v.fix().index()]))
            .collect();
        tracing::debug!(
            points = points.len(),
            vertices = dt.num_vertices(),
            triangles = tris.len(),
            "delaunay"
        );
        Ok(tris)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn sorted(mut tris: Vec<[usize; 3]>) -> Vec<[usize; 3]> {
        for t in &mut tris {
            t.sort_unstable();
        }
        tris.sort_unstable();
        tris
    }

    #[test]
    fn four_points_give_two_triangles() {
        let pts = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.1, 1.0],
            vector![0.0, 1.0],
        ];
        let tris = DelaunayTriangulator.triangulate(&pts).unwrap();
        assert_eq!(tris.len(), 2);
        for t in &tris {
            assert!(t.iter().all(|&i| i < pts.len()));
        }
    }

    #[test]
    fn duplicates_map_to_first_occurrence() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 0.0],
        ];
        let tris = DelaunayTriangulator.triangulate(&pts).unwrap();
        assert_eq!(sorted(tris), vec![[0, 1, 2]]);
    }

    #[test]
    fn collinear_points_have_no_faces() {
        let pts: Vec<_> = (0..5).map(|k| vector![k as f64, 0.0]).collect();
        assert!(DelaunayTriangulator.triangulate(&pts).unwrap().is_empty());
    }

    #[test]
    fn non_finite_point_is_an_error() {
        let pts = [vector![0.0, 0.0], vector![f64::NAN, 1.0]];
        assert!(matches!(
            DelaunayTriangulator.triangulate(&pts),
            Err(MeshError::Triangulation { .. })
        ));
    }
}
