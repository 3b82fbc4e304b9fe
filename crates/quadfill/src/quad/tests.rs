use super::*;
use crate::front::advance_front;
use crate::sample::{sample_boundary, PointKind};
use crate::shapes::{draw_contour_radial, RadialCfg, ReplayToken};
use crate::triangulate::{DelaunayTriangulator, Triangulator};
use nalgebra::vector;

fn square(side: f64) -> Contour {
    Contour::polygon(&[
        vector![0.0, 0.0],
        vector![side, 0.0],
        vector![side, side],
        vector![0.0, side],
    ])
    .unwrap()
}

fn cloud_of(kind: PointKind, pts: &[Vector2<f64>]) -> PointCloud {
    let mut cloud = PointCloud::new();
    for &p in pts {
        cloud.push(kind, p, None);
    }
    cloud
}

fn sorted3(mut t: Triangle) -> Triangle {
    t.sort_unstable();
    t
}

#[test]
fn square_scores_zero_and_rectangle_scores_edge_deviation() {
    let sq = [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0]];
    assert!(quad_score(&sq).abs() < 1e-12);
    let mut cw = sq;
    cw.reverse();
    assert!(quad_score(&cw).abs() < 1e-12);
    let rect = [vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 1.0], vector![0.0, 1.0]];
    assert!((quad_score(&rect) - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn reflex_corner_is_penalised() {
    // Dart: the corner at (1, 0.5) is reflex (> π).
    let dart = [vector![0.0, 0.0], vector![1.0, 0.5], vector![2.0, 0.0], vector![1.0, 2.0]];
    let angles = score::interior_angles(&dart).unwrap();
    assert!(angles[1] > std::f64::consts::PI);
    assert!((angles.iter().sum::<f64>() - 2.0 * std::f64::consts::PI).abs() < 1e-9);
    assert!(quad_score(&dart) > 2.0);
}

#[test]
fn degenerate_quad_scores_infinity() {
    let flat = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0], vector![3.0, 0.0]];
    assert_eq!(quad_score(&flat), f64::INFINITY);
    let point = [vector![1.0, 1.0]; 4];
    assert_eq!(quad_score(&point), f64::INFINITY);
}

#[test]
fn two_right_triangles_fuse_across_the_diagonal() {
    let cloud = cloud_of(
        PointKind::Interior,
        &[vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0]],
    );
    let tris = [[0, 1, 2], [0, 2, 3]];
    let (mesh, stats) = merge_quads(&square(1.0), &cloud, &tris, &MeshCfg::default()).unwrap();
    assert!(mesh.triangles.is_empty());
    assert_eq!(mesh.quads, vec![[0, 1, 2, 3]]);
    assert_eq!(stats.longest_strict, 1);
    assert_eq!(stats.quads(), 1);
}

#[test]
fn differing_timestamps_wait_for_the_relaxed_pass() {
    let cloud = cloud_of(
        PointKind::Interior,
        &[vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0], vector![1.0, 1.0]],
    );
    // Timestamps 0 and 1.
    let tris = [[0, 1, 2], [1, 3, 2]];
    let (mesh, stats) = merge_quads(&square(1.0), &cloud, &tris, &MeshCfg::default()).unwrap();
    assert_eq!(stats.longest_strict, 0);
    assert_eq!(stats.longest_relaxed, 1);
    assert_eq!(mesh.quads, vec![[1, 0, 2, 3]]);
}

#[test]
fn score_pass_uses_threshold() {
    // Parallelogram split along its short diagonal (1, 3): never a longest edge.
    let cloud = cloud_of(
        PointKind::Interior,
        &[vector![0.0, 0.0], vector![2.0, 0.0], vector![3.0, 1.0], vector![1.0, 1.0]],
    );
    let tris = [[0, 1, 3], [1, 2, 3]];
    let contour = square(4.0);

    let (mesh, stats) = merge_quads(&contour, &cloud, &tris, &MeshCfg::default()).unwrap();
    assert_eq!(stats.quads(), 0);
    assert_eq!(mesh.triangles, tris.to_vec());

    let loose = MeshCfg {
        quad_score_threshold: 3.0,
        ..MeshCfg::default()
    };
    let (mesh, stats) = merge_quads(&contour, &cloud, &tris, &loose).unwrap();
    assert_eq!(stats.nice_relaxed, 1);
    assert_eq!(mesh.quads, vec![[1, 0, 3, 2]]);
}

#[test]
fn boundary_bridge_over_a_notch_is_pruned() {
    let l_shape = [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 2.0],
        vector![0.0, 2.0],
    ];
    let contour = Contour::polygon(&l_shape).unwrap();
    let cloud = cloud_of(PointKind::Vertex, &l_shape);
    let bridge = [2, 4, 3];
    let tris = [[0, 1, 2], [0, 2, 3], [0, 3, 5], [3, 4, 5], bridge];
    let (mesh, stats) = merge_quads(&contour, &cloud, &tris, &MeshCfg::default()).unwrap();
    assert_eq!(stats.pruned, 1);
    assert!(!mesh.triangles.contains(&bridge));
    assert!(mesh.quads.iter().all(|q| !q.contains(&4) || !q.contains(&2)));
    assert_eq!(mesh.triangles.len() + 2 * mesh.quads.len() + stats.pruned, tris.len());
}

#[test]
fn bad_indices_are_rejected() {
    let cloud = cloud_of(
        PointKind::Interior,
        &[vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]],
    );
    let cfg = MeshCfg::default();
    assert!(matches!(
        merge_quads(&square(1.0), &cloud, &[[0, 1, 3]], &cfg),
        Err(MeshError::Triangulation { .. })
    ));
    assert!(matches!(
        merge_quads(&square(1.0), &cloud, &[[0, 1, 1]], &cfg),
        Err(MeshError::Triangulation { .. })
    ));
}

#[test]
fn edges_with_three_triangles_are_not_fused() {
    let cloud = cloud_of(
        PointKind::Interior,
        &[
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![0.2, 0.9],
        ],
    );
    let tris = [[0, 1, 2], [0, 1, 3], [0, 1, 4]];
    let (mesh, stats) = merge_quads(&square(1.0), &cloud, &tris, &MeshCfg::default()).unwrap();
    assert_eq!(stats.non_manifold_edges, 1);
    assert!(mesh.quads.is_empty());
    assert_eq!(mesh.triangles.len(), 3);
}

#[test]
fn polygons_lists_triangles_then_quads() {
    let mesh = QuadMesh {
        triangles: vec![[0, 1, 2]],
        quads: vec![[2, 3, 4, 5], [5, 6, 7, 8]],
    };
    assert_eq!(mesh.face_count(), 3);
    let faces: Vec<&[usize]> = mesh.polygons().collect();
    assert_eq!(faces, vec![&[0, 1, 2][..], &[2, 3, 4, 5][..], &[5, 6, 7, 8][..]]);
}

fn filled_radial() -> (Contour, PointCloud, Vec<Triangle>) {
    let contour = draw_contour_radial(
        RadialCfg {
            smooth: true,
            ..RadialCfg::default()
        },
        ReplayToken { seed: 5, index: 1 },
    )
    .unwrap();
    let cfg = MeshCfg::with_spacing(1.2);
    let boundary = sample_boundary(&contour, cfg.spacing).unwrap();
    let (cloud, _) = advance_front(&contour, boundary, &cfg).unwrap();
    let tris = DelaunayTriangulator.triangulate(&cloud.locations()).unwrap();
    (contour, cloud, tris)
}

#[test]
fn merging_twice_is_bit_identical() {
    let (contour, cloud, tris) = filled_radial();
    let cfg = MeshCfg::default();
    let a = merge_quads(&contour, &cloud, &tris, &cfg).unwrap();
    let b = merge_quads(&contour, &cloud, &tris, &cfg).unwrap();
    assert_eq!(a, b);
    assert!(!a.0.quads.is_empty());
}

#[test]
fn output_indices_in_range_and_triangles_used_once() {
    let (contour, cloud, tris) = filled_radial();
    let (mesh, stats) = merge_quads(&contour, &cloud, &tris, &MeshCfg::default()).unwrap();
    assert!(mesh.polygons().flatten().all(|&v| v < cloud.len()));
    assert_eq!(
        mesh.triangles.len() + 2 * mesh.quads.len() + stats.pruned,
        tris.len()
    );
    let kept: Vec<Triangle> = mesh.triangles.iter().copied().map(sorted3).collect();
    for q in &mesh.quads {
        let halves = [sorted3([q[0], q[1], q[2]]), sorted3([q[0], q[2], q[3]])];
        for h in halves {
            assert!(!kept.contains(&h), "triangle {h:?} is both kept and fused");
        }
    }
}
