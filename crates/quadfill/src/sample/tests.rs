use super::*;
use crate::contour::{Contour, PathCommand};
use crate::MeshError;
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

fn circle(r: f64) -> Contour {
    let k = 0.552_284_749_8 * r;
    Contour::from_commands(&[
        PathCommand::MoveTo(vector![r, 0.0]),
        PathCommand::CurveTo(vector![r, k], vector![k, r], vector![0.0, r]),
        PathCommand::CurveTo(vector![-k, r], vector![-r, k], vector![-r, 0.0]),
        PathCommand::CurveTo(vector![-r, -k], vector![-k, -r], vector![0.0, -r]),
        PathCommand::CurveTo(vector![k, -r], vector![r, -k], vector![r, 0.0]),
        PathCommand::Close,
    ])
    .unwrap()
}

#[test]
fn square_side_ten_spacing_two() {
    let cloud = sample_boundary(&square(10.0), 2.0).unwrap();
    assert_eq!(cloud.count(PointKind::Vertex), 4);
    assert_eq!(cloud.count(PointKind::EdgeSample), 16);
    assert_eq!(cloud.len(), 20);

    // First segment: vertex at the origin, then x = 2, 4, 6, 8 on y = 0.
    assert_eq!(cloud[0].kind, PointKind::Vertex);
    for (k, p) in cloud.points()[1..5].iter().enumerate() {
        assert_eq!(p.kind, PointKind::EdgeSample);
        assert!((p.location - vector![2.0 * (k + 1) as f64, 0.0]).norm() < 1e-12);
        let n = p.normal.unwrap();
        assert!((n - vector![0.0, 1.0]).norm() < 1e-12, "normal faces inside");
    }
}

#[test]
fn vertex_normal_bisects_the_corner() {
    let cloud = sample_boundary(&square(10.0), 2.0).unwrap();
    let n = cloud[0].normal.unwrap();
    let diag = vector![1.0, 1.0].normalize();
    assert!((n - diag).norm() < 1e-12);
}

#[test]
fn creation_order_is_strictly_increasing() {
    let cloud = sample_boundary(&circle(3.0), 0.5).unwrap();
    for w in cloud.points().windows(2) {
        assert!(w[0].creation_order < w[1].creation_order);
    }
}

#[test]
fn short_segments_only_emit_their_vertex() {
    // Right triangle with legs 1 and 10; spacing 2 leaves the short leg bare.
    let tri = Contour::polygon(&[vector![0.0, 0.0], vector![10.0, 0.0], vector![10.0, 1.0]])
        .unwrap();
    let cloud = sample_boundary(&tri, 2.0).unwrap();
    assert_eq!(cloud.count(PointKind::Vertex), 3);
    let on_short_leg = cloud
        .iter()
        .filter(|p| p.kind == PointKind::EdgeSample && (p.location.x - 10.0).abs() < 1e-12)
        .count();
    assert_eq!(on_short_leg, 0);
    // Long leg: n = 5 → 4 samples; hypotenuse ≈ 10.05 → n = 5 → 4 samples.
    assert_eq!(cloud.count(PointKind::EdgeSample), 8);
}

#[test]
fn circle_samples_lie_on_curve_evenly_spaced() {
    let r = 5.0;
    let cloud = sample_boundary(&circle(r), 1.0).unwrap();
    assert_eq!(cloud.count(PointKind::Vertex), 4);
    let quarter_len = crate::contour::Segment::cubic(
        vector![r, 0.0],
        vector![r, 0.552_284_749_8 * r],
        vector![0.552_284_749_8 * r, r],
        vector![0.0, r],
    )
    .length();
    let n = quarter_len.floor();
    let expected_step = quarter_len / n;
    assert_eq!(cloud.count(PointKind::EdgeSample), 4 * (n as usize - 1));

    for p in cloud.iter() {
        assert!((p.location.norm() - r).abs() < 0.01);
        if let Some(nrm) = p.normal {
            assert!(nrm.dot(&(-p.location)) > 0.0, "normal faces the centre");
        }
    }
    // Consecutive points within the first arc are about one step apart.
    let first_arc: Vec<_> = cloud.points()[..n as usize].iter().map(|p| p.location).collect();
    for w in first_arc.windows(2) {
        assert!(((w[1] - w[0]).norm() - expected_step).abs() < 0.1);
    }
}

#[test]
fn clockwise_contour_normals_still_face_inside() {
    let cw = Contour::polygon(&[
        vector![0.0, 0.0],
        vector![0.0, 6.0],
        vector![6.0, 6.0],
        vector![6.0, 0.0],
    ])
    .unwrap();
    let cloud = sample_boundary(&cw, 2.0).unwrap();
    let centre = vector![3.0, 3.0];
    for p in cloud.iter().filter(|p| p.kind == PointKind::EdgeSample) {
        let n = p.normal.unwrap();
        assert!(n.dot(&(centre - p.location)) > 0.0);
    }
}

#[test]
fn rejects_bad_spacing() {
    assert!(matches!(
        sample_boundary(&square(1.0), 0.0),
        Err(MeshError::InvalidConfig { .. })
    ));
    assert!(sample_boundary(&square(1.0), -1.0).is_err());
}

#[test]
fn merged_and_vertex_points_fall_back_to_default_direction() {
    let mut cloud = PointCloud::new();
    let i = cloud.push(PointKind::Interior, vector![1.0, 1.0], None);
    assert_eq!(cloud[i].growth_direction(), DEFAULT_NORMAL);
    assert!(cloud[i].is_interior());
    let j = cloud.push(PointKind::Vertex, vector![0.0, 0.0], Some(vector![0.0, 1.0]));
    assert!(cloud[j].is_boundary());
    assert_eq!(cloud[j].creation_order, cloud[i].creation_order + 1);
}
