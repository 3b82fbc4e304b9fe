use super::*;
use crate::contour::PathCommand;
use crate::sample::sample_boundary;
use crate::shapes::{draw_contour_radial, RadialCfg, ReplayToken, VertexCount};
use nalgebra::vector;
use proptest::prelude::*;

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

fn fill(contour: &Contour, cfg: &MeshCfg) -> (PointCloud, FrontStats) {
    let boundary = sample_boundary(contour, cfg.spacing).unwrap();
    advance_front(contour, boundary, cfg).unwrap()
}

fn min_interior_distance(cloud: &PointCloud) -> f64 {
    let interior: Vec<_> = cloud.iter().filter(|p| p.is_interior()).collect();
    let mut best = f64::INFINITY;
    for (i, a) in interior.iter().enumerate() {
        for b in &interior[i + 1..] {
            best = best.min((a.location - b.location).norm());
        }
    }
    best
}

#[test]
fn square_fills_a_spacing_two_lattice() {
    let contour = square(10.0);
    let cfg = MeshCfg::with_spacing(2.0);
    let (cloud, stats) = fill(&contour, &cfg);

    assert_eq!(cloud.count(PointKind::Vertex), 4);
    assert_eq!(cloud.count(PointKind::EdgeSample), 16);
    assert_eq!(cloud.count(PointKind::Interior), 16);
    for p in cloud.iter().filter(|p| p.is_interior()) {
        let snapped = p.location.map(|c| (c / 2.0).round() * 2.0);
        assert!((p.location - snapped).norm() < 1e-9, "{:?}", p.location);
        assert!(snapped.x >= 2.0 && snapped.x <= 8.0);
        assert!(snapped.y >= 2.0 && snapped.y <= 8.0);
    }
    assert!(min_interior_distance(&cloud) >= cfg.merge_threshold() - 1e-9);
    assert!(stats.accepted >= 16);
    assert!(stats.expanded >= 16);
}

#[test]
fn boundary_points_are_kept_in_place() {
    let contour = circle(10.0);
    let cfg = MeshCfg::with_spacing(1.5);
    let boundary = sample_boundary(&contour, cfg.spacing).unwrap();
    let (cloud, _) = advance_front(&contour, boundary.clone(), &cfg).unwrap();
    assert_eq!(&cloud.points()[..boundary.len()], boundary.points());
    assert!(cloud.points()[boundary.len()..].iter().all(|p| p.is_interior()));
}

#[test]
fn circle_interior_is_spread_and_inside() {
    let contour = circle(10.0);
    let cfg = MeshCfg::with_spacing(1.0);
    let (cloud, stats) = fill(&contour, &cfg);
    let interior = cloud.count(PointKind::Interior);
    // Area 314 at unit spacing; the merge radius allows up to ~2 points per unit².
    assert!(interior > 150 && interior < 700, "interior = {interior}");
    assert!(min_interior_distance(&cloud) >= cfg.merge_threshold() - 1e-9);
    for p in cloud.iter().filter(|p| p.is_interior()) {
        assert!(p.location.norm() < 10.0, "{:?}", p.location);
    }
    assert!(stats.rejected_outside > 0);
}

#[test]
fn creation_order_stays_unique_and_continues_after_boundary() {
    let contour = square(6.0);
    let cfg = MeshCfg::with_spacing(1.0);
    let boundary = sample_boundary(&contour, cfg.spacing).unwrap();
    let last_boundary = boundary.iter().map(|p| p.creation_order).max().unwrap();
    let (cloud, _) = advance_front(&contour, boundary, &cfg).unwrap();
    let mut orders: Vec<u64> = cloud.iter().map(|p| p.creation_order).collect();
    orders.sort_unstable();
    orders.dedup();
    assert_eq!(orders.len(), cloud.len());
    assert!(cloud
        .iter()
        .filter(|p| p.is_interior())
        .all(|p| p.creation_order > last_boundary));
}

#[test]
fn merged_points_carry_no_normal() {
    // Off-lattice spacing on a circle forces merges.
    let contour = circle(7.3);
    let cfg = MeshCfg::with_spacing(0.9);
    let (cloud, stats) = fill(&contour, &cfg);
    assert!(stats.merged > 0);
    assert!(cloud
        .iter()
        .any(|p| p.is_interior() && p.normal.is_none()));
}

#[test]
fn point_budget_is_enforced() {
    let contour = square(10.0);
    let cfg = MeshCfg {
        max_points: Some(25),
        ..MeshCfg::with_spacing(2.0)
    };
    let boundary = sample_boundary(&contour, cfg.spacing).unwrap();
    let err = advance_front(&contour, boundary, &cfg).unwrap_err();
    assert_eq!(err, MeshError::PointBudgetExceeded { limit: 25 });
}

#[test]
fn invalid_spacing_is_rejected() {
    let contour = square(10.0);
    let boundary = sample_boundary(&contour, 2.0).unwrap();
    let cfg = MeshCfg::with_spacing(-1.0);
    assert!(matches!(
        advance_front(&contour, boundary, &cfg),
        Err(MeshError::InvalidConfig { .. })
    ));
}

#[test]
fn runs_are_deterministic() {
    let contour = draw_contour_radial(
        RadialCfg {
            smooth: true,
            ..RadialCfg::default()
        },
        ReplayToken { seed: 11, index: 2 },
    )
    .unwrap();
    let cfg = MeshCfg::with_spacing(1.3);
    let (a, sa) = fill(&contour, &cfg);
    let (b, sb) = fill(&contour, &cfg);
    assert_eq!(a, b);
    assert_eq!(sa, sb);
}

#[test]
fn grid_prefers_older_point_on_ties() {
    let mut g = grid::SpatialGrid::new(1.0);
    let slots = vec![
        Some(SampledPoint {
            kind: PointKind::Interior,
            location: vector![1.0, 0.0],
            normal: None,
            creation_order: 7,
        }),
        Some(SampledPoint {
            kind: PointKind::Interior,
            location: vector![-1.0, 0.0],
            normal: None,
            creation_order: 3,
        }),
        None,
    ];
    g.insert(0, vector![1.0, 0.0]);
    g.insert(1, vector![-1.0, 0.0]);
    assert_eq!(g.nearest_within(vector![0.0, 0.0], 1.5, &slots), Some(1));
    // Strict radius: a point exactly at the threshold is not "within".
    assert_eq!(g.nearest_within(vector![0.0, 0.0], 1.0, &slots), None);
    g.remove(1, vector![-1.0, 0.0]);
    assert_eq!(g.nearest_within(vector![0.0, 0.0], 1.5, &slots), Some(0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]
    #[test]
    fn radial_fill_respects_merge_threshold(
        seed in any::<u64>(),
        index in 0u64..1000,
        smooth in any::<bool>(),
        spacing in 1.0..2.5f64,
    ) {
        let rcfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 14 },
            smooth,
            ..RadialCfg::default()
        };
        let contour = draw_contour_radial(rcfg, ReplayToken { seed, index }).unwrap();
        let cfg = MeshCfg::with_spacing(spacing);
        let (cloud, _) = fill(&contour, &cfg);
        prop_assert!(min_interior_distance(&cloud) >= cfg.merge_threshold() - 1e-9);
        prop_assert!(cloud.count(PointKind::Interior) > 0);
    }
}
