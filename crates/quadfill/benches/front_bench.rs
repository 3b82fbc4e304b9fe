//! Criterion benches for boundary sampling and front advancement.
//! Focus spacings on a radius-10 contour: 2.0, 1.0, 0.5, 0.25.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use quadfill::front::advance_front;
use quadfill::sample::sample_boundary;
use quadfill::shapes::{draw_contour_radial, RadialCfg, ReplayToken, VertexCount};
use quadfill::MeshCfg;

fn bench_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("front");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(10),
        smooth: true,
        ..RadialCfg::default()
    };
    let contour = draw_contour_radial(cfg, ReplayToken { seed: 42, index: 0 }).unwrap();
    for &spacing in &[2.0f64, 1.0, 0.5, 0.25] {
        let mesh_cfg = MeshCfg::with_spacing(spacing);
        group.bench_with_input(
            BenchmarkId::new("sample_boundary", spacing),
            &spacing,
            |b, &s| b.iter(|| sample_boundary(&contour, s).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("advance_front", spacing),
            &spacing,
            |b, &s| {
                b.iter_batched(
                    || sample_boundary(&contour, s).unwrap(),
                    |boundary| {
                        let _ = advance_front(&contour, boundary, &mesh_cfg).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_front);
criterion_main!(benches);
