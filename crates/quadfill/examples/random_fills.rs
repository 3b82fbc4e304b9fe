//! Mesh a handful of random contours and print per-stage counts.
//!
//! Usage:
//!   cargo run -p quadfill --example random_fills -- [polygon|smooth] [spacing]

use quadfill::pipeline::mesh_contour_delaunay;
use quadfill::shapes::{draw_contour_radial, RadialCfg, ReplayToken, VertexCount};
use quadfill::MeshCfg;

fn main() {
    let mut args = std::env::args().skip(1);
    let smooth = match args.next().as_deref() {
        None | Some("polygon") => false,
        Some("smooth") => true,
        Some(_) => {
            eprintln!("usage: random_fills [polygon|smooth] [spacing]");
            return;
        }
    };
    let spacing: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 14 },
        smooth,
        ..RadialCfg::default()
    };
    for index in 0..5 {
        let tok = ReplayToken { seed: 2025, index };
        let out = draw_contour_radial(cfg, tok)
            .and_then(|c| mesh_contour_delaunay(&c, &MeshCfg::with_spacing(spacing)));
        match out {
            Ok(out) => {
                let s = out.stats;
                println!(
                    "sample {index}: boundary={} interior={} merged={} triangles_in={} pruned={} quads={} (A{} B{} C{} D{}) triangles_left={}",
                    s.boundary_points,
                    s.interior_points,
                    s.front.merged,
                    s.triangles_in,
                    s.merge.pruned,
                    s.merge.quads(),
                    s.merge.longest_strict,
                    s.merge.longest_relaxed,
                    s.merge.nice_strict,
                    s.merge.nice_relaxed,
                    out.mesh.triangles.len()
                );
            }
            Err(e) => println!("sample {index}: {e}"),
        }
    }
}
