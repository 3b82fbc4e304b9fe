//! Mesh the 10×10 square at spacing 2 and print the faces.
//!
//! Usage:
//!   cargo run -p quadfill --example square_fill

use quadfill::prelude::*;

fn main() -> Result<()> {
    let contour = Contour::polygon(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ])?;
    let out = mesh_contour_delaunay(&contour, &MeshCfg::with_spacing(2.0))?;
    println!(
        "points={} (boundary {}, interior {}), triangles={}, quads={}",
        out.cloud.len(),
        out.stats.boundary_points,
        out.stats.interior_points,
        out.mesh.triangles.len(),
        out.mesh.quads.len()
    );
    for face in out.mesh.polygons() {
        let corners: Vec<String> = face
            .iter()
            .map(|&i| {
                let p = out.cloud[i].location;
                format!("({:.2}, {:.2})", p.x, p.y)
            })
            .collect();
        println!("  {}", corners.join(" "));
    }
    Ok(())
}
