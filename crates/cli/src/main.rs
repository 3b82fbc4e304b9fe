use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quadfill::pipeline::mesh_contour_delaunay;
use quadfill::sample::sample_boundary;
use quadfill::MeshCfg;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "quadfill")]
#[command(about = "Fill closed contours with points and mesh them into quads")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Mesh a path document and write points, triangles and quads as JSON
    Mesh {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        spacing: f64,
        /// Score bound for fusing non-longest-edge triangle pairs
        #[arg(long, default_value_t = quadfill::cfg::DEFAULT_QUAD_SCORE_THRESHOLD)]
        quad_threshold: f64,
        /// Abort when the point cloud grows past this many points
        #[arg(long)]
        max_points: Option<usize>,
    },
    /// Write only the boundary samples of a path document
    Sample {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        spacing: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Mesh {
            input,
            out,
            spacing,
            quad_threshold,
            max_points,
        } => {
            let cfg = MeshCfg {
                spacing,
                quad_score_threshold: quad_threshold,
                max_points: max_points.or(MeshCfg::default().max_points),
            };
            mesh(&input, &out, &cfg, cmd.tag)
        }
        Action::Sample {
            input,
            out,
            spacing,
        } => sample(&input, &out, spacing, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn mesh(input: &Path, out: &Path, cfg: &MeshCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "mesh");
    let contour = io::read_path(input)?;
    let result = mesh_contour_delaunay(&contour, cfg)
        .with_context(|| format!("meshing {}", input.display()))?;
    let doc = io::MeshDoc::from(&result);
    io::write_json(out, &doc)?;

    let params = json!({
        "input": input.to_string_lossy(),
        "spacing": cfg.spacing,
        "quad_score_threshold": cfg.quad_score_threshold,
        "max_points": cfg.max_points,
    });
    let payload = Payload::new(params)
        .with_stats(serde_json::to_value(&doc.stats)?)
        .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn sample(input: &Path, out: &Path, spacing: f64, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), spacing, "sample");
    let contour = io::read_path(input)?;
    let cloud = sample_boundary(&contour, spacing)
        .with_context(|| format!("sampling {}", input.display()))?;
    io::write_json(out, &json!({ "points": io::points_of(&cloud) }))?;

    let params = json!({
        "input": input.to_string_lossy(),
        "spacing": spacing,
    });
    let payload = Payload::new(params)
        .with_stats(json!({ "points": cloud.len() }))
        .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::base_document(tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
