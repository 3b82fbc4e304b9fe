//! JSON documents read and written by the CLI.
//!
//! Input: `{"commands": [{"cmd": "move_to", "to": [x, y]}, {"cmd": "line_to", ...},
//! {"cmd": "curve_to", "c1": [..], "c2": [..], "to": [..]}, {"cmd": "close"}]}`.

use anyhow::{Context, Result};
use quadfill::contour::{Contour, PathCommand};
use quadfill::pipeline::{MeshOutput, MeshStats};
use quadfill::sample::{PointCloud, PointKind};
use quadfill::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum CommandDto {
    MoveTo { to: [f64; 2] },
    LineTo { to: [f64; 2] },
    CurveTo { c1: [f64; 2], c2: [f64; 2], to: [f64; 2] },
    Close,
}

impl From<&CommandDto> for PathCommand {
    fn from(c: &CommandDto) -> Self {
        let v = |p: [f64; 2]| Vec2::new(p[0], p[1]);
        match *c {
            CommandDto::MoveTo { to } => PathCommand::MoveTo(v(to)),
            CommandDto::LineTo { to } => PathCommand::LineTo(v(to)),
            CommandDto::CurveTo { c1, c2, to } => PathCommand::CurveTo(v(c1), v(c2), v(to)),
            CommandDto::Close => PathCommand::Close,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PathDoc {
    pub commands: Vec<CommandDto>,
}

impl PathDoc {
    pub fn to_contour(&self) -> Result<Contour> {
        let cmds: Vec<PathCommand> = self.commands.iter().map(PathCommand::from).collect();
        Ok(Contour::from_commands(&cmds)?)
    }
}

pub fn read_path(path: &Path) -> Result<Contour> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PathDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing path document {}", path.display()))?;
    doc.to_contour()
        .with_context(|| format!("building contour from {}", path.display()))
}

#[derive(Debug, Serialize)]
pub struct PointDto {
    pub kind: &'static str,
    pub at: [f64; 2],
    pub normal: Option<[f64; 2]>,
    pub creation_order: u64,
}

fn kind_name(kind: PointKind) -> &'static str {
    match kind {
        PointKind::Vertex => "vertex",
        PointKind::EdgeSample => "edge_sample",
        PointKind::Interior => "interior",
    }
}

pub fn points_of(cloud: &PointCloud) -> Vec<PointDto> {
    cloud
        .iter()
        .map(|p| PointDto {
            kind: kind_name(p.kind),
            at: [p.location.x, p.location.y],
            normal: p.normal.map(|n| [n.x, n.y]),
            creation_order: p.creation_order,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct StatsDto {
    pub boundary_points: usize,
    pub interior_points: usize,
    pub front_accepted: usize,
    pub front_rejected_outside: usize,
    pub front_absorbed: usize,
    pub front_merged: usize,
    pub triangles_in: usize,
    pub pruned: usize,
    pub quads_longest_strict: usize,
    pub quads_longest_relaxed: usize,
    pub quads_nice_strict: usize,
    pub quads_nice_relaxed: usize,
}

impl From<&MeshStats> for StatsDto {
    fn from(s: &MeshStats) -> Self {
        Self {
            boundary_points: s.boundary_points,
            interior_points: s.interior_points,
            front_accepted: s.front.accepted,
            front_rejected_outside: s.front.rejected_outside,
            front_absorbed: s.front.absorbed,
            front_merged: s.front.merged,
            triangles_in: s.triangles_in,
            pruned: s.merge.pruned,
            quads_longest_strict: s.merge.longest_strict,
            quads_longest_relaxed: s.merge.longest_relaxed,
            quads_nice_strict: s.merge.nice_strict,
            quads_nice_relaxed: s.merge.nice_relaxed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeshDoc {
    pub points: Vec<PointDto>,
    pub triangles: Vec<[usize; 3]>,
    pub quads: Vec<[usize; 4]>,
    pub stats: StatsDto,
}

impl From<&MeshOutput> for MeshDoc {
    fn from(out: &MeshOutput) -> Self {
        Self {
            points: points_of(&out.cloud),
            triangles: out.mesh.triangles.clone(),
            quads: out.mesh.quads.clone(),
            stats: StatsDto::from(&out.stats),
        }
    }
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
