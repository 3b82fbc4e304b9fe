//! Tolerances and run configuration.
//!
//! Policy
//! - Numeric tolerances are fixed crate constants; they are scale-agnostic and
//!   tuned for coordinates of roughly unit to document scale (1e-2 .. 1e4).
//! - Everything a caller may reasonably tune per run lives in `MeshCfg`.

use crate::error::{MeshError, Result};

/// Uniform parameter steps per unit of control-hull length when polylining a cubic.
pub(crate) const SAMPLES_PER_UNIT_LENGTH: f64 = 10.0;
/// Two contour points closer than this are treated as coincident when chaining segments.
pub(crate) const CHAIN_EPS: f64 = 1e-6;
/// Determinant / leading-coefficient threshold for 2×2 solves and root finding.
pub(crate) const DET_EPS: f64 = 1e-12;
/// Roots with a larger imaginary part are treated as complex and dropped.
pub(crate) const IMAG_EPS: f64 = 1e-9;
/// Slack on curve and line parameters when testing `t∈[0,1]` / `s≥0`.
pub(crate) const PARAM_EPS: f64 = 1e-9;
/// Direction vectors shorter than this are degenerate (cusps, repeated points).
pub(crate) const DIR_EPS: f64 = 1e-12;

/// Default score bound for the angle/edge-length quad heuristic.
pub const DEFAULT_QUAD_SCORE_THRESHOLD: f64 = 2.0;
/// Default cap on the number of points the front advancer may create.
pub const DEFAULT_MAX_POINTS: usize = 2_000_000;

/// Per-run meshing configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCfg {
    /// Target distance between neighbouring samples, in contour units.
    pub spacing: f64,
    /// Upper bound on the combined edge/angle deviation score of a "nice" quad.
    pub quad_score_threshold: f64,
    /// Abort front advancement once the cloud holds more points than this.
    /// `None` disables the guard.
    pub max_points: Option<usize>,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            quad_score_threshold: DEFAULT_QUAD_SCORE_THRESHOLD,
            max_points: Some(DEFAULT_MAX_POINTS),
        }
    }
}

impl MeshCfg {
    #[inline]
    pub fn with_spacing(spacing: f64) -> Self {
        Self {
            spacing,
            ..Self::default()
        }
    }

    /// Merge threshold `Pm = spacing/√2`: interior points are never closer than this.
    #[inline]
    pub fn merge_threshold(&self) -> f64 {
        self.spacing / std::f64::consts::SQRT_2
    }

    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(MeshError::invalid_config(format!(
                "spacing must be finite and > 0, got {}",
                self.spacing
            )));
        }
        if !self.quad_score_threshold.is_finite() || self.quad_score_threshold < 0.0 {
            return Err(MeshError::invalid_config(format!(
                "quad score threshold must be finite and >= 0, got {}",
                self.quad_score_threshold
            )));
        }
        if self.max_points == Some(0) {
            return Err(MeshError::invalid_config("max_points must be > 0"));
        }
        Ok(())
    }
}
