//! Sensitivity-adaptive trapezoid integration
//!
//! Spends more trapezoid panels where the integrand bends more:
//!
//! 1. Lay a uniform mesh of `d + 1` nodes on `[a, b]`.
//! 2. Estimate `f''` at each node by a second difference over the mesh.
//! 3. Split mesh interval `i` into `k_i = 2 * (floor(s * |f''(x_i)|) + 1)`
//!    sub-panels, capped at `max_panels`.
//! 4. Integrate each mesh interval with the composite trapezoid and sum.
//!
//! Heuristic only. There is no error estimate, and the cap bounds the work
//! at `d * max_panels` panels.

use serde::Serialize;

use crate::evaluation::GuardedEval;
use super::config::SensitivityCfg;
use super::errors::{check_bounds, IntegrationError};
use super::trapezoid::{grid_node, node_direction, trapezoid_guarded};


/// Curvature survey of an integrand on the uniform mesh.
///
/// [`SensitivityProfile`]
/// - `nodes`              : `d + 1` mesh nodes, `nodes[d] = b`
/// - `second_derivatives` : `f''` estimate at each node (all 0 when `d == 1`)
/// - `panel_counts`       : sub-panels per mesh interval, `d` entries, even, in `[2, max_panels]`
/// - `evaluations`        : function evaluations spent on the survey
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityProfile {
    pub nodes: Vec<f64>,
    pub second_derivatives: Vec<f64>,
    pub panel_counts: Vec<usize>,
    pub evaluations: usize,
}
impl SensitivityProfile {
    /// Total sub-panels over all mesh intervals.
    pub fn total_panels(&self) -> usize {
        self.panel_counts.iter().sum()
    }
}


/// Integral estimate together with the profile that shaped it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityIntegral {
    pub value: f64,
    pub profile: SensitivityProfile,
    /// Survey and integration evaluations combined.
    pub evaluations: usize,
}


/// Sub-panel count for one mesh interval: `2 * (floor(s * |f2|) + 1)`,
/// capped at `max_panels` rounded down to even. Non-decreasing in `|f2|`.
pub(crate) fn panel_count(sensitivity: f64, f2: f64, max_panels: usize) -> usize {
    let half_cap = (max_panels / 2).max(1);
    let raw = (sensitivity * f2.abs()).floor();
    let m = if raw.is_nan() {
        1
    } else if raw < half_cap as f64 {
        raw as usize + 1
    } else {
        half_cap
    };
    2 * m.min(half_cap)
}


/// Second-difference estimates of `f''` at each node of a uniform mesh.
fn second_differences(values: &[f64], h: f64) -> Vec<f64> {
    let d = values.len() - 1;
    if d < 2 {
        return vec![0.0; values.len()];
    }
    let h2 = h * h;
    let centered = |i: usize| (values[i - 1] - 2.0 * values[i] + values[i + 1]) / h2;

    (0..=d)
        .map(|i| match i {
            0            => centered(1),
            i if i == d  => centered(d - 1),
            i            => centered(i),
        })
        .collect()
}


fn survey<F>(
    eval: &mut GuardedEval<'_, F>,
    a: f64,
    b: f64,
    cfg: &SensitivityCfg,
) -> Result<SensitivityProfile, IntegrationError>
where F: FnMut(f64) -> f64 {
    let d = cfg.mesh();
    let h = (b - a) / d as f64;
    let start = eval.evaluations();

    let nodes: Vec<f64> = (0..=d).map(|i| grid_node(a, b, d, i)).collect();
    let mut values = Vec::with_capacity(nodes.len());
    for (i, &x) in nodes.iter().enumerate() {
        values.push(eval.at(x, node_direction(i, d))?);
    }

    let second_derivatives = second_differences(&values, h);
    let panel_counts = second_derivatives[..d]
        .iter()
        .map(|&f2| panel_count(cfg.sensitivity(), f2, cfg.max_panels()))
        .collect();

    Ok(SensitivityProfile {
        nodes,
        second_derivatives,
        panel_counts,
        evaluations: eval.evaluations() - start,
    })
}


/// Surveys `func` on the mesh described by `cfg` without integrating.
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`] : non-finite bounds or `a >= b`
/// - configuration errors from [`SensitivityCfg::validate`]
/// - [`IntegrationError::Domain`]        : `func` undefined at a mesh node
pub fn sensitivity_profile<F>(
    mut func: F,
    bounds: (f64, f64),
    cfg: SensitivityCfg,
) -> Result<SensitivityProfile, IntegrationError>
where F: FnMut(f64) -> f64 {
    let (a, b) = bounds;
    check_bounds(a, b)?;
    cfg.validate()?;

    let mut eval = GuardedEval::new(&mut func);
    survey(&mut eval, a, b, &cfg)
}


/// Sensitivity-adaptive integral of `func` over `bounds` under `cfg`.
///
/// # Errors
/// Same as [`sensitivity_profile`], plus [`IntegrationError::Domain`] for
/// an undefined sub-panel node.
///
/// # Notes
/// - Mesh intervals with `|f''| = 0` still get 2 sub-panels.
/// - Endpoints of each mesh interval are guarded inward, interior nodes upward.
pub fn adaptive_sensitivity_with<F>(
    mut func: F,
    bounds: (f64, f64),
    cfg: SensitivityCfg,
) -> Result<SensitivityIntegral, IntegrationError>
where F: FnMut(f64) -> f64 {
    let (a, b) = bounds;
    check_bounds(a, b)?;
    cfg.validate()?;

    let mut eval = GuardedEval::new(&mut func);
    let profile = survey(&mut eval, a, b, &cfg)?;

    let mut value = 0.0;
    for (i, &k) in profile.panel_counts.iter().enumerate() {
        let (lo, hi) = (profile.nodes[i], profile.nodes[i + 1]);
        value += trapezoid_guarded(&mut eval, lo, hi, k)?;
    }

    Ok(SensitivityIntegral {
        value,
        evaluations: eval.evaluations(),
        profile,
    })
}


/// Sensitivity-adaptive integral with `d` mesh intervals and the default
/// sub-panel cap.
///
/// # Errors
/// - [`IntegrationError::InvalidMeshCount`]   : `d == 0`
/// - [`IntegrationError::InvalidSensitivity`] : `sensitivity` negative or non-finite
/// - see [`adaptive_sensitivity_with`]
pub fn adaptive_sensitivity<F>(
    func: F,
    bounds: (f64, f64),
    d: usize,
    sensitivity: f64,
) -> Result<f64, IntegrationError>
where F: FnMut(f64) -> f64 {
    let cfg = SensitivityCfg::new()
        .set_mesh(d)?
        .set_sensitivity(sensitivity)?;
    Ok(adaptive_sensitivity_with(func, bounds, cfg)?.value)
}
