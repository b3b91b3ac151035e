//! Public entry points.
//!
//! [`integrate`] : one call for all three quadrature methods
//! [`find_root`] : one call for all three root solvers
//!
//! Both return a [`ConvergenceReport`]. Fixed-work quadrature (composite and
//! sensitivity-adaptive) reports `converged = true` with
//! [`crate::report::TerminationReason::Exact`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluation::GuardedEval;
use crate::integration::algorithms::Algorithm as Integrator;
use crate::integration::errors::check_bounds;
use crate::integration::sensitivity::adaptive_sensitivity_with;
use crate::integration::tolerance::adaptive_tolerance_with;
use crate::integration::trapezoid::trapezoid_guarded;
use crate::integration::{CompositeCfg, IntegrationError, SensitivityCfg, ToleranceCfg};
use crate::report::{ConvergenceReport, Stencil};
use crate::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use crate::root_finding::newton::{newton, NewtonCfg, NewtonError};
use crate::root_finding::secant::{secant, SecantCfg, SecantError};


/// Quadrature method and its budget.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Quadrature {
    Composite(CompositeCfg),
    SensitivityAdaptive(SensitivityCfg),
    ToleranceAdaptive(ToleranceCfg),
}
impl Quadrature {
    pub const fn algorithm(&self) -> Integrator {
        match self {
            Quadrature::Composite(_)           => Integrator::Composite,
            Quadrature::SensitivityAdaptive(_) => Integrator::SensitivityAdaptive,
            Quadrature::ToleranceAdaptive(_)   => Integrator::ToleranceAdaptive,
        }
    }
}
impl Default for Quadrature {
    fn default() -> Self { Quadrature::ToleranceAdaptive(ToleranceCfg::default()) }
}


/// Integrates `func` over `[lower, upper]` with the chosen method.
///
/// # Errors
/// Any [`IntegrationError`] raised by the selected integrator.
///
/// # Report
/// - composite   : `stencil = Bracket([lower, upper])`
/// - sensitivity : `stencil = Partition { intervals: total sub-panels, depth: 1 }`
/// - tolerance   : see [`crate::integration::adaptive_tolerance_with`]
pub fn integrate<F>(
    method: Quadrature,
    mut func: F,
    lower: f64,
    upper: f64,
) -> Result<ConvergenceReport, IntegrationError>
where F: FnMut(f64) -> f64 {
    let name = method.algorithm().algorithm_name();
    match method {
        Quadrature::Composite(cfg) => {
            check_bounds(lower, upper)?;
            cfg.validate()?;
            let mut eval = GuardedEval::new(&mut func);
            let value = trapezoid_guarded(&mut eval, lower, upper, cfg.panels())?;
            Ok(ConvergenceReport::exact(value, eval.evaluations(), Stencil::bracket(lower, upper), name))
        }
        Quadrature::SensitivityAdaptive(cfg) => {
            let out = adaptive_sensitivity_with(func, (lower, upper), cfg)?;
            let stencil = Stencil::Partition { intervals: out.profile.total_panels(), depth: 1 };
            Ok(ConvergenceReport::exact(out.value, out.evaluations, stencil, name))
        }
        Quadrature::ToleranceAdaptive(cfg) => adaptive_tolerance_with(func, lower, upper, cfg),
    }
}


/// Root solver, its starting data, and its budget.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub enum RootSearch {
    Bisection { a: f64, b: f64, cfg: BisectionCfg },
    Secant    { x0: f64, x1: f64, cfg: SecantCfg },
    Newton    { x0: f64, cfg: NewtonCfg },
}


#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Bisection(#[from] BisectionError),

    #[error(transparent)]
    Secant(#[from] SecantError),

    #[error(transparent)]
    Newton(#[from] NewtonError),
}


/// Finds a root of `func` with the chosen solver.
///
/// `dfunc` is only consulted by Newton; `None` falls back to a central
/// finite difference.
///
/// # Errors
/// The solver's own error, wrapped in [`SolveError`].
pub fn find_root<F, G>(
    search: RootSearch,
    func: F,
    dfunc: Option<G>,
) -> Result<ConvergenceReport, SolveError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {
    let report = match search {
        RootSearch::Bisection { a, b, cfg } => bisection(func, a, b, cfg)?,
        RootSearch::Secant { x0, x1, cfg }  => secant(func, x0, x1, cfg)?,
        RootSearch::Newton { x0, cfg }      => newton(func, dfunc, x0, cfg)?,
    };
    Ok(report)
}
