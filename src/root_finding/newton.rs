//! Newton-Raphson method

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluation::{Direction, GuardedEval};
use crate::report::{ConvergenceReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::algorithms::{Algorithm, DEGENERATE_DERIVATIVE};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{impl_from_domain_error, RootFindingError, ToleranceError};
use super::tolerances::scaled_tolerance;

const ALGORITHM: Algorithm = Algorithm::NEWTON;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid max step, must be > 0 or f64::INFINITY. got {step}")]
    InvalidMaxStep { step: f64 },
}
impl_from_domain_error!(NewtonError);


/// Newton configuration.
///
/// # Fields
/// - `common`   : [`CommonCfg`] with tolerances and optional `max_iter`.
/// - `max_step` : optional limit on the absolute Newton step (default: ∞).
///
/// # Defaults
/// - `abs_x = 1e-10`, `rel_x = 4ε`, `abs_fx = 1e-14`.
/// - If `max_iter` is `None`, [`newton`] uses
///   [`Algorithm::default_max_iter`] for the Newton method (50).
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct NewtonCfg {
    common: CommonCfg,
    max_step: f64
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            max_step: f64::INFINITY
        }
    }

    pub fn set_max_step(mut self, v: f64) -> Result<Self, NewtonError> {
        if v <= 0.0 || v.is_nan() {
            return Err(NewtonError::InvalidMaxStep { step: v });
        }
        self.max_step = v;
        Ok(self)
    }

    #[inline] pub fn max_step(&self) -> f64 { self.max_step }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Central finite-difference derivative with `h = ε^{1/3} · max(|x|, 1)`,
/// rescued by ULP nudges if `x ± h` collapses onto `x`.
///
/// Returns `Ok(None)` when no representable stencil exists around `x`.
fn central_difference<F>(
    eval: &mut GuardedEval<'_, F>,
    x: f64,
) -> Result<Option<f64>, NewtonError> where F: FnMut(f64) -> f64 {
    let mut h  = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let mut xp = x + h;
    let mut xm = x - h;

    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
        xp = Direction::Increase.ulp_step(x);
        xm = Direction::Decrease.ulp_step(x);
        h  = 0.5 * (xp - xm);

        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
            return Ok(None);
        }
    }

    let fxp = eval.at(xp, Direction::Increase)?;
    let fxm = eval.at(xm, Direction::Decrease)?;
    let dfx = (fxp - fxm) / (2.0 * h);

    Ok(dfx.is_finite().then_some(dfx))
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Supports analytic derivatives or a central finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, use finite-difference
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerances, optional `max_iter`, optional `max_step`)
///
/// # Returns
/// [`ConvergenceReport`] with:
/// - `value`               : approximate root, `None` after a degenerate step
/// - `residual`            : function value at `value`
/// - `evaluations`         : total evaluations (f and f')
/// - `termination_reason`  : tolerance, machine stagnation, iteration limit, or numeric degeneracy
/// - `stencil`             : previous iterate used to form the last step
/// - `algorithm_name`      : "newton"
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]   : `x0` non-finite
/// - [`NewtonError::InvalidMaxStep`] : `max_step <= 0` or NaN
/// - [`NewtonError::Tolerance`]      : invalid tolerances
/// - [`NewtonError::RootFinding`]    : `max_iter = 0`, or `func`/`dfunc` undefined
///   even after the guard nudge
///
/// # Behavior
/// - Step: `x_{k+1} = x_k - f(x_k) / f'(x_k)`, clipped to `max_step`.
/// - `|f'(x_k)| < 1e-12`, a non-finite step, or an unrepresentable
///   finite-difference stencil stop with
///   [`TerminationReason::NumericDegeneracy`] and `converged = false`.
/// - `x_{k+1} == x_k`        : [`TerminationReason::MachinePrecisionReached`]
/// - `|x_{k+1} - x_k| < tol` : [`ToleranceSatisfied::StepSizeReached`]
/// - `|f(x)| <= abs_fx`      : [`ToleranceSatisfied::AbsFxReached`]
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. For guaranteed convergence, use
///   [`super::bisection::bisection`].
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<ConvergenceReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }
    if cfg.max_step <= 0.0 || cfg.max_step.is_nan() {
        return Err(NewtonError::InvalidMaxStep { step: cfg.max_step });
    }

    cfg.common.validate()?;
    let abs_fx   = cfg.common.abs_fx();
    let abs_x    = cfg.common.abs_x();
    let rel_x    = cfg.common.rel_x();
    let num_iter = cfg.common.resolve_max_iter(ALGORITHM, None)?;
    let name     = ALGORITHM.algorithm_name();

    let mut f_eval  = GuardedEval::new(&mut func);
    let mut df_eval = dfunc.as_mut().map(GuardedEval::new);
    macro_rules! evaluations {
        () => { f_eval.evaluations() + df_eval.as_ref().map_or(0, |d| d.evaluations()) };
    }

    // early exit: x0 is root
    let mut x  = x0;
    let mut fx = f_eval.at(x, Direction::Increase)?;
    if fx.abs() <= abs_fx {
        return Ok(ConvergenceReport::converged(
            x0, fx, 0, evaluations!(),
            ToleranceSatisfied::AbsFxReached, Stencil::singleton(x0), name,
        ));
    }

    let mut prev_x = x;
    for iter in 1..=num_iter {
        let dfx = match df_eval.as_mut() {
            Some(d) => Some(d.at(x, Direction::Increase)?),
            None    => central_difference(&mut f_eval, x)?,
        };
        let Some(dfx) = dfx else {
            return Ok(ConvergenceReport::degenerate(
                iter - 1, evaluations!(), Stencil::singleton(x), name,
                format!("finite-difference derivative not representable at x={x}"),
            ));
        };

        if dfx.abs() < DEGENERATE_DERIVATIVE {
            return Ok(ConvergenceReport::degenerate(
                iter - 1, evaluations!(), Stencil::singleton(x), name,
                format!("derivative vanished: |f'({x})| = {} < {DEGENERATE_DERIVATIVE}", dfx.abs()),
            ));
        }

        let mut step = -fx / dfx;
        if step.abs() > cfg.max_step {
            step = step.signum() * cfg.max_step;
        }

        let x_next = x + step;
        if !x_next.is_finite() {
            return Ok(ConvergenceReport::degenerate(
                iter - 1, evaluations!(), Stencil::singleton(x), name,
                format!("newton step non-finite at x={x}, step={step}"),
            ));
        }

        // machine stagnation
        if x_next == x {
            return Ok(ConvergenceReport {
                termination_reason: TerminationReason::MachinePrecisionReached,
                ..ConvergenceReport::converged(
                    x, fx, iter, evaluations!(),
                    ToleranceSatisfied::StepSizeReached, Stencil::singleton(x), name,
                )
            });
        }

        let fx_next = f_eval.at(x_next, Direction::Increase)?;
        if fx_next.abs() <= abs_fx {
            return Ok(ConvergenceReport::converged(
                x_next, fx_next, iter, evaluations!(),
                ToleranceSatisfied::AbsFxReached, Stencil::singleton(x), name,
            ));
        }

        let step_tol = scaled_tolerance([x, x_next], abs_x, rel_x)?;
        if (x_next - x).abs() < step_tol {
            return Ok(ConvergenceReport::converged(
                x_next, fx_next, iter, evaluations!(),
                ToleranceSatisfied::StepSizeReached, Stencil::singleton(x), name,
            ));
        }

        prev_x = x;
        x  = x_next;
        fx = fx_next;
    }

    Ok(ConvergenceReport::iteration_limit(
        x, fx, num_iter, evaluations!(), Stencil::singleton(prev_x), name,
    ))
}
