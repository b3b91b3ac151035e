//! Secant method

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluation::{Direction, GuardedEval};
use crate::report::{ConvergenceReport, Stencil, ToleranceSatisfied};
use super::algorithms::{Algorithm, DEGENERATE_SLOPE};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{impl_from_domain_error, RootFindingError, ToleranceError};
use super::tolerances::scaled_tolerance;

const ALGORITHM: Algorithm = Algorithm::SECANT;


#[derive(Debug, Error)]
pub enum SecantError{
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct. got x0={x0}, x1={x1}")]
    InvalidGuess { x0: f64, x1: f64 },
}
impl_from_domain_error!(SecantError);


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - Absolute step tolerance [`SecantCfg::DEFAULT_ABS_X`] (`1e-6`), no relative part.
/// - If `max_iter` is `None`, [`secant`] uses
///   [`Algorithm::default_max_iter`] for the secant method (100).
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    pub const DEFAULT_ABS_X: f64 = 1e-6;

    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::absolute(Self::DEFAULT_ABS_X) }
    }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// x-intercept of the line through `(x0, fx0)` and `(x1, fx1)`.
///
/// Returns `None` when `|fx1 - fx0| < DEGENERATE_SLOPE` or the intercept
/// is not finite.
#[inline]
pub(crate) fn secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Option<f64> {
    let denom = fx1 - fx0;
    if denom.abs() < DEGENERATE_SLOPE {
        return None;
    }
    let x_next = x1 - fx1 * (x1 - x0) / denom;
    x_next.is_finite().then_some(x_next)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found; extra parameters are captured by the closure
/// - `x0`   : First initial guess.  Must be finite and not equal to `x1`
/// - `x1`   : Second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`SecantCfg`] (tolerances, optional `max_iter`)
///
/// # Returns
/// [`ConvergenceReport`] with
/// - `value`               : approximate root, `None` after a degenerate step
/// - `residual`            : function value at `value`
/// - `converged`           : whether a tolerance was met
/// - `termination_reason`  : tolerance, iteration limit, or numeric degeneracy
/// - `stencil`             : the two iterates that formed the last step
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`] : `x0` or `x1` is NaN/inf or equal
/// - [`SecantError::Tolerance`]    : invalid tolerances
/// - [`SecantError::RootFinding`]  : `max_iter = 0`, or `func` undefined even after the guard nudge
///
/// # Behavior
/// - Update: x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// - `|f(x_k) - f(x_{k-1})| < 1e-12` stops with
///   [`crate::report::TerminationReason::NumericDegeneracy`] and `converged = false`.
/// - `|x_{k+1} - x_k| < tol` : [`ToleranceSatisfied::StepSizeReached`]
/// - `|f(x)| <= abs_fx`      : [`ToleranceSatisfied::AbsFxReached`]
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use [`super::bisection::bisection`].
pub fn secant<F> (
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg
) -> Result<ConvergenceReport, SecantError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    cfg.common.validate()?;
    let abs_fx   = cfg.common.abs_fx();
    let abs_x    = cfg.common.abs_x();
    let rel_x    = cfg.common.rel_x();
    let num_iter = cfg.common.resolve_max_iter(ALGORITHM, None)?;
    let name     = ALGORITHM.algorithm_name();

    let step_tol = |x1: f64, x2: f64| {
        scaled_tolerance([x1, x2], abs_x, rel_x)
    };

    let mut eval = GuardedEval::new(&mut func);

    // early exit: x0 is root
    let fx0 = eval.at(x0, Direction::Increase)?;
    if fx0.abs() <= abs_fx {
        return Ok(ConvergenceReport::converged(
            x0, fx0, 0, eval.evaluations(),
            ToleranceSatisfied::AbsFxReached, Stencil::singleton(x0), name,
        ));
    }
    // early exit: x1 is root
    let fx1 = eval.at(x1, Direction::Increase)?;
    if fx1.abs() <= abs_fx {
        return Ok(ConvergenceReport::converged(
            x1, fx1, 0, eval.evaluations(),
            ToleranceSatisfied::AbsFxReached, Stencil::singleton(x1), name,
        ));
    }

    // guesses already closer than the step tolerance
    if (x1 - x0).abs() < step_tol(x0, x1)? {
        return Ok(ConvergenceReport::converged(
            x1, fx1, 0, eval.evaluations(),
            ToleranceSatisfied::StepSizeReached, Stencil::doubleton(x0, x1), name,
        ));
    }

    let (mut x_prev, mut f_prev) = (x0, fx0);
    let (mut x_curr, mut f_curr) = (x1, fx1);
    for iter in 1..=num_iter {
        let Some(x_next) = secant_x_intercept((x_prev, f_prev), (x_curr, f_curr)) else {
            return Ok(ConvergenceReport::degenerate(
                iter - 1,
                eval.evaluations(),
                Stencil::doubleton(x_prev, x_curr),
                name,
                format!(
                    "secant slope vanished: |f({x_curr}) - f({x_prev})| = {} < {DEGENERATE_SLOPE}",
                    (f_curr - f_prev).abs(),
                ),
            ));
        };
        let f_next = eval.at(x_next, Direction::Increase)?;

        if f_next.abs() <= abs_fx {
            return Ok(ConvergenceReport::converged(
                x_next, f_next, iter, eval.evaluations(),
                ToleranceSatisfied::AbsFxReached, Stencil::doubleton(x_prev, x_curr), name,
            ));
        }

        if (x_next - x_curr).abs() < step_tol(x_next, x_curr)? {
            return Ok(ConvergenceReport::converged(
                x_next, f_next, iter, eval.evaluations(),
                ToleranceSatisfied::StepSizeReached, Stencil::doubleton(x_prev, x_curr), name,
            ));
        }

        (x_prev, f_prev) = (x_curr, f_curr);
        (x_curr, f_curr) = (x_next, f_next);
    }

    Ok(ConvergenceReport::iteration_limit(
        x_curr, f_curr, num_iter, eval.evaluations(), Stencil::doubleton(x_prev, x_curr), name,
    ))
}
