//! Bisection method

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluation::{Direction, GuardedEval};
use crate::report::{ConvergenceReport, Stencil, ToleranceSatisfied};
use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{impl_from_domain_error, RootFindingError, ToleranceError};
use super::signs::opposite_sign;
use super::tolerances::scaled_tolerance;

const ALGORITHM: Algorithm = Algorithm::BISECTION;


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}
impl_from_domain_error!(BisectionError);


/// Decides whether `(x, f(x))` counts as a zero of the function.
///
/// Replaces the default `|f(x)| <= abs_fx` test. A custom check also vets
/// the midpoint of the final bracket: if it fails there, the sign change
/// came from a singularity and the search is reported as not converged.
pub type ZeroCheck = fn(x: f64, fx: f64) -> bool;


/// Bisection configuration
///
/// # Fields
/// - `common`     : [`CommonCfg`] with tolerances and optional `max_iter`.
/// - `zero_check` : optional [`ZeroCheck`] replacing `|f(x)| <= abs_fx`.
///
/// # Defaults
/// - `abs_x = 1e-10`, `rel_x = 4ε`, `abs_fx = 1e-14`.
/// - If `max_iter` is `None`, the theoretical number of halvings needed
///   to reach the half-width tolerance is used, clamped to
///   [`super::algorithms::GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct BisectionCfg {
    common: CommonCfg,
    #[serde(skip)]
    zero_check: Option<ZeroCheck>,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), zero_check: None }
    }

    #[must_use]
    pub fn with_zero_check(mut self, check: ZeroCheck) -> Self {
        self.zero_check = Some(check);
        self
    }

    #[inline]
    fn is_zero(&self, x: f64, fx: f64) -> bool {
        match self.zero_check {
            Some(check) => check(x, fx),
            None        => fx.abs() <= self.common.abs_fx(),
        }
    }

    /// `false` only when a custom check rejects the closing midpoint.
    #[inline]
    fn is_root(&self, x: f64, fx: f64) -> bool {
        self.zero_check.map_or(true, |check| check(x, fx))
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


/// Report for a bracket that met the width tolerance. The midpoint is
/// evaluated once more; a custom zero check that rejects it marks a
/// singularity.
fn close_bracket<F>(
    eval: &mut GuardedEval<'_, F>,
    a: f64,
    b: f64,
    iter: usize,
    cfg: &BisectionCfg,
) -> Result<ConvergenceReport, BisectionError>
where F: FnMut(f64) -> f64 {
    let name = ALGORITHM.algorithm_name();
    let m    = midpoint(a, b);
    let fm   = eval.at(m, Direction::Increase)?;

    if cfg.is_root(m, fm) {
        return Ok(ConvergenceReport::converged(
            m, fm, iter, eval.evaluations(),
            ToleranceSatisfied::WidthTolReached, Stencil::bracket(a, b), name,
        ));
    }
    Ok(ConvergenceReport::degenerate(
        iter, eval.evaluations(), Stencil::bracket(a, b), name,
        format!("sign change at a singularity: bracket closed at x={m} with f(x)={fm}"),
    ))
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on `[a, b]` and that
/// `func(a)` and `func(b)` have opposite signs.
///
/// # Arguments
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the bracket. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the bracket. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`]
///
/// # Returns
/// [`ConvergenceReport`] with
/// ├ `value`      : bracket midpoint (or the endpoint that is already a zero)
/// ├ `residual`   : function value at `value`
/// ├ `converged`  : `false` when the iteration budget ran out or the bracket
/// │                closed on a singularity
/// ├ `tolerance_satisfied`
/// │  ├ [`ToleranceSatisfied::AbsFxReached`]    : zero check accepted the point
/// │  ├ [`ToleranceSatisfied::WidthTolReached`] : half-width below tolerance
/// │  └ [`ToleranceSatisfied::ToleranceNotReached`]
/// └ `stencil`    : final bracket
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` is NaN/inf or if `a >= b`.
/// ├ [`BisectionError::NoSignChange`]  - neither endpoint is a zero and `f(a)`, `f(b)` share a sign.
/// ├ [`BisectionError::Tolerance`]     - invalid tolerances in `cfg`.
/// └ [`BisectionError::RootFinding`]   - `max_iter == 0`, or `func` undefined even after the guard nudge.
///
/// # Notes
/// ├ Endpoints are guarded inward (`a` nudged up, `b` nudged down); midpoints upward.
/// ├ The width test is strict: `(b - a) / 2 < tol`.
/// ├ On width-tolerance success, the midpoint of the final bracket and its
/// │ function value are computed for reporting; one extra evaluation.
/// └ With a custom [`ZeroCheck`], a closing midpoint the check rejects gives a
///   [`crate::report::TerminationReason::NumericDegeneracy`] report with no value.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<ConvergenceReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    cfg.common.validate()?;
    let abs_x = cfg.common.abs_x();
    let rel_x = cfg.common.rel_x();
    let half_width_tol = |a: f64, b: f64| {
        scaled_tolerance([a, b], abs_x, rel_x)
    };

    let tol0 = half_width_tol(a, b)?;
    let num_iter = cfg.common.resolve_max_iter(
        ALGORITHM,
        Some(Algorithm::theoretical_iter(a, b, tol0)),
    )?;
    let name = ALGORITHM.algorithm_name();

    let mut eval = GuardedEval::new(&mut func);

    // immediate bounds are roots
    let mut fa = eval.at(a, Direction::Increase)?;
    if cfg.is_zero(a, fa) {
        return Ok(ConvergenceReport::converged(
            a, fa, 0, eval.evaluations(),
            ToleranceSatisfied::AbsFxReached, Stencil::bracket(a, b), name,
        ));
    }
    let fb = eval.at(b, Direction::Decrease)?;
    if cfg.is_zero(b, fb) {
        return Ok(ConvergenceReport::converged(
            b, fb, 0, eval.evaluations(),
            ToleranceSatisfied::AbsFxReached, Stencil::bracket(a, b), name,
        ));
    }

    if !opposite_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    // immediate narrow width success
    if 0.5 * (b - a) < tol0 {
        return close_bracket(&mut eval, a, b, 0, &cfg);
    }

    let mut m  = a;
    let mut fm = fa;
    for iter in 1..=num_iter {
        m  = midpoint(a, b);
        fm = eval.at(m, Direction::Increase)?;

        if cfg.is_zero(m, fm) {
            return Ok(ConvergenceReport::converged(
                m, fm, iter, eval.evaluations(),
                ToleranceSatisfied::AbsFxReached, Stencil::bracket(a, b), name,
            ));
        }

        // keep the half containing the sign change
        if opposite_sign(fa, fm) {
            b = m;
        } else {
            a  = m;
            fa = fm;
        }

        if 0.5 * (b - a) < half_width_tol(a, b)? {
            return close_bracket(&mut eval, a, b, iter, &cfg);
        }
    }

    Ok(ConvergenceReport::iteration_limit(
        m, fm, num_iter, eval.evaluations(), Stencil::bracket(a, b), name,
    ))
}
