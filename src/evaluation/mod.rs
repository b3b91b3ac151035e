//! Guarded function evaluation.
//!
//! Every integrator and root solver in this crate samples the user function
//! through this module. A function is *undefined* at `x` when it returns a
//! non-finite value (NaN or ±∞).
//!
//! [`evaluate`]    : single evaluation, returns the tagged [`Evaluation`]
//! [`guard_point`] : evaluation with one retry at `x ± GUARD_EPSILON`
//! [`GuardedEval`] : counting wrapper used inside the solvers

pub mod errors;
pub use errors::DomainError;

use serde::Serialize;


/// Distance a singular point is nudged before the single retry.
pub const GUARD_EPSILON: f64 = 1e-9;


/// Outcome of evaluating a function at one point.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub enum Evaluation {
    Defined(f64),
    Undefined { x: f64, fx: f64 },
}
impl Evaluation {
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Evaluation::Defined(fx)      => Some(*fx),
            Evaluation::Undefined { .. } => None,
        }
    }
}


/// Direction a singular point is nudged in.
///
/// - [`Direction::Increase`] : lower bounds and interior points
/// - [`Direction::Decrease`] : upper bounds
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Direction {
    Increase,
    Decrease,
}
impl Direction {
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Increase =>  1.0,
            Direction::Decrease => -1.0,
        }
    }

    /// Point reached after nudging `x` once.
    ///
    /// Falls back to the adjacent float when `GUARD_EPSILON` is below the
    /// spacing at `x` (|x| beyond ~1.7e7), so the result always differs from
    /// a finite `x`.
    #[inline]
    pub fn nudge(self, x: f64) -> f64 {
        let nudged = x + self.sign() * GUARD_EPSILON;
        if nudged == x { self.ulp_step(x) } else { nudged }
    }

    /// Adjacent representable float from `x` in this direction.
    ///
    /// NaN, and an infinity already at the end it points to, come back unchanged.
    pub fn ulp_step(self, x: f64) -> f64 {
        let up = matches!(self, Direction::Increase);
        if x.is_nan() || (x.is_infinite() && (x > 0.0) == up) {
            return x;
        }
        if x == 0.0 {
            let tiny = f64::from_bits(1);
            return if up { tiny } else { -tiny };
        }

        // bit patterns grow with magnitude for either sign
        let bits = x.to_bits();
        let away_from_zero = (x > 0.0) == up;
        f64::from_bits(if away_from_zero { bits + 1 } else { bits - 1 })
    }
}


/// Evaluates `f(x)` and tags the outcome.
#[inline]
pub fn evaluate<F>(f: &mut F, x: f64) -> Evaluation
where F: FnMut(f64) -> f64 {
    let fx = f(x);
    if fx.is_finite() {
        Evaluation::Defined(fx)
    } else {
        Evaluation::Undefined { x, fx }
    }
}


/// Evaluates `f(x)`, retrying once at `x` nudged by [`GUARD_EPSILON`]
/// in `direction` when `f(x)` is undefined.
///
/// # Errors
/// - [`DomainError::Undefined`] : `f` is undefined at both `x` and the nudged point
///
/// # Notes
/// - A best-effort nudge, not a discontinuity solver. Poles wider than
///   [`GUARD_EPSILON`] are reported, never skipped.
pub fn guard_point<F>(f: &mut F, x: f64, direction: Direction) -> Result<f64, DomainError>
where F: FnMut(f64) -> f64 {
    GuardedEval::new(f).at(x, direction)
}


/// Counting wrapper around a user function.
///
/// Every raw call to the function, including the retry after a nudge,
/// increments [`GuardedEval::evaluations`].
pub struct GuardedEval<'f, F> {
    func: &'f mut F,
    evaluations: usize,
}
impl<'f, F> GuardedEval<'f, F>
where F: FnMut(f64) -> f64 {
    pub fn new(func: &'f mut F) -> Self {
        Self { func, evaluations: 0 }
    }

    #[inline]
    pub fn evaluations(&self) -> usize { self.evaluations }

    /// Tagged evaluation without a retry.
    #[inline]
    pub fn raw(&mut self, x: f64) -> Evaluation {
        self.evaluations += 1;
        evaluate(&mut *self.func, x)
    }

    /// Guarded evaluation, see [`guard_point`].
    pub fn at(&mut self, x: f64, direction: Direction) -> Result<f64, DomainError> {
        match self.raw(x) {
            Evaluation::Defined(fx) => Ok(fx),
            Evaluation::Undefined { fx, .. } => {
                let nudged = direction.nudge(x);
                match self.raw(nudged) {
                    Evaluation::Defined(fy) => Ok(fy),
                    Evaluation::Undefined { fx: f_nudged, .. } => Err(DomainError::Undefined {
                        x,
                        fx,
                        nudged,
                        f_nudged,
                    }),
                }
            }
        }
    }
}
