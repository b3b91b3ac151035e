//! Defines the [`ConvergenceReport`] struct returned by every iterative
//! method in the crate, root solvers and adaptive integrators alike.

use std::fmt;
use serde::Serialize;


/// Reasons an iterative method may terminate.
///
/// - [`TerminationReason::ToleranceReached`]        : convergence test met
/// - [`TerminationReason::IterationLimit`]          : iteration or depth budget exhausted
/// - [`TerminationReason::MachinePrecisionReached`] : next iterate equals the current one
/// - [`TerminationReason::NumericDegeneracy`]       : a divisor (slope, derivative) vanished
/// - [`TerminationReason::Exact`]                   : fixed-work method, no convergence test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    MachinePrecisionReached,
    NumericDegeneracy,
    Exact,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - root finding
///     - |f(x)| <= tol, or the configured zero check accepted x
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bracketing methods
///     - half-width (b - a) / 2 <= tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - open methods
///     - |x_n - x_{n - 1}| < tol
/// - [`ToleranceSatisfied::LocalErrorReached`]
///     - tolerance-adaptive integration
///     - |T1 - T2| < tol on every leaf interval
/// - [`ToleranceSatisfied::NotApplicable`]
///     - fixed-work integration
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - all methods
///     - usually with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    LocalErrorReached,
    NotApplicable,
    ToleranceNotReached,
}


/// Method-specific data returned with a report.
/// - [`Stencil::Bracket`]   : bracketing methods and integration domains
///     - `bounds` of the final interval
/// - [`Stencil::Open`]      : open methods
///     - `x` = last iterates used to compute the estimate
/// - [`Stencil::Partition`] : adaptive integration
///     - `intervals` = number of leaf intervals, `depth` = deepest bisection level
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub enum Stencil {
    Bracket   { bounds: [f64; 2] },
    Open      { x: [f64; 3], len: usize },
    Partition { intervals: usize, depth: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
            Stencil::Partition { .. }   => &[],
        }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2, 0.0], len: 2 }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
}


/// Final report returned by all iterative methods.
///
/// [`ConvergenceReport`]
/// - `value`               : root or integral estimate, `None` when the method broke down
/// - `residual`            : f(root) for roots, summed local error estimate for integrals
/// - `converged`           : whether the convergence test was met; branch on it before trusting `value`
/// - `iterations`          : iterations (root finding) or subdivisions (integration)
/// - `evaluations`         : total function evaluations, guard retries included
/// - `termination_reason`  : why the method stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `stencil`             : last points used in the update, or the partition shape
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
/// - `message`             : diagnostic text for non-converged outcomes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceReport {
    pub value               : Option<f64>,
    pub residual            : Option<f64>,
    pub converged           : bool,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
    pub message             : Option<String>,
}
impl ConvergenceReport {
    /// Report for a method that met its tolerance.
    pub(crate) fn converged(
        value: f64,
        residual: f64,
        iterations: usize,
        evaluations: usize,
        tolerance_satisfied: ToleranceSatisfied,
        stencil: Stencil,
        algorithm_name: &'static str,
    ) -> Self {
        Self {
            value: Some(value),
            residual: Some(residual),
            converged: true,
            iterations,
            evaluations,
            termination_reason: TerminationReason::ToleranceReached,
            tolerance_satisfied,
            stencil,
            algorithm_name,
            message: None,
        }
    }

    /// Report for a method that ran out of iterations; `value` holds the last estimate.
    pub(crate) fn iteration_limit(
        value: f64,
        residual: f64,
        iterations: usize,
        evaluations: usize,
        stencil: Stencil,
        algorithm_name: &'static str,
    ) -> Self {
        Self {
            value: Some(value),
            residual: Some(residual),
            converged: false,
            iterations,
            evaluations,
            termination_reason: TerminationReason::IterationLimit,
            tolerance_satisfied: ToleranceSatisfied::ToleranceNotReached,
            stencil,
            algorithm_name,
            message: Some(format!("iteration budget of {iterations} exhausted before tolerance was met")),
        }
    }

    /// Report for a method whose update divisor vanished.
    pub(crate) fn degenerate(
        iterations: usize,
        evaluations: usize,
        stencil: Stencil,
        algorithm_name: &'static str,
        message: String,
    ) -> Self {
        Self {
            value: None,
            residual: None,
            converged: false,
            iterations,
            evaluations,
            termination_reason: TerminationReason::NumericDegeneracy,
            tolerance_satisfied: ToleranceSatisfied::ToleranceNotReached,
            stencil,
            algorithm_name,
            message: Some(message),
        }
    }

    /// Report for a fixed-work method that has no convergence test.
    pub(crate) fn exact(
        value: f64,
        evaluations: usize,
        stencil: Stencil,
        algorithm_name: &'static str,
    ) -> Self {
        Self {
            value: Some(value),
            residual: None,
            converged: true,
            iterations: 0,
            evaluations,
            termination_reason: TerminationReason::Exact,
            tolerance_satisfied: ToleranceSatisfied::NotApplicable,
            stencil,
            algorithm_name,
            message: None,
        }
    }

    /// Value when the method converged, `None` otherwise.
    pub fn converged_value(&self) -> Option<f64> {
        if self.converged { self.value } else { None }
    }
}

impl fmt::Display for ConvergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{}: value={v}", self.algorithm_name)?,
            None    => write!(f, "{}: value=<none>", self.algorithm_name)?,
        }
        write!(
            f,
            ", converged={}, iterations={}, evaluations={}, termination={:?}",
            self.converged, self.iterations, self.evaluations, self.termination_reason,
        )?;
        if let Some(msg) = &self.message {
            write!(f, " ({msg})")?;
        }
        Ok(())
    }
}
