//! Composite trapezoidal rule
//!
//! Implements the [trapezoidal rule](https://en.wikipedia.org/wiki/Trapezoidal_rule)
//! over `n` equal panels of width `h = (b - a) / n`:
//!
//! ```text
//! T_n = h/2 * ( f(x_0) + 2 f(x_1) + ... + 2 f(x_{n-1}) + f(x_n) )
//! ```
//!
//! Exact for linear integrands. Both adaptive integrators are built on it.
//!
//! - [`trapezoid`]            : function on `[a, b]`
//! - [`trapezoid_samples`]    : tabulated `(x, y)` data
//! - [`cumulative_trapezoid`] : running integral at every node, for plotting

use serde::Serialize;

use crate::evaluation::{Direction, DomainError, GuardedEval};
use super::errors::{check_bounds, IntegrationError};


/// Node `i` of the uniform grid on `[a, b]` with `n` panels; the last
/// node is `b` exactly.
#[inline]
pub(crate) fn grid_node(a: f64, b: f64, n: usize, i: usize) -> f64 {
    if i == n { b } else { a + (b - a) * (i as f64 / n as f64) }
}

/// Guard direction for node `i` of `n`: endpoints inward, interior upward.
#[inline]
pub(crate) fn node_direction(i: usize, n: usize) -> Direction {
    if i == n { Direction::Decrease } else { Direction::Increase }
}


/// Composite trapezoid over `[a, b]` sharing the caller's evaluation counter.
/// Bounds and `n >= 1` are checked by the caller.
pub(crate) fn trapezoid_guarded<F>(
    eval: &mut GuardedEval<'_, F>,
    a: f64,
    b: f64,
    n: usize,
) -> Result<f64, DomainError>
where F: FnMut(f64) -> f64 {
    let h = (b - a) / n as f64;
    let mut sum = eval.at(a, Direction::Increase)? + eval.at(b, Direction::Decrease)?;
    for i in 1..n {
        sum += 2.0 * eval.at(grid_node(a, b, n, i), Direction::Increase)?;
    }
    Ok(0.5 * h * sum)
}


/// Integrates `func` over `[a, b]` with the composite trapezoidal rule on
/// `n` equal panels.
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`]     : non-finite bounds or `a >= b`
/// - [`IntegrationError::InvalidPanelCount`] : `n == 0`
/// - [`IntegrationError::Domain`]            : `func` undefined at a node even after the guard nudge
///
/// # Notes
/// - `n + 1` evaluations, plus one per nudged node.
/// - `a` is nudged upward and `b` downward when the integrand is undefined there.
pub fn trapezoid<F>(mut func: F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
where F: FnMut(f64) -> f64 {
    check_bounds(a, b)?;
    if n == 0 {
        return Err(IntegrationError::InvalidPanelCount { got: n });
    }
    let mut eval = GuardedEval::new(&mut func);
    Ok(trapezoid_guarded(&mut eval, a, b, n)?)
}


/// Integrates tabulated data with the trapezoidal rule on the given
/// (possibly non-uniform) abscissae.
///
/// # Errors
/// - [`IntegrationError::EmptyInput`]         : `x` or `y` empty
/// - [`IntegrationError::UnequalLength`]      : `x.len() != y.len()`
/// - [`IntegrationError::InsufficientPoints`] : fewer than 2 points
/// - [`IntegrationError::NonFiniteVec`]       : NaN/inf in `x` or `y`
/// - [`IntegrationError::NonIncreasingX`]     : `x` not strictly increasing
pub fn trapezoid_samples(x: &[f64], y: &[f64]) -> Result<f64, IntegrationError> {
    if x.is_empty() || y.is_empty() {
        return Err(IntegrationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(IntegrationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(IntegrationError::InsufficientPoints { got: x.len() });
    }
    if let Some(idx) = x.iter().chain(y).position(|v| !v.is_finite()) {
        return Err(IntegrationError::NonFiniteVec { idx: idx % x.len() });
    }
    if let Some(idx) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(IntegrationError::NonIncreasingX { idx: idx + 1 });
    }

    Ok(x.windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| 0.5 * (xw[1] - xw[0]) * (yw[0] + yw[1]))
        .sum())
}


/// Uniform samples of an integrand together with its running integral.
///
/// [`SampledIntegral`]
/// - `x`           : grid nodes, `x[0] = a`, `x[n] = b`
/// - `y`           : integrand at each node (guarded)
/// - `cumulative`  : trapezoid integral from `a` to `x[i]`; `cumulative[0] = 0`
/// - `value`       : integral over `[a, b]`, equal to `cumulative[n]`
/// - `evaluations` : function evaluations, guard retries included
///
/// The three sequences have equal length `n + 1 >= 2` and are never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledIntegral {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub cumulative: Vec<f64>,
    pub value: f64,
    pub evaluations: usize,
}
impl SampledIntegral {
    #[inline]
    pub fn len(&self) -> usize { self.x.len() }

    /// `false` for every value built by this module: the grid holds at least `a` and `b`.
    #[inline]
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// `(x_i, y_i, cumulative_i)` triples in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x.iter()
            .zip(&self.y)
            .zip(&self.cumulative)
            .map(|((&x, &y), &c)| (x, y, c))
    }
}


/// Samples `func` on `steps` equal panels over `[a, b]` and accumulates
/// the trapezoid integral node by node.
///
/// # Errors
/// Same as [`trapezoid`], with `steps` in place of `n`.
pub fn cumulative_trapezoid<F>(
    mut func: F,
    a: f64,
    b: f64,
    steps: usize,
) -> Result<SampledIntegral, IntegrationError>
where F: FnMut(f64) -> f64 {
    check_bounds(a, b)?;
    if steps == 0 {
        return Err(IntegrationError::InvalidPanelCount { got: steps });
    }

    let mut eval = GuardedEval::new(&mut func);
    let x: Vec<f64> = (0..=steps).map(|i| grid_node(a, b, steps, i)).collect();
    let y = x.iter()
        .enumerate()
        .map(|(i, &xi)| eval.at(xi, node_direction(i, steps)))
        .collect::<Result<Vec<f64>, DomainError>>()?;

    let mut cumulative = Vec::with_capacity(x.len());
    let mut running = 0.0;
    cumulative.push(running);
    for i in 1..x.len() {
        running += 0.5 * (x[i] - x[i - 1]) * (y[i - 1] + y[i]);
        cumulative.push(running);
    }

    Ok(SampledIntegral {
        value: running,
        evaluations: eval.evaluations(),
        x,
        y,
        cumulative,
    })
}
