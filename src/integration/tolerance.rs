//! Tolerance-adaptive trapezoid integration
//!
//! On each interval `[a, b]` with midpoint `m` and width `h` compare
//!
//! ```text
//! T1 = h/2 * (f(a) + f(b))
//! T2 = h/4 * (f(a) + 2 f(m) + f(b))
//! ```
//!
//! Accept `T2` when `|T1 - T2| < tol` or the depth budget is spent;
//! otherwise bisect and require `tol / 2` on each half.
//!
//! The recursion runs on an explicit work stack, left half before right,
//! and every node value is computed once and handed down to the children.
//! At most `2^max_depth` leaves are visited.

use crate::evaluation::{Direction, GuardedEval};
use crate::report::{ConvergenceReport, Stencil, ToleranceSatisfied};
use super::algorithms::Algorithm;
use super::config::ToleranceCfg;
use super::errors::{check_bounds, IntegrationError};


#[derive(Debug, Copy, Clone)]
struct Segment {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
    tol: f64,
    depth_left: usize,
    level: usize,
}


/// Tolerance-adaptive integral of `func` over `[a, b]` under `cfg`.
///
/// Returns a [`ConvergenceReport`] with
/// - `value`       : sum of accepted `T2` estimates
/// - `residual`    : sum of `|T1 - T2|` over the leaves
/// - `converged`   : every leaf met its local tolerance
/// - `iterations`  : number of bisections
/// - `stencil`     : [`Stencil::Partition`] with leaf count and deepest level
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`]    : non-finite bounds or `a >= b`
/// - [`IntegrationError::InvalidTolerance`] : `tol` non-finite or `<= 0`
/// - [`IntegrationError::InvalidDepth`]     : `max_depth > MAX_DEPTH`
/// - [`IntegrationError::Domain`]           : `func` undefined at a node even after the guard nudge
///
/// # Notes
/// - A spent depth budget is not an error: the leaf keeps its `T2` and the
///   report comes back with `converged = false`.
/// - `tol` bounds the local estimate, not the true error.
pub fn adaptive_tolerance_with<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: ToleranceCfg,
) -> Result<ConvergenceReport, IntegrationError>
where F: FnMut(f64) -> f64 {
    check_bounds(a, b)?;
    cfg.validate()?;

    let mut eval = GuardedEval::new(&mut func);
    let fa = eval.at(a, Direction::Increase)?;
    let fb = eval.at(b, Direction::Decrease)?;

    let mut stack = Vec::with_capacity(cfg.max_depth() + 1);
    stack.push(Segment { a, b, fa, fb, tol: cfg.tol(), depth_left: cfg.max_depth(), level: 0 });

    let mut value = 0.0;
    let mut residual = 0.0;
    let mut leaves = 0usize;
    let mut unconverged = 0usize;
    let mut subdivisions = 0usize;
    let mut deepest = 0usize;

    while let Some(seg) = stack.pop() {
        let h = seg.b - seg.a;
        let m = seg.a + 0.5 * h;
        let fm = eval.at(m, Direction::Increase)?;

        let t1 = 0.5 * h * (seg.fa + seg.fb);
        let t2 = 0.25 * h * (seg.fa + 2.0 * fm + seg.fb);
        let diff = (t1 - t2).abs();

        if diff < seg.tol || seg.depth_left == 0 {
            if diff >= seg.tol {
                unconverged += 1;
            }
            value += t2;
            residual += diff;
            leaves += 1;
            deepest = deepest.max(seg.level);
            continue;
        }

        subdivisions += 1;
        let half = Segment { tol: 0.5 * seg.tol, depth_left: seg.depth_left - 1, level: seg.level + 1, ..seg };
        stack.push(Segment { a: m, fa: fm, ..half });
        stack.push(Segment { b: m, fb: fm, ..half });
    }

    let stencil = Stencil::Partition { intervals: leaves, depth: deepest };
    let name = Algorithm::ToleranceAdaptive.algorithm_name();

    if unconverged == 0 {
        return Ok(ConvergenceReport::converged(
            value,
            residual,
            subdivisions,
            eval.evaluations(),
            ToleranceSatisfied::LocalErrorReached,
            stencil,
            name,
        ));
    }

    Ok(ConvergenceReport {
        message: Some(format!(
            "{unconverged} of {leaves} intervals hit the depth limit of {} before meeting their tolerance",
            cfg.max_depth(),
        )),
        ..ConvergenceReport::iteration_limit(value, residual, subdivisions, eval.evaluations(), stencil, name)
    })
}


/// Tolerance-adaptive integral of `func` over `[a, b]` with local
/// tolerance `tol` and `remaining_depth` bisections at most.
///
/// # Errors
/// See [`adaptive_tolerance_with`].
pub fn adaptive_tolerance<F>(
    func: F,
    a: f64,
    b: f64,
    tol: f64,
    remaining_depth: usize,
) -> Result<ConvergenceReport, IntegrationError>
where F: FnMut(f64) -> f64 {
    let cfg = ToleranceCfg::new()
        .set_tol(tol)?
        .set_max_depth(remaining_depth)?;
    adaptive_tolerance_with(func, a, b, cfg)
}
