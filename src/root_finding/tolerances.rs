//! Stopping tolerances for the root-finding algorithms.
//!
//! Every method scales the same absolute/relative pair by a pair of points:
//! - bracketing methods : the bracket ends `[a, b]`
//! - open methods       : the two iterates bounding the last step


use crate::root_finding::errors::ToleranceError;
use crate::root_finding::algorithms::Algorithm;


/// Per-iteration tolerance `abs_x + rel_x * max(|p0|, |p1|, 1.0)`.
///
/// `points` is the current bracket for [`Algorithm::Bracket`] methods,
/// where the result bounds the half-width, and the previous and next
/// iterate for [`Algorithm::Open`] methods, where it bounds the step.
///
/// # Errors
/// - [`ToleranceError::InvalidTolerance`] if the result is non-finite or `<= 0`.
pub(crate) fn scaled_tolerance(
    points: [f64; 2],
    abs_x : f64,
    rel_x : f64,
) -> Result<f64, ToleranceError> {
    let scale = points.iter().fold(1.0_f64, |m, p| m.max(p.abs()));
    let tol   = abs_x + rel_x * scale;

    if tol <= 0.0 || !tol.is_finite() {
        return Err(ToleranceError::InvalidTolerance { got: tol });
    }
    Ok(tol)
}


impl Algorithm {
    /// Bisection-step upper bound for shrinking the half-width of `[a, b]`
    /// below `width_tol`: `ceil(log2((b - a) / width_tol))`.
    pub(crate) fn theoretical_iter(a: f64, b: f64, width_tol: f64) -> usize {
        let w0 = b - a;
        if w0 <= width_tol { 0 } else { (w0 / width_tol).log2().ceil() as usize }
    }
}
