//! Integration error types.
//!
//! ┌ undefined integrand, even after the guard nudge
//! ├ malformed domain or budget (panel count, mesh, sensitivity, tolerance, depth)
//! └ malformed tabulated data for [`super::trapezoid::trapezoid_samples`]
//!
//! An exhausted depth budget is not an error; it is reported through
//! [`crate::report::ConvergenceReport`] with `converged = false`.

use thiserror::Error;
use crate::evaluation::DomainError;


#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid bounds: lower and upper must be finite with lower < upper. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid panel count: must be >= 1. got {got}")]
    InvalidPanelCount { got: usize },

    #[error("invalid mesh count: must be >= 1. got {got}")]
    InvalidMeshCount { got: usize },

    #[error("invalid sensitivity: must be finite and >= 0. got {got}")]
    InvalidSensitivity { got: f64 },

    #[error("invalid max_panels: must be >= 2. got {got}")]
    InvalidMaxPanels { got: usize },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid depth: must be <= {max}. got {got}")]
    InvalidDepth { got: usize, max: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("x-values must be strictly increasing; violated at index {idx}")]
    NonIncreasingX { idx: usize },
}


/// Domain check shared by every integrator: finite bounds, `a < b`.
pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), IntegrationError> {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(IntegrationError::InvalidBounds { a, b });
    }
    Ok(())
}
