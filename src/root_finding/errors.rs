//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ function undefined even after the guard nudge
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     ├ invalid input tolerances
//!     └ invalid or non-finite computed tolerances
//!
//! Numeric breakdown during iteration (vanishing slope or derivative) and
//! exhausted iteration budgets are not errors; they are reported through
//! [`crate::report::ConvergenceReport`] with `converged = false`.


use thiserror::Error;
use crate::evaluation::DomainError;


/// Root-finding runtime errors.
///
/// ┌ Function undefined at an iterate, even after the guard nudge
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Tolerance configuration and evaluation errors.
///
/// ┌ Invalid input tolerances (`abs_fx`, `abs_x`, `rel_x`)
/// └ Computed tolerance invalid (<= 0 or non-finite)
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("invalid `abs_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidAbsX  { got: f64 },

    #[error("invalid `rel_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidRelX  { got: f64 },

    #[error("either `abs_x` or `rel_x` must be > 0. got {abs_x} and {rel_x}")]
    InvalidAbsRelX { abs_x: f64, rel_x: f64},

    #[error("invalid computed tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}


/// Implements `From<DomainError>` for a method error that wraps
/// [`RootFindingError`] in a `RootFinding` variant, so guarded
/// evaluations can use `?` directly.
macro_rules! impl_from_domain_error {
    ($err:ty) => {
        impl From<$crate::evaluation::DomainError> for $err {
            fn from(e: $crate::evaluation::DomainError) -> Self {
                Self::RootFinding($crate::root_finding::errors::RootFindingError::Domain(e))
            }
        }
    };
}
pub(crate) use impl_from_domain_error;
