//! Guarded numerical integration and root finding on `f64` functions.
//!
//! ```text
//! evaluation   guarded evaluation with a single nudge past singular points
//! integration  composite, sensitivity-adaptive and tolerance-adaptive trapezoid
//! root_finding bisection, secant, Newton-Raphson
//! report       ConvergenceReport shared by every iterative method
//! registry     named benchmark functions with derivatives and domains
//! solve        `integrate` / `find_root` dispatch
//! ```
//!
//! Caller mistakes (bad bounds, bad budgets, no sign change) and functions
//! that stay undefined after the guard nudge are errors. Everything else,
//! including exhausted budgets and vanishing divisors, comes back as a
//! [`ConvergenceReport`] with `converged = false`.
//!
//! ```
//! use quadroot::{find_root, integrate, Quadrature, RootSearch};
//! use quadroot::integration::ToleranceCfg;
//! use quadroot::root_finding::BisectionCfg;
//!
//! let area = integrate(Quadrature::ToleranceAdaptive(ToleranceCfg::new()), |x| x * x, 0.0, 1.0)?;
//! assert!((area.value.unwrap_or(f64::NAN) - 1.0 / 3.0).abs() < 1e-6);
//!
//! let search = RootSearch::Bisection { a: 1.0, b: 2.0, cfg: BisectionCfg::new() };
//! let root = find_root(search, |x| x * x - 2.0, None::<fn(f64) -> f64>)?;
//! assert!(root.converged);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod evaluation;
pub mod report;
pub mod integration;
pub mod root_finding;
pub mod registry;
pub mod solve;

pub use evaluation::{evaluate, guard_point, Direction, DomainError, Evaluation, GUARD_EPSILON};
pub use report::{ConvergenceReport, Stencil, TerminationReason, ToleranceSatisfied};
pub use registry::TestFunction;
pub use solve::{find_root, integrate, Quadrature, RootSearch, SolveError};
