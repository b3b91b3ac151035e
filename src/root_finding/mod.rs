// common helpers
pub mod algorithms;
pub mod errors;
pub(crate) mod config;
pub(crate) mod signs;
pub(crate) mod tolerances;

// algorithms
pub mod bisection;
pub mod secant;
pub mod newton;

pub use errors::{RootFindingError, ToleranceError};
pub use bisection::{bisection, BisectionCfg, BisectionError, ZeroCheck};
pub use secant::{secant, SecantCfg, SecantError};
pub use newton::{newton, NewtonCfg, NewtonError};
