pub mod algorithms;
pub mod config;
pub mod errors;

pub mod trapezoid;
pub mod sensitivity;
pub mod tolerance;

pub use config::{CompositeCfg, SensitivityCfg, ToleranceCfg};
pub use errors::IntegrationError;
pub use trapezoid::{cumulative_trapezoid, trapezoid, trapezoid_samples, SampledIntegral};
pub use sensitivity::{
    adaptive_sensitivity, adaptive_sensitivity_with, sensitivity_profile,
    SensitivityIntegral, SensitivityProfile,
};
pub use tolerance::{adaptive_tolerance, adaptive_tolerance_with};
