//! Integration algorithm definitions and shared limits.


/// Uniform panel count used when none is given (the sampled-curve default).
pub const DEFAULT_STEPS: usize = 10_000;

/// Per-interval sub-panel cap of the sensitivity-adaptive integrator.
pub const DEFAULT_MAX_PANELS: usize = 4096;

/// Default bisection depth of the tolerance-adaptive integrator.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Hard cap on bisection depth; bounds the work at `2^MAX_DEPTH` leaf intervals.
pub const MAX_DEPTH: usize = 30;


/// Integration algorithm variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Composite,
    SensitivityAdaptive,
    ToleranceAdaptive,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Composite           => "composite_trapezoid",
            Algorithm::SensitivityAdaptive => "sensitivity_adaptive",
            Algorithm::ToleranceAdaptive   => "tolerance_adaptive",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
