//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap and the
//! divisor thresholds below which an open-method step is degenerate.


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`].
/// This cap is only applied when a bracket algorithm’s theoretical iteration bound
/// would otherwise exceed it (e.g. [`BracketFamily::Bisection`]).
///
/// Serves as a practical safeguard against iteration counts that are
/// mathematically valid but computationally excessive.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;

/// Secant steps with `|f(x1) - f(x0)|` below this are reported as degenerate.
pub const DEGENERATE_SLOPE: f64 = 1e-12;

/// Newton steps with `|f'(x)|` below this are reported as degenerate.
pub const DEGENERATE_DERIVATIVE: f64 = 1e-12;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton
}

impl Algorithm {
    pub const BISECTION: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    pub const SECANT:    Algorithm = Algorithm::Open(OpenFamily::Secant);
    pub const NEWTON:    Algorithm = Algorithm::Open(OpenFamily::Newton);

    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - Values are heuristic and method-specific.
    /// - Methods with theoretical bounds (e.g. [`BracketFamily::Bisection`])
    ///   return `None`, meaning “compute theoretical bound instead”.
    ///   - If that bound exceeds practical limits,
    ///     [`GLOBAL_MAX_ITER_FALLBACK`] is used.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::Secant)          => Some(100),
            Algorithm::Open(OpenFamily::Newton)          => Some(50),
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
