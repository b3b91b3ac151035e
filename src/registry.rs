//! Closed registry of benchmark functions.
//!
//! Each [`TestFunction`] carries its closed-form derivative, a default
//! integration domain, a sign-changing bracket when it has one, and the
//! exact integral over its domain. Names are resolved once through
//! [`FromStr`]; the solvers only ever see the resolved variant.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;


#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown function `{name}`; expected one of: {}", TestFunction::names().join(", "))]
    UnknownFunction { name: String },
}


/// Registered functions.
///
/// | variant          | f(x)            | domain    | bracket  |
/// |------------------|-----------------|-----------|----------|
/// | `Square`         | x^2             | [0, 1]    | none     |
/// | `SquareMinusTwo` | x^2 - 2         | [0, 2]    | [1, 2]   |
/// | `Cubic`          | x^3 - x - 2     | [1, 2]    | [1, 2]   |
/// | `Sine`           | sin x           | [0, pi]   | [3, 4]   |
/// | `Exponential`    | e^x             | [0, 1]    | none     |
/// | `Reciprocal`     | 1/x             | [1, 2]    | none     |
/// | `CosineFixed`    | cos x - x       | [0, 1]    | [0, 1]   |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestFunction {
    Square,
    SquareMinusTwo,
    Cubic,
    Sine,
    Exponential,
    Reciprocal,
    CosineFixed,
}

impl TestFunction {
    pub const ALL: [TestFunction; 7] = [
        TestFunction::Square,
        TestFunction::SquareMinusTwo,
        TestFunction::Cubic,
        TestFunction::Sine,
        TestFunction::Exponential,
        TestFunction::Reciprocal,
        TestFunction::CosineFixed,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TestFunction::Square         => "square",
            TestFunction::SquareMinusTwo => "square_minus_two",
            TestFunction::Cubic          => "cubic",
            TestFunction::Sine           => "sine",
            TestFunction::Exponential    => "exponential",
            TestFunction::Reciprocal     => "reciprocal",
            TestFunction::CosineFixed    => "cosine_fixed",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }

    #[inline]
    pub fn evaluate(self, x: f64) -> f64 {
        match self {
            TestFunction::Square         => x * x,
            TestFunction::SquareMinusTwo => x * x - 2.0,
            TestFunction::Cubic          => x * x * x - x - 2.0,
            TestFunction::Sine           => x.sin(),
            TestFunction::Exponential    => x.exp(),
            TestFunction::Reciprocal     => 1.0 / x,
            TestFunction::CosineFixed    => x.cos() - x,
        }
    }

    #[inline]
    pub fn derivative(self, x: f64) -> f64 {
        match self {
            TestFunction::Square         => 2.0 * x,
            TestFunction::SquareMinusTwo => 2.0 * x,
            TestFunction::Cubic          => 3.0 * x * x - 1.0,
            TestFunction::Sine           => x.cos(),
            TestFunction::Exponential    => x.exp(),
            TestFunction::Reciprocal     => -1.0 / (x * x),
            TestFunction::CosineFixed    => -x.sin() - 1.0,
        }
    }

    /// Default integration domain `(lower, upper)`.
    pub const fn domain(self) -> (f64, f64) {
        match self {
            TestFunction::Square         => (0.0, 1.0),
            TestFunction::SquareMinusTwo => (0.0, 2.0),
            TestFunction::Cubic          => (1.0, 2.0),
            TestFunction::Sine           => (0.0, PI),
            TestFunction::Exponential    => (0.0, 1.0),
            TestFunction::Reciprocal     => (1.0, 2.0),
            TestFunction::CosineFixed    => (0.0, 1.0),
        }
    }

    /// Bracket with a sign change, if the function has a real root worth bracketing.
    pub const fn bracket(self) -> Option<(f64, f64)> {
        match self {
            TestFunction::SquareMinusTwo => Some((1.0, 2.0)),
            TestFunction::Cubic          => Some((1.0, 2.0)),
            TestFunction::Sine           => Some((3.0, 4.0)),
            TestFunction::CosineFixed    => Some((0.0, 1.0)),
            TestFunction::Square
            | TestFunction::Exponential
            | TestFunction::Reciprocal   => None,
        }
    }

    /// Exact integral over [`TestFunction::domain`].
    pub fn integral(self) -> f64 {
        match self {
            TestFunction::Square         => 1.0 / 3.0,
            TestFunction::SquareMinusTwo => 8.0 / 3.0 - 4.0,
            TestFunction::Cubic          => 3.75 - 1.5 - 2.0,
            TestFunction::Sine           => 2.0,
            TestFunction::Exponential    => std::f64::consts::E - 1.0,
            TestFunction::Reciprocal     => std::f64::consts::LN_2,
            TestFunction::CosineFixed    => 1.0_f64.sin() - 0.5,
        }
    }

    /// Function as a closure, for APIs taking `FnMut(f64) -> f64`.
    pub fn as_fn(self) -> impl Fn(f64) -> f64 {
        move |x| self.evaluate(x)
    }

    pub fn derivative_fn(self) -> impl Fn(f64) -> f64 {
        move |x| self.derivative(x)
    }
}

impl FromStr for TestFunction {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|f| f.name() == key)
            .ok_or_else(|| RegistryError::UnknownFunction { name: s.to_string() })
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
