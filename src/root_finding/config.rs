//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerances and iteration limits,
//! embedded in every solver config.
//!
//! [`CommonCfg`] : universal fields
//! ├ `abs_fx`   : function-value tolerance for the zero test
//! ├ `abs_x`    : absolute step/half-width tolerance
//! ├ `rel_x`    : relative step/half-width tolerance
//! └ `max_iter` : iteration cap (optional)
//!
//! Setters generated by [`impl_common_cfg`] validate the updated config
//! before keeping it. Configs built
//! through serde skip the setters, so every solver calls
//! [`CommonCfg::validate`] before evaluating the function.

use serde::{Deserialize, Serialize};
use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};
use super::errors::{RootFindingError, ToleranceError};


pub const DEFAULT_ABS_FX : f64 = 1e-14;
pub const DEFAULT_ABS_X  : f64 = 1e-10;
pub const DEFAULT_REL_X  : f64 = 4.0 * f64::EPSILON;


#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonCfg {
    abs_fx: f64,
    abs_x:  f64,
    rel_x:  f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            abs_fx   : DEFAULT_ABS_FX,
            abs_x    : DEFAULT_ABS_X,
            rel_x    : DEFAULT_REL_X,
            max_iter : None
        }
    }

    /// Purely absolute step tolerance `abs_x`, used by methods whose
    /// convergence test is a fixed threshold (e.g. secant).
    pub fn absolute(abs_x: f64) -> Self {
        Self { abs_x, rel_x: 0.0, ..Self::new() }
    }

    // getters
    pub fn abs_fx(&self)   -> f64 { self.abs_fx }
    pub fn abs_x(&self)    -> f64 { self.abs_x }
    pub fn rel_x(&self)    -> f64 { self.rel_x }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal)
    pub(crate) fn with_abs_fx   (&mut self, v: f64)   { self.abs_fx   = v; }
    pub(crate) fn with_abs_x    (&mut self, v: f64)   { self.abs_x    = v; }
    pub(crate) fn with_rel_x    (&mut self, v: f64)   { self.rel_x    = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }

    /// Copy of `self` with `update` applied, kept only if it validates.
    pub(crate) fn updated(
        mut self,
        update: impl FnOnce(&mut Self),
    ) -> Result<Self, ToleranceError> {
        update(&mut self);
        self.validate()?;
        Ok(self)
    }

    /// Re-checks every field.
    ///
    /// ├ `abs_fx` >  0 and finite
    /// ├ `abs_x`  >= 0 and finite
    /// ├ `rel_x`  >= 0 and finite
    /// └ either `abs_x` or `rel_x` > 0
    pub fn validate(&self) -> Result<(), ToleranceError> {
        if !self.abs_fx.is_finite() || self.abs_fx <= 0.0 {
            return Err(ToleranceError::InvalidAbsFx { got: self.abs_fx });
        }
        if !self.abs_x.is_finite() || self.abs_x < 0.0 {
            return Err(ToleranceError::InvalidAbsX { got: self.abs_x });
        }
        if !self.rel_x.is_finite() || self.rel_x < 0.0 {
            return Err(ToleranceError::InvalidRelX { got: self.rel_x });
        }
        if self.abs_x == 0.0 && self.rel_x == 0.0 {
            return Err(ToleranceError::InvalidAbsRelX { abs_x: self.abs_x, rel_x: self.rel_x });
        }
        Ok(())
    }

    /// Iteration budget for `algorithm`.
    ///
    /// ├ explicit `max_iter` wins (must be >= 1)
    /// ├ otherwise [`Algorithm::default_max_iter`]
    /// └ otherwise `theoretical`, clamped to [`GLOBAL_MAX_ITER_FALLBACK`]
    pub(crate) fn resolve_max_iter(
        &self,
        algorithm: Algorithm,
        theoretical: Option<usize>,
    ) -> Result<usize, RootFindingError> {
        match self.max_iter {
            Some(0) => Err(RootFindingError::InvalidMaxIter { got: 0 }),
            Some(v) => Ok(v),
            None    => Ok(algorithm
                .default_max_iter()
                .or(theoretical.map(|t| t.min(GLOBAL_MAX_ITER_FALLBACK)))
                .unwrap_or(GLOBAL_MAX_ITER_FALLBACK)),
        }
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_abs_fx(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common = self.common.updated(|c| c.with_abs_fx(v))?;
                Ok(self)
            }
            /// `abs_x = 0` is accepted only while `rel_x > 0`.
            pub fn set_abs_x(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common = self.common.updated(|c| c.with_abs_x(v))?;
                Ok(self)
            }
            /// `rel_x = 0` is accepted only while `abs_x > 0`.
            pub fn set_rel_x(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common = self.common.updated(|c| c.with_rel_x(v))?;
                Ok(self)
            }
            /// Absolute-only tolerance: `abs_x = v`, `rel_x = 0`.
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidAbsX { got: v }
                    );
                }
                self.common = self.common.updated(|c| {
                    c.with_abs_x(v);
                    c.with_rel_x(0.0);
                })?;
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] pub fn abs_fx(&self) -> f64 { self.common.abs_fx() }
            #[inline] pub fn abs_x(&self) -> f64 { self.common.abs_x() }
            #[inline] pub fn rel_x(&self) -> f64 { self.common.rel_x() }
            #[inline] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;
