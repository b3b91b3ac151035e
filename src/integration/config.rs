//! Budgets for the integration algorithms.
//!
//! ┌ [`CompositeCfg`]   : `panels`
//! ├ [`SensitivityCfg`] : `mesh`, `sensitivity`, `max_panels`
//! └ [`ToleranceCfg`]   : `tol`, `max_depth`
//!
//! `set_*` setters validate eagerly; every integrator calls `validate()`
//! again since serde-built configs skip the setters.

use serde::{Deserialize, Serialize};
use super::algorithms::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_PANELS, DEFAULT_STEPS, MAX_DEPTH};
use super::errors::IntegrationError;


/// Composite trapezoid budget: number of equal panels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeCfg {
    panels: usize,
}
impl CompositeCfg {
    #[must_use]
    pub fn new() -> Self { Self { panels: DEFAULT_STEPS } }

    pub fn set_panels(mut self, v: usize) -> Result<Self, IntegrationError> {
        self.panels = v;
        self.validate()?;
        Ok(self)
    }

    #[inline] pub fn panels(&self) -> usize { self.panels }

    pub fn validate(&self) -> Result<(), IntegrationError> {
        if self.panels == 0 {
            return Err(IntegrationError::InvalidPanelCount { got: self.panels });
        }
        Ok(())
    }
}
impl Default for CompositeCfg {
    fn default() -> Self { Self::new() }
}


/// Sensitivity-adaptive budget.
///
/// # Fields
/// - `mesh`        : number of uniform mesh intervals `d` (`d + 1` nodes), >= 1
/// - `sensitivity` : curvature weight, finite and >= 0
/// - `max_panels`  : sub-panel cap per mesh interval, >= 2, rounded down to even
///
/// # Defaults
/// - `mesh = 16`, `sensitivity = 1.0`, `max_panels = 4096`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCfg {
    mesh: usize,
    sensitivity: f64,
    max_panels: usize,
}
impl SensitivityCfg {
    pub const DEFAULT_MESH: usize = 16;
    pub const DEFAULT_SENSITIVITY: f64 = 1.0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            mesh: Self::DEFAULT_MESH,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            max_panels: DEFAULT_MAX_PANELS,
        }
    }

    pub fn set_mesh(mut self, v: usize) -> Result<Self, IntegrationError> {
        if v == 0 {
            return Err(IntegrationError::InvalidMeshCount { got: v });
        }
        self.mesh = v;
        Ok(self)
    }
    pub fn set_sensitivity(mut self, v: f64) -> Result<Self, IntegrationError> {
        if !v.is_finite() || v < 0.0 {
            return Err(IntegrationError::InvalidSensitivity { got: v });
        }
        self.sensitivity = v;
        Ok(self)
    }
    pub fn set_max_panels(mut self, v: usize) -> Result<Self, IntegrationError> {
        if v < 2 {
            return Err(IntegrationError::InvalidMaxPanels { got: v });
        }
        self.max_panels = v;
        Ok(self)
    }

    #[inline] pub fn mesh(&self) -> usize { self.mesh }
    #[inline] pub fn sensitivity(&self) -> f64 { self.sensitivity }
    #[inline] pub fn max_panels(&self) -> usize { self.max_panels }

    pub fn validate(&self) -> Result<(), IntegrationError> {
        Self::new()
            .set_mesh(self.mesh)?
            .set_sensitivity(self.sensitivity)?
            .set_max_panels(self.max_panels)?;
        Ok(())
    }
}
impl Default for SensitivityCfg {
    fn default() -> Self { Self::new() }
}


/// Tolerance-adaptive budget.
///
/// # Fields
/// - `tol`       : local error tolerance on the whole domain, halved per bisection
/// - `max_depth` : bisection depth budget, <= [`MAX_DEPTH`]
///
/// # Defaults
/// - `tol = 1e-8`, `max_depth = 20`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceCfg {
    tol: f64,
    max_depth: usize,
}
impl ToleranceCfg {
    pub const DEFAULT_TOL: f64 = 1e-8;

    #[must_use]
    pub fn new() -> Self {
        Self { tol: Self::DEFAULT_TOL, max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn set_tol(mut self, v: f64) -> Result<Self, IntegrationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(IntegrationError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }
    pub fn set_max_depth(mut self, v: usize) -> Result<Self, IntegrationError> {
        if v > MAX_DEPTH {
            return Err(IntegrationError::InvalidDepth { got: v, max: MAX_DEPTH });
        }
        self.max_depth = v;
        Ok(self)
    }

    #[inline] pub fn tol(&self) -> f64 { self.tol }
    #[inline] pub fn max_depth(&self) -> usize { self.max_depth }

    pub fn validate(&self) -> Result<(), IntegrationError> {
        Self::new().set_tol(self.tol)?.set_max_depth(self.max_depth)?;
        Ok(())
    }
}
impl Default for ToleranceCfg {
    fn default() -> Self { Self::new() }
}
