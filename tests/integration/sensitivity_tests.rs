use approx::{assert_abs_diff_eq, assert_relative_eq};

use quadroot::integration::config::SensitivityCfg;
use quadroot::integration::errors::IntegrationError;
use quadroot::integration::sensitivity::{
    adaptive_sensitivity, adaptive_sensitivity_with, sensitivity_profile,
};

type TestResult = Result<(), IntegrationError>;

#[test]
fn constant_function_ignores_sensitivity() -> TestResult {
    let f = |_x: f64| 3.0;
    for s in [0.0, 1.0, 1e6] {
        let got = adaptive_sensitivity(f, (-1.0, 2.0), 10, s)?;
        assert_relative_eq!(got, 9.0, max_relative = 1e-12);
    }

    let cfg     = SensitivityCfg::new().set_sensitivity(1e6)?;
    let profile = sensitivity_profile(f, (-1.0, 2.0), cfg)?;
    assert!(profile.second_derivatives.iter().all(|&f2| f2 == 0.0));
    assert!(profile.panel_counts.iter().all(|&k| k == 2));
    Ok(())
}

#[test]
fn parabola_is_close() -> TestResult {
    let got = adaptive_sensitivity(|x| x * x, (0.0, 1.0), 8, 1.0)?;
    assert_abs_diff_eq!(got, 1.0 / 3.0, epsilon = 1e-3);
    Ok(())
}

#[test]
fn more_sensitivity_refines_curved_regions() -> TestResult {
    let f     = |x: f64| x.sin();
    let pi    = std::f64::consts::PI;
    let flat  = adaptive_sensitivity_with(f, (0.0, pi), SensitivityCfg::new().set_sensitivity(0.0)?)?;
    let sharp = adaptive_sensitivity_with(f, (0.0, pi), SensitivityCfg::new().set_sensitivity(100.0)?)?;

    assert!(sharp.profile.total_panels() > flat.profile.total_panels());
    assert!(sharp.evaluations > flat.evaluations);
    assert!((sharp.value - 2.0).abs() < (flat.value - 2.0).abs());
    Ok(())
}

#[test]
fn profile_shape() -> TestResult {
    let cfg = SensitivityCfg::new()
        .set_mesh(6)?
        .set_sensitivity(1e9)?
        .set_max_panels(9)?;
    let profile = sensitivity_profile(|x: f64| x.exp(), (0.0, 3.0), cfg)?;

    assert_eq!(profile.nodes.len(), 7);
    assert_eq!(profile.second_derivatives.len(), 7);
    assert_eq!(profile.panel_counts.len(), 6);
    assert_eq!(profile.nodes.last().copied(), Some(3.0));
    assert_eq!(profile.evaluations, 7);
    assert!(profile.panel_counts.iter().all(|&k| k == 8));
    Ok(())
}

#[test]
fn single_interval_has_flat_profile() -> TestResult {
    let cfg     = SensitivityCfg::new().set_mesh(1)?;
    let profile = sensitivity_profile(|x: f64| x.powi(4), (0.0, 1.0), cfg)?;

    assert_eq!(profile.second_derivatives, vec![0.0, 0.0]);
    assert_eq!(profile.panel_counts, vec![2]);
    Ok(())
}

#[test]
fn invalid_budgets() {
    assert!(matches!(
        adaptive_sensitivity(|x| x, (0.0, 1.0), 0, 1.0).unwrap_err(),
        IntegrationError::InvalidMeshCount { got: 0 }
    ));
    assert!(matches!(
        adaptive_sensitivity(|x| x, (0.0, 1.0), 4, -1.0).unwrap_err(),
        IntegrationError::InvalidSensitivity { .. }
    ));
    assert!(matches!(
        SensitivityCfg::new().set_max_panels(1).unwrap_err(),
        IntegrationError::InvalidMaxPanels { got: 1 }
    ));
    assert!(matches!(
        adaptive_sensitivity(|x| x, (1.0, 1.0), 4, 1.0).unwrap_err(),
        IntegrationError::InvalidBounds { .. }
    ));
}

#[test]
fn config_from_json_is_validated() {
    let cfg: SensitivityCfg =
        serde_json::from_str(r#"{"mesh":0,"sensitivity":1.0,"max_panels":16}"#).unwrap();
    assert!(matches!(
        adaptive_sensitivity_with(|x| x, (0.0, 1.0), cfg).unwrap_err(),
        IntegrationError::InvalidMeshCount { got: 0 }
    ));
}
