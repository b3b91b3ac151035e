use approx::{assert_abs_diff_eq, assert_relative_eq};

use quadroot::integration::algorithms::DEFAULT_STEPS;
use quadroot::integration::errors::IntegrationError;
use quadroot::integration::trapezoid::{cumulative_trapezoid, trapezoid, trapezoid_samples};

type TestResult = Result<(), IntegrationError>;

#[test]
fn linear_is_exact_with_one_panel() -> TestResult {
    let got = trapezoid(|x| 3.0 * x + 1.0, 0.0, 2.0, 1)?;
    assert_relative_eq!(got, 8.0);
    Ok(())
}

#[test]
fn error_decreases_with_panel_count() -> TestResult {
    let exact  = 1.0 / 3.0;
    let coarse = (trapezoid(|x| x * x, 0.0, 1.0, 1_000)? - exact).abs();
    let fine   = (trapezoid(|x| x * x, 0.0, 1.0, 100_000)? - exact).abs();

    assert!(coarse < 1e-6);
    assert!(fine < coarse);
    Ok(())
}

#[test]
fn singular_endpoint_is_nudged() -> TestResult {
    let got = trapezoid(|x: f64| 1.0 / x.sqrt(), 0.0, 1.0, 100)?;
    assert!(got.is_finite() && got > 0.0);
    Ok(())
}

#[test]
fn invalid_inputs() -> TestResult {
    assert!(matches!(
        trapezoid(|x| x, 0.0, 1.0, 0).unwrap_err(),
        IntegrationError::InvalidPanelCount { got: 0 }
    ));
    assert!(matches!(
        trapezoid(|x| x, 1.0, 0.0, 10).unwrap_err(),
        IntegrationError::InvalidBounds { .. }
    ));
    assert!(matches!(
        trapezoid(|x| x, 0.0, f64::INFINITY, 10).unwrap_err(),
        IntegrationError::InvalidBounds { .. }
    ));
    Ok(())
}

#[test]
fn undefined_region_is_a_domain_error() {
    let err = trapezoid(|x: f64| (x - 0.5).ln(), 0.0, 1.0, 4).unwrap_err();
    assert!(matches!(err, IntegrationError::Domain(_)));
}

#[test]
fn samples_on_uneven_grid() -> TestResult {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 1.0, 3.0];
    assert_relative_eq!(trapezoid_samples(&x, &y)?, 4.5);
    Ok(())
}

#[test]
fn samples_are_validated() {
    assert!(matches!(
        trapezoid_samples(&[], &[]).unwrap_err(),
        IntegrationError::EmptyInput
    ));
    assert!(matches!(
        trapezoid_samples(&[0.0, 1.0], &[1.0]).unwrap_err(),
        IntegrationError::UnequalLength { x_len: 2, y_len: 1 }
    ));
    assert!(matches!(
        trapezoid_samples(&[0.0], &[1.0]).unwrap_err(),
        IntegrationError::InsufficientPoints { got: 1 }
    ));
    assert!(matches!(
        trapezoid_samples(&[0.0, 1.0], &[1.0, f64::NAN]).unwrap_err(),
        IntegrationError::NonFiniteVec { idx: 1 }
    ));
    assert!(matches!(
        trapezoid_samples(&[0.0, 2.0, 1.0], &[1.0, 1.0, 1.0]).unwrap_err(),
        IntegrationError::NonIncreasingX { idx: 2 }
    ));
}

#[test]
fn cumulative_matches_composite() -> TestResult {
    let sampled = cumulative_trapezoid(|x: f64| x.exp(), 0.0, 1.0, 500)?;
    let direct  = trapezoid(|x: f64| x.exp(), 0.0, 1.0, 500)?;

    assert_eq!(sampled.len(), 501);
    assert_eq!(sampled.cumulative[0], 0.0);
    assert_eq!(sampled.cumulative.last().copied(), Some(sampled.value));
    assert_eq!(sampled.x.last().copied(), Some(1.0));
    assert_eq!(sampled.evaluations, 501);
    assert_relative_eq!(sampled.value, direct, max_relative = 1e-12);
    Ok(())
}

#[test]
fn cumulative_default_grid() -> TestResult {
    let sampled = cumulative_trapezoid(|x: f64| x.sin(), 0.0, std::f64::consts::PI, DEFAULT_STEPS)?;

    assert_eq!(sampled.len(), DEFAULT_STEPS + 1);
    assert_abs_diff_eq!(sampled.value, 2.0, epsilon = 1e-7);
    let (x_mid, _, c_mid) = sampled.points().nth(DEFAULT_STEPS / 2).unwrap();
    assert_abs_diff_eq!(x_mid, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(c_mid, 1.0, epsilon = 1e-7);
    Ok(())
}

#[test]
fn single_step_grid_holds_both_ends() -> TestResult {
    let sampled = cumulative_trapezoid(|x: f64| x, 0.0, 2.0, 1)?;

    assert!(!sampled.is_empty());
    assert_eq!(sampled.len(), 2);
    assert_eq!(sampled.x, vec![0.0, 2.0]);
    assert_relative_eq!(sampled.value, 2.0);
    Ok(())
}
