use approx::assert_abs_diff_eq;

use quadroot::integration::algorithms::MAX_DEPTH;
use quadroot::integration::config::ToleranceCfg;
use quadroot::integration::errors::IntegrationError;
use quadroot::integration::tolerance::{adaptive_tolerance, adaptive_tolerance_with};
use quadroot::report::{Stencil, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), IntegrationError>;

#[test]
fn parabola_within_1e_6() -> TestResult {
    let res = adaptive_tolerance(|x| x * x, 0.0, 1.0, 1e-8, 20)?;

    assert!(res.converged);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::LocalErrorReached);
    assert_abs_diff_eq!(res.value.unwrap(), 1.0 / 3.0, epsilon = 1e-6);
    assert!(res.iterations > 0);
    assert_eq!(res.algorithm_name, "tolerance_adaptive");
    Ok(())
}

#[test]
fn linear_needs_no_subdivision() -> TestResult {
    let res = adaptive_tolerance_with(|x| 2.0 * x + 1.0, 0.0, 4.0, ToleranceCfg::new())?;

    assert_abs_diff_eq!(res.value.unwrap(), 20.0, epsilon = 1e-12);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 3);
    assert_eq!(res.stencil, Stencil::Partition { intervals: 1, depth: 0 });
    Ok(())
}

#[test]
fn depth_limit_is_a_diagnostic() -> TestResult {
    let res = adaptive_tolerance(|x| x * x, 0.0, 1.0, 1e-12, 2)?;

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.stencil, Stencil::Partition { intervals: 4, depth: 2 });
    assert_eq!(res.iterations, 3);
    // two endpoints plus one midpoint per visited interval
    assert_eq!(res.evaluations, 9);
    assert!(res.value.is_some());
    assert!(res.message.unwrap().contains("4 of 4"));
    Ok(())
}

#[test]
fn zero_depth_accepts_single_estimate() -> TestResult {
    let res = adaptive_tolerance(|x| x * x, 0.0, 1.0, 1e-12, 0)?;

    // h/4 * (f(0) + 2 f(1/2) + f(1))
    assert_abs_diff_eq!(res.value.unwrap(), 0.375, epsilon = 1e-15);
    assert_eq!(res.stencil, Stencil::Partition { intervals: 1, depth: 0 });
    assert!(!res.converged);
    Ok(())
}

#[test]
fn residual_tracks_local_estimates() -> TestResult {
    let res = adaptive_tolerance(|x: f64| x.exp(), 0.0, 1.0, 1e-6, 20)?;
    let err = (res.value.unwrap() - (std::f64::consts::E - 1.0)).abs();

    assert!(res.converged);
    assert!(res.residual.unwrap() < 1e-6);
    assert!(err <= res.residual.unwrap());
    Ok(())
}

#[test]
fn singular_lower_endpoint_is_nudged() -> TestResult {
    let res = adaptive_tolerance(|x: f64| 1.0 / x.sqrt(), 0.0, 1.0, 1e-6, 12)?;
    assert!(res.value.unwrap().is_finite());
    Ok(())
}

#[test]
fn invalid_budgets() {
    assert!(matches!(
        adaptive_tolerance(|x| x, 0.0, 1.0, 1e-6, MAX_DEPTH + 1).unwrap_err(),
        IntegrationError::InvalidDepth { got, max } if got == MAX_DEPTH + 1 && max == MAX_DEPTH
    ));
    assert!(matches!(
        adaptive_tolerance(|x| x, 0.0, 1.0, 0.0, 4).unwrap_err(),
        IntegrationError::InvalidTolerance { .. }
    ));
    assert!(matches!(
        adaptive_tolerance(|x| x, 0.0, 1.0, f64::NAN, 4).unwrap_err(),
        IntegrationError::InvalidTolerance { .. }
    ));
    assert!(matches!(
        adaptive_tolerance(|x| x, f64::NAN, 1.0, 1e-6, 4).unwrap_err(),
        IntegrationError::InvalidBounds { .. }
    ));
}

#[test]
fn report_serializes() -> TestResult {
    let res  = adaptive_tolerance(|x| x * x, 0.0, 1.0, 1e-8, 20)?;
    let json = serde_json::to_value(&res).unwrap();

    assert_eq!(json["algorithm_name"], "tolerance_adaptive");
    assert_eq!(json["converged"], true);
    assert_eq!(json["termination_reason"], "ToleranceReached");
    assert!(json["stencil"]["Partition"]["intervals"].as_u64().unwrap() > 1);
    assert!(json["message"].is_null());
    Ok(())
}
