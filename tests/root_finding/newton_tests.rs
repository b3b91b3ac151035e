use approx::assert_abs_diff_eq;

use quadroot::report::{TerminationReason, ToleranceSatisfied};
use quadroot::root_finding::errors::RootFindingError;
use quadroot::root_finding::newton::{newton, NewtonCfg, NewtonError};

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_cubic_root_with_analytic_derivative() -> TestResult {
    let f  = |x: f64| x * x * x - x - 2.0;
    let df = |x: f64| 3.0 * x * x - 1.0;

    let res = newton(f, Some(df), 1.5, NewtonCfg::new())?;

    assert!(res.converged);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.value.unwrap(), 1.5213797, epsilon = 1e-7);
    assert!(res.iterations < 10);
    assert_eq!(res.stencil.stencil().len(), 1);
    Ok(())
}

#[test]
fn finds_sqrt_2_with_fd_derivative() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = newton(f, None::<fn(f64) -> f64>, 1.0, NewtonCfg::new())?;

    assert!(res.converged);
    assert_abs_diff_eq!(res.value.unwrap(), 2.0_f64.sqrt(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn counts_derivative_evaluations() -> TestResult {
    let f  = |x: f64| 2.0 * x - 6.0;
    let df = |_x: f64| 2.0;

    let res = newton(f, Some(df), 10.0, NewtonCfg::new())?;

    // f(x0), f'(x0), f(x1)
    assert_eq!(res.value, Some(3.0));
    assert_eq!(res.iterations, 1);
    assert_eq!(res.evaluations, 3);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn vanishing_derivative_is_degenerate() -> TestResult {
    let f  = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, Some(df), 0.0, NewtonCfg::new())?;

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::NumericDegeneracy);
    assert_eq!(res.value, None);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn max_step_clips_and_budget_is_reported() -> TestResult {
    let f   = |x: f64| x - 100.0;
    let df  = |_x: f64| 1.0;
    let cfg = NewtonCfg::new().set_max_step(1.0)?.set_max_iter(10)?;

    let res = newton(f, Some(df), 0.0, cfg)?;

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 10);
    assert_abs_diff_eq!(res.value.unwrap(), 10.0);
    Ok(())
}

#[test]
fn early_exit_at_root() -> TestResult {
    let f   = |x: f64| x;
    let res = newton(f, Some(|_x: f64| 1.0), 0.0, NewtonCfg::new())?;

    assert_eq!(res.value, Some(0.0));
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 1);
    Ok(())
}

#[test]
fn invalid_inputs() -> TestResult {
    let f = |x: f64| x;
    assert!(matches!(
        newton(f, None::<fn(f64) -> f64>, f64::NAN, NewtonCfg::new()).unwrap_err(),
        NewtonError::InvalidGuess { .. }
    ));
    assert!(matches!(
        NewtonCfg::new().set_max_step(0.0).unwrap_err(),
        NewtonError::InvalidMaxStep { .. }
    ));
    assert!(matches!(
        NewtonCfg::new().set_max_iter(0).unwrap_err(),
        RootFindingError::InvalidMaxIter { got: 0 }
    ));
    Ok(())
}
