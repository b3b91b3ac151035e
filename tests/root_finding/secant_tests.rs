use approx::assert_abs_diff_eq;

use quadroot::report::{TerminationReason, ToleranceSatisfied};
use quadroot::root_finding::errors::ToleranceError;
use quadroot::root_finding::secant::{secant, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2_from_1_and_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(f, 1.0, 2.0, SecantCfg::new())?;

    assert!(res.converged);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.value.unwrap(), 2.0_f64.sqrt(), epsilon = 1e-6);
    assert!(res.iterations < 20);
    assert_eq!(res.stencil.stencil().len(), 2);
    Ok(())
}

#[test]
fn default_step_tolerance_is_absolute() -> TestResult {
    let cfg = SecantCfg::new();
    assert_eq!(cfg.abs_x(), SecantCfg::DEFAULT_ABS_X);
    assert_eq!(cfg.rel_x(), 0.0);
    assert_eq!(cfg.max_iter(), None);
    Ok(())
}

#[test]
fn constant_function_is_degenerate() -> TestResult {
    let f   = |_x: f64| 3.0;
    let res = secant(f, 1.0, 2.0, SecantCfg::new())?;

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::NumericDegeneracy);
    assert_eq!(res.value, None);
    assert_eq!(res.iterations, 0);
    assert!(res.message.unwrap().contains("slope"));
    Ok(())
}

#[test]
fn flat_step_mid_iteration_is_degenerate() -> TestResult {
    // plateau reached after the first step
    let f   = |x: f64| if x < 0.5 { x - 0.5 } else { 1.0 };
    let res = secant(f, 0.0, 2.0, SecantCfg::new())?;

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::NumericDegeneracy);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn exhausted_budget_is_reported() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_max_iter(2)?;
    let res = secant(f, 1.0, 2.0, cfg)?;

    assert!(!res.converged);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 2);
    assert_abs_diff_eq!(res.value.unwrap(), 1.4, epsilon = 1e-12);
    Ok(())
}

#[test]
fn early_exit_when_guess_is_root() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = secant(f, 3.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.value, Some(1.0));
    assert_eq!(res.iterations, 0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn captured_parameters() -> TestResult {
    let c   = 9.0;
    let f   = move |x: f64| x * x - c;
    let res = secant(f, 2.0, 4.0, SecantCfg::new())?;

    assert_abs_diff_eq!(res.value.unwrap(), 3.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn invalid_guesses() -> TestResult {
    let f = |x: f64| x;
    assert!(matches!(
        secant(f, 1.0, 1.0, SecantCfg::new()).unwrap_err(),
        SecantError::InvalidGuess { .. }
    ));
    assert!(matches!(
        secant(f, f64::INFINITY, 1.0, SecantCfg::new()).unwrap_err(),
        SecantError::InvalidGuess { .. }
    ));
    assert!(matches!(
        SecantCfg::new().set_rel_x(-1.0).unwrap_err(),
        ToleranceError::InvalidRelX { .. }
    ));
    Ok(())
}
