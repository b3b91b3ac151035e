use quadroot::evaluation::{evaluate, guard_point, Direction, DomainError, Evaluation, GUARD_EPSILON};

type TestResult = Result<(), DomainError>;

#[test]
fn reciprocal_at_zero_is_finite_and_idempotent() -> TestResult {
    let mut f = |x: f64| 1.0 / x;

    assert!(matches!(evaluate(&mut f, 0.0), Evaluation::Undefined { x, .. } if x == 0.0));

    let first  = guard_point(&mut f, 0.0, Direction::Increase)?;
    let second = guard_point(&mut f, 0.0, Direction::Increase)?;
    assert!(first.is_finite());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn direction_picks_the_side() -> TestResult {
    let mut f = |x: f64| 1.0 / x;
    assert_eq!(guard_point(&mut f, 0.0, Direction::Increase)?, 1.0 / GUARD_EPSILON);
    assert_eq!(guard_point(&mut f, 0.0, Direction::Decrease)?, -1.0 / GUARD_EPSILON);
    Ok(())
}

#[test]
fn nan_is_undefined_too() {
    let mut f = |x: f64| (x - 1.0).sqrt();
    let err = guard_point(&mut f, 0.0, Direction::Increase).unwrap_err();
    let DomainError::Undefined { x, nudged, fx, f_nudged } = err;

    assert_eq!(x, 0.0);
    assert_eq!(nudged, GUARD_EPSILON);
    assert!(fx.is_nan() && f_nudged.is_nan());
}

#[test]
fn defined_points_skip_the_retry() {
    let mut calls = 0;
    let mut f = |x: f64| { calls += 1; x * x };
    assert_eq!(evaluate(&mut f, 3.0).value(), Some(9.0));
    assert!(guard_point(&mut f, 2.0, Direction::Decrease).is_ok());
    assert_eq!(calls, 2);
}

#[test]
fn pole_beyond_epsilon_resolution_is_still_stepped_over() -> TestResult {
    // 1e8 + 1e-9 rounds back to 1e8
    let p = 1e8;
    let mut f = |x: f64| 1.0 / (x - p);

    let up   = guard_point(&mut f, p, Direction::Increase)?;
    let down = guard_point(&mut f, p, Direction::Decrease)?;
    assert!(up.is_finite() && up > 0.0);
    assert!(down.is_finite() && down < 0.0);
    assert_eq!(up, guard_point(&mut f, p, Direction::Increase)?);
    Ok(())
}

#[test]
fn far_undefined_point_reports_a_distinct_retry() {
    let mut f = |x: f64| if x >= 1e8 { f64::NAN } else { x };
    let err = guard_point(&mut f, 1e8, Direction::Increase).unwrap_err();
    let DomainError::Undefined { x, nudged, .. } = err;

    assert_eq!(x, 1e8);
    assert!(nudged > x);
}
