use std::cell::Cell;

use expected_rail::ops;
use expected_rail::Expected;

fn success(v: i32) -> Expected<i32> {
    Expected::from_value(v)
}

fn failure(e: &str) -> Expected<i32> {
    Expected::from_error(e.to_string())
}

#[test]
fn map_transforms_value() {
    for v in [-1, 0, 7] {
        assert_eq!(success(v).map(|x| x * 3), success(v * 3));
    }
}

#[test]
fn map_on_failure_never_invokes() {
    let calls = Cell::new(0);
    let mapped = failure("e").map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(mapped, failure("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_error_transforms_error() {
    let mapped = failure("low").map_error(|e| e.to_uppercase());
    assert_eq!(mapped, failure("LOW"));
}

#[test]
fn map_error_on_success_never_invokes() {
    let calls = Cell::new(0);
    let mapped = success(5).map_error(|e| {
        calls.set(calls.get() + 1);
        e
    });
    assert_eq!(mapped, success(5));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_propagates_error_or_yields_next() {
    assert_eq!(failure("first").and(success(2)), failure("first"));
    assert_eq!(failure("first").and(failure("second")), failure("first"));
    assert_eq!(success(1).and(success(2)), success(2));
    assert_eq!(success(1).and(failure("second")), failure("second"));
}

#[test]
fn and_then_runs_only_on_success() {
    let calls = Cell::new(0);
    let step = |v: i32| {
        calls.set(calls.get() + 1);
        success(v + 1)
    };
    assert_eq!(success(1).and_then(step), success(2));
    assert_eq!(failure("e").and_then(step), failure("e"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_else_recovers_only_failures() {
    assert_eq!(success(1).or_else(|_| success(9)), success(1));
    assert_eq!(failure("e").or_else(|_| success(9)), success(9));
    assert_eq!(failure("e").or(failure("fallback")), failure("fallback"));
    assert_eq!(success(1).or(failure("fallback")), success(1));
}

#[test]
fn map_or_else_picks_the_branch() {
    let on_value = |v: i32| format!("v{v}");
    let on_error = |e: String| format!("e:{e}");
    assert_eq!(success(3).map_or_else(on_value, on_error), "v3");
    assert_eq!(failure("x").map_or_else(on_value, on_error), "e:x");
}

#[test]
fn value_or_variants() {
    assert_eq!(success(3).value_or(0), 3);
    assert_eq!(failure("x").value_or(0), 0);
    assert_eq!(failure("four").value_or_else(|e| e.len() as i32), 4);
}

#[test]
fn free_functions_match_methods() {
    assert_eq!(ops::map(success(2), |v| v + 1), success(3));
    assert_eq!(ops::map_error(failure("a"), |e| e + "b"), failure("ab"));
    assert_eq!(ops::and(success(1), success(2)), success(2));
    assert_eq!(ops::and_then(success(4), |v| success(v / 2)), success(2));
    assert_eq!(ops::or(failure("a"), success(1)), success(1));
    assert_eq!(ops::or_else(failure("a"), |e| failure(&(e + "!"))), failure("a!"));
    assert_eq!(ops::map_or_else(failure("z"), |_| 0, |e| e.len()), 1);
}
