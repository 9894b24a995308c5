use std::panic::{catch_unwind, AssertUnwindSafe};

use expected_rail::hook::{AsException, Throw};
use expected_rail::{BadAccess, Expected, Unexpected};

#[derive(Debug, Clone, PartialEq)]
struct Refused {
    code: u16,
}

#[test]
fn throw_raises_the_stored_error() {
    let failed = Expected::<i32, Refused, Throw>::from_error(Refused { code: 403 });
    let payload = catch_unwind(AssertUnwindSafe(move || failed.value())).unwrap_err();
    let unexpected = payload.downcast::<Unexpected<Refused>>().unwrap();
    assert_eq!(unexpected.error(), &Refused { code: 403 });
}

#[test]
fn throw_raises_a_typed_error_when_no_error_is_stored() {
    let ok = Expected::<i32, Refused, Throw>::from_value(3);
    let payload = catch_unwind(AssertUnwindSafe(move || ok.error())).unwrap_err();
    assert_eq!(*payload.downcast::<BadAccess>().unwrap(), BadAccess::Error);
}

#[test]
fn throw_raises_a_typed_error_for_a_drained_value() {
    let mut ok = Expected::<i32, Refused, Throw>::from_value(3);
    ok.pop_front();
    let payload = catch_unwind(AssertUnwindSafe(move || ok.value())).unwrap_err();
    assert_eq!(*payload.downcast::<BadAccess>().unwrap(), BadAccess::Value);
}

#[test]
fn bad_access_becomes_a_string_error() {
    use expected_rail::convert::attempt;

    let ok = Expected::<i32, String, Throw>::from_value(3);
    let captured: Expected<String> = attempt(move || ok.error());
    assert_eq!(captured.error(), "error accessed on an Expected holding no error");
}

#[test]
fn throw_leaves_success_untouched() {
    let ok = Expected::<i32, Refused, Throw>::from_value(3);
    assert_eq!(ok.map(|v| v * 2).value(), 6);
}

#[test]
fn as_exception_raises_at_construction() {
    let raised = catch_unwind(|| Expected::<i32, String, AsException>::from_error("bad".to_string()));
    let unexpected = raised.unwrap_err().downcast::<Unexpected<String>>().unwrap();
    assert_eq!(unexpected.to_string(), "unexpected error: bad");
}

#[test]
fn as_exception_success_path_is_plain() {
    let ok = Expected::<i32, String, AsException>::from_value(1);
    assert!(ok.has_value());
    assert_eq!(ok.value(), 1);
}

#[test]
fn unexpected_exposes_source() {
    use std::error::Error;

    let parse = "x".parse::<u8>().unwrap_err();
    let unexpected = Unexpected::new(parse.clone());
    let source = unexpected.source().unwrap();
    assert_eq!(source.to_string(), parse.to_string());
}
