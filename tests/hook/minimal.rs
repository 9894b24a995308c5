use expected_rail::hook::Minimal;
use expected_rail::Expected;

type Lenient<T> = Expected<T, String, Minimal>;

#[test]
fn wrong_side_access_yields_defaults() {
    assert_eq!(Lenient::<i32>::from_error("x".to_string()).value(), 0);
    assert_eq!(Lenient::<Vec<u8>>::from_error("x".to_string()).value(), Vec::<u8>::new());
    assert_eq!(Lenient::<i32>::from_value(3).error(), "");
}

#[test]
fn empty_then_assign_value() {
    let mut slot = Lenient::<i32>::empty();
    assert!(!slot.has_value());
    assert!(!slot.has_error());

    slot.assign_value(9);
    assert!(slot.has_value());
    assert_eq!(slot.value(), 9);
}

#[test]
fn reassign_between_sides() {
    let mut slot = Lenient::<i32>::from_value(1);
    slot.assign_error("late failure".to_string());
    assert!(slot.has_error());

    slot.assign_value(2);
    assert_eq!(slot.value(), 2);
}

#[test]
fn empty_value_access_goes_through_hook() {
    let empty = Lenient::<String>::default();
    assert_eq!(empty.value(), "");
}

#[test]
fn combinators_on_empty_use_fallback_value() {
    let mapped = Lenient::<i32>::empty().map(|v| v + 10);
    assert_eq!(mapped.value(), 10);

    let kept = Lenient::<i32>::empty().map_error(|e| e.len());
    assert!(!kept.has_value() && !kept.has_error());
}
