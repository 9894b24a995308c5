use expected_rail::hook::{Abort, ArcAbort, Minimal, MustCheck, RcAbort};
use expected_rail::policy::{is_void, Policy};
use expected_rail::Expected;

#[test]
fn stock_policies_resolve() {
    let abort = Policy::of::<i32, String, Abort>();
    assert_eq!(
        abort,
        Policy {
            default_constructor: false,
            copy: true,
            ref_counted: false,
            void_value: true,
            tracked: false,
        }
    );

    let minimal = Policy::of::<i32, String, Minimal>();
    assert!(minimal.default_constructor && minimal.tracked);
    assert!(!minimal.enforces_check());

    let strict = Policy::of::<i32, String, MustCheck>();
    assert!(!strict.copy && strict.tracked && strict.enforces_check());

    for shared in [Policy::of::<i32, String, RcAbort>(), Policy::of::<i32, String, ArcAbort>()] {
        assert!(shared.ref_counted && shared.copy && shared.enforces_check());
    }
}

#[test]
fn container_exposes_its_policy() {
    assert_eq!(Expected::<u8, String, RcAbort>::POLICY, Policy::of::<u8, String, RcAbort>());
}

#[test]
fn void_detection() {
    struct Marker;

    assert!(is_void::<()>());
    assert!(is_void::<Marker>());
    assert!(!is_void::<u8>());
}
