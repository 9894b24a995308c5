use expected_rail::hook::{Minimal, MustCheck};
use expected_rail::{Expected, Payload, State};

#[test]
fn success_exposes_value() {
    for v in [-3, 0, 42, i32::MAX] {
        let ok: Expected<i32> = Expected::from_value(v);
        assert!(ok.has_value());
        assert!(!ok.has_error());
        assert!(ok.is_success());
        assert_eq!(ok.value(), v);
    }
}

#[test]
fn failure_exposes_error() {
    for e in ["", "timeout", "disk full"] {
        let failed: Expected<i32> = Expected::from_error(e.to_string());
        assert!(failed.has_error());
        assert!(!failed.has_value());
        assert!(!failed.is_success());
        assert_eq!(failed.error(), e);
    }
}

#[test]
fn unit_success_carries_no_value() {
    let done: Expected<()> = Expected::from_value(());
    assert!(done.has_value());
    assert!(done.is_success());

    let failed: Expected<()> = Expected::from_error("refused".to_string());
    assert!(!failed.has_value());
    assert_eq!(failed.error(), "refused");
}

#[test]
fn state_reports_live_side() {
    let ok: Expected<u8> = Expected::from_value(1);
    let failed: Expected<u8> = Expected::from_error("bad".to_string());
    let empty = Expected::<u8, String, Minimal>::empty();

    assert_eq!(ok.state(), State::Value);
    assert_eq!(failed.state(), State::Error);
    assert_eq!(empty.state(), State::Empty);
}

#[test]
fn empty_counts_as_success() {
    let empty = Expected::<u8, String, Minimal>::default();
    assert!(empty.is_success());
    assert!(!empty.has_value());
    assert!(bool::from(&empty));
}

#[test]
fn inspection_marks_checked() {
    let ok = Expected::<u8, String, MustCheck>::from_value(1);
    assert!(!ok.is_checked());
    let _ = ok.has_error();
    assert!(ok.is_checked());

    let peeked = Expected::<u8, String, MustCheck>::from_value(1);
    let _ = peeked.as_payload();
    assert!(peeked.is_checked());
}

#[test]
fn untracked_results_owe_nothing() {
    let ok: Expected<u8> = Expected::from_value(1);
    assert!(ok.is_checked());
}

#[test]
fn default_policy_costs_no_more_than_result() {
    use core::mem::size_of;

    assert_eq!(size_of::<Expected<i32, String>>(), size_of::<Payload<i32, String>>());
    assert_eq!(size_of::<Expected<i32, String>>(), size_of::<Result<i32, String>>());
    assert_eq!(size_of::<Expected<u8, u8>>(), size_of::<Result<u8, u8>>());
}

#[test]
fn default_policy_is_thread_safe() {
    fn assert_send_sync<S: Send + Sync>() {}

    assert_send_sync::<Expected<i32, String>>();
}

#[test]
fn unit_success_value_only_asserts_success() {
    let saved: Expected<()> = Expected::from_value(());
    assert!(saved.is_success());
    let () = saved.value();

    let failed: Expected<()> = Expected::from_error("disk full".to_string());
    assert_eq!(failed.error(), "disk full");
}

#[test]
#[should_panic(expected = "value accessed on an Expected holding an error")]
fn unit_success_value_rejects_an_error() {
    let failed: Expected<()> = Expected::from_error("disk full".to_string());
    failed.value();
}

#[test]
fn borrowing_accessors() {
    let ok: Expected<String> = Expected::from_value("v".to_string());
    assert_eq!(ok.as_value().map(String::as_str), Some("v"));
    assert_eq!(ok.as_error(), None);

    let failed: Expected<String> = Expected::from_error("e".to_string());
    assert_eq!(failed.as_value(), None);
    assert_eq!(failed.as_error().map(String::as_str), Some("e"));
}

#[test]
fn result_and_option_conversions() {
    let ok: Expected<i32> = Ok(3).into();
    assert_eq!(Result::<i32, String>::from(ok), Ok(3));

    let failed: Expected<i32> = Err("no".to_string()).into();
    assert_eq!(failed.into_result(), Err("no".to_string()));

    let ok: Expected<i32> = Expected::from_value(3);
    assert_eq!(ok.ok(), Some(3));

    let failed: Expected<i32> = Expected::from_error("no".to_string());
    assert_eq!(failed.err(), Some("no".to_string()));
}

#[test]
fn into_payload_moves_out() {
    let failed: Expected<i32, u16> = Expected::from_error(500);
    assert_eq!(failed.into_payload(), Payload::Error(500));
}

#[test]
#[should_panic]
fn value_of_failure_aborts() {
    let failed: Expected<i32> = Expected::from_error("boom".to_string());
    let _ = failed.value();
}

#[test]
#[should_panic]
fn error_of_success_aborts() {
    let ok: Expected<i32> = Expected::from_value(1);
    let _ = ok.error();
}

#[test]
fn collect_stops_at_first_error() {
    let mut seen = Vec::new();
    let all: Expected<Vec<i32>> = (1..=5)
        .map(|n| {
            seen.push(n);
            if n == 3 {
                Expected::from_error(format!("row {n} is corrupt"))
            } else {
                Expected::from_value(n)
            }
        })
        .collect();

    assert_eq!(all.error(), "row 3 is corrupt");
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
}

#[test]
fn collect_gathers_all_values() {
    let all: Expected<Vec<i32>> = (1..=3).map(Expected::from_value).collect();
    assert_eq!(all.value(), vec![1, 2, 3]);
}

#[test]
fn debug_names_the_side() {
    let ok: Expected<i32> = Expected::from_value(7);
    let failed: Expected<i32> = Expected::from_error("x".to_string());
    let empty = Expected::<i32, String, Minimal>::empty();

    assert_eq!(format!("{ok:?}"), "Value(7)");
    assert_eq!(format!("{failed:?}"), "Error(\"x\")");
    assert_eq!(format!("{empty:?}"), "Empty");
}
