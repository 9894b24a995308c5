//! Checked-result enforcement with the reference counted policy.
//!
//! Run with `cargo run --example checked_results --features std`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use expected_rail::hook::{RcAbort, Throw};
use expected_rail::{Expected, Unexpected};

fn fetch(id: u32) -> Expected<String, String, RcAbort> {
    if id % 2 == 0 {
        Expected::from_value(format!("record {id}"))
    } else {
        Expected::from_error(format!("record {id} is locked"))
    }
}

fn main() {
    let record = fetch(2);
    let audit_copy = record.clone();
    println!("handles sharing the record: {}", record.handle_count());
    if audit_copy.has_value() {
        println!("audit copy inspected, every handle is now checked: {}", record.is_checked());
    }
    drop(audit_copy);
    println!("value: {}", record.value());

    let forgotten = catch_unwind(|| {
        let _ignored = fetch(3);
    });
    println!("dropping an unchecked result panics: {}", forgotten.is_err());

    let failed = Expected::<u32, String, Throw>::from_error("quota exceeded".to_string());
    let raised = catch_unwind(AssertUnwindSafe(move || failed.value()));
    if let Err(payload) = raised {
        if let Some(unexpected) = payload.downcast_ref::<Unexpected<String>>() {
            println!("recovered: {unexpected}");
        }
    }
}
