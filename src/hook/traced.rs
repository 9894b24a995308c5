//! Tracing integration for hooks.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! expected-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::marker::PhantomData;

use super::Hook;

const TARGET: &str = "expected_rail";

/// Wraps another policy and records every callback as a `tracing` event
/// before delegating to it.
///
/// Set events are emitted at `TRACE`, unchecked drops and flavor flips at
/// `WARN`, and wrong-side accesses at `ERROR`. Flags and storage are those of
/// the wrapped policy.
///
/// # Examples
///
/// ```
/// use expected_rail::hook::{Abort, Traced};
/// use expected_rail::Expected;
///
/// let parsed = Expected::<u16, String, Traced<Abort>>::from_value(8080);
/// assert_eq!(parsed.value(), 8080);
/// ```
pub struct Traced<H>(PhantomData<fn() -> H>);

impl<T, E, H: Hook<T, E>> Hook<T, E> for Traced<H> {
    type Storage = H::Storage;
    const ENABLE_DEFAULT_CONSTRUCTOR: bool = H::ENABLE_DEFAULT_CONSTRUCTOR;
    const ENABLE_COPY: bool = H::ENABLE_COPY;
    const ENABLE_VOID_VALUE: bool = H::ENABLE_VOID_VALUE;

    fn on_access_empty_value(error: Option<E>) -> T {
        tracing::error!(target: TARGET, has_error = error.is_some(), "value accessed without a value");
        H::on_access_empty_value(error)
    }

    fn on_access_empty_error() -> E {
        tracing::error!(target: TARGET, "error accessed without an error");
        H::on_access_empty_error()
    }

    fn on_unchecked() {
        tracing::warn!(target: TARGET, "result released without being checked");
        H::on_unchecked()
    }

    fn on_value_set(value: &T) {
        tracing::trace!(target: TARGET, "value set");
        H::on_value_set(value)
    }

    fn on_error_set(error: E) -> E {
        tracing::trace!(target: TARGET, "error set");
        H::on_error_set(error)
    }

    fn on_flavor_change() {
        tracing::warn!(target: TARGET, "attempt to flip the flavor of a locked result");
        H::on_flavor_change()
    }
}
