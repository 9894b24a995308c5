//! Construction helpers for [`Expected`].
//!
//! These let the types of a result be inferred from context, and (with the
//! `std` feature) capture panicking calls as stored errors.
//!
//! # Examples
//!
//! ```
//! use expected_rail::convert::{err, ok};
//! use expected_rail::Expected;
//!
//! let found: Expected<u32> = ok(7);
//! assert_eq!(found.value(), 7);
//!
//! let missing: Expected<()> = err("no such user".to_string());
//! assert!(missing.has_error());
//! ```

#[cfg(feature = "std")]
mod panic;

#[cfg(feature = "std")]
pub use panic::{attempt, FromPanic};

use crate::hook::Hook;
use crate::types::Expected;

/// Successful result; the error type and hook come from context and default
/// to `String` and [`Abort`](crate::hook::Abort) through the `Expected` alias.
#[inline]
pub fn ok<T, E, H: Hook<T, E>>(value: T) -> Expected<T, E, H> {
    Expected::from_value(value)
}

/// Failed result; the value type comes from context, commonly `()`.
#[inline]
pub fn err<T, E, H: Hook<T, E>>(error: E) -> Expected<T, E, H> {
    Expected::from_error(error)
}

/// Converts a `Result` computed by a call that cannot unwind.
///
/// # Examples
///
/// ```
/// use expected_rail::convert::from_result;
/// use expected_rail::Expected;
///
/// let port: Expected<u16, std::num::ParseIntError> = from_result("8080".parse());
/// assert_eq!(port.value(), 8080);
/// ```
#[inline]
pub fn from_result<T, E, H: Hook<T, E>>(result: Result<T, E>) -> Expected<T, E, H> {
    Expected::from_result(result)
}

/// Converts an `Option`, using `error` when it is `None`.
#[inline]
pub fn from_option<T, E, H: Hook<T, E>>(option: Option<T>, error: E) -> Expected<T, E, H> {
    match option {
        Some(value) => Expected::from_value(value),
        None => Expected::from_error(error),
    }
}
