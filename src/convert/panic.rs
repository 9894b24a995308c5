use core::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::hook::Hook;
use crate::types::alloc_type::String;
use crate::types::{BadAccess, Expected, Unexpected};

/// Conversion from a panic payload into an error value.
///
/// Used by [`attempt`] to turn an unwinding call into a stored error.
pub trait FromPanic: Sized {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self;
}

impl FromPanic for String {
    /// Recovers the panic message. Payloads raised by the throwing hooks give
    /// back the original error when it was a `String`.
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Unexpected<String>>() {
            Ok(unexpected) => return (*unexpected).into_inner(),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<BadAccess>() {
            Ok(access) => return access.to_string(),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return *message,
            Err(payload) => payload,
        };
        match payload.downcast::<&'static str>() {
            Ok(message) => String::from(*message),
            Err(_) => String::from("unknown panic"),
        }
    }
}

impl FromPanic for Box<dyn Any + Send> {
    #[inline]
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        payload
    }
}

/// Runs `call`, capturing a panic as the stored error.
///
/// A call that returns normally produces a value. A call that panics produces
/// an error built by [`FromPanic`] from the payload; the panic does not
/// propagate.
///
/// # Examples
///
/// ```
/// use expected_rail::convert::attempt;
/// use expected_rail::Expected;
///
/// let fine: Expected<i32> = attempt(|| 6 * 7);
/// assert_eq!(fine.value(), 42);
///
/// let rows = vec![1, 2, 3];
/// let broken: Expected<i32> = attempt(|| rows[10]);
/// assert!(broken.error().contains("out of bounds"));
/// ```
pub fn attempt<T, E, H, F>(call: F) -> Expected<T, E, H>
where
    E: FromPanic,
    H: Hook<T, E>,
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(value) => Expected::from_value(value),
        Err(payload) => Expected::from_error(E::from_panic(payload)),
    }
}
