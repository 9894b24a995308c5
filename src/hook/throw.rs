use std::panic::panic_any;

use super::Hook;
use crate::storage::Inline;
use crate::types::{BadAccess, Unexpected};

/// Policy that raises an error object on wrong-side access.
///
/// Requesting the value of a failed result panics with an
/// [`Unexpected<E>`](Unexpected) payload carrying the stored error, which
/// callers can recover with `catch_unwind` and `downcast`. Accesses with
/// nothing to wrap (the value of an empty result, the error of a success)
/// panic with a [`BadAccess`] payload instead.
///
/// # Examples
///
/// ```
/// use expected_rail::hook::Throw;
/// use expected_rail::{Expected, Unexpected};
/// use std::panic::AssertUnwindSafe;
///
/// let failed = Expected::<i32, String, Throw>::from_error("offline".to_string());
/// let payload = std::panic::catch_unwind(AssertUnwindSafe(move || failed.value())).unwrap_err();
/// let unexpected = payload.downcast::<Unexpected<String>>().unwrap();
/// assert_eq!(unexpected.error(), "offline");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Throw;

impl<T, E: Send + 'static> Hook<T, E> for Throw {
    type Storage = Inline<T, E>;

    fn on_access_empty_value(error: Option<E>) -> T {
        match error {
            Some(error) => panic_any(Unexpected::new(error)),
            None => panic_any(BadAccess::Value),
        }
    }

    fn on_access_empty_error() -> E {
        panic_any(BadAccess::Error)
    }
}

/// Policy emulating exceptions: an error is raised as soon as it is set, so a
/// live result always holds a value.
///
/// Useful when calling code expects unwinding semantics but the success path
/// should keep the container's shape.
///
/// # Examples
///
/// ```
/// use expected_rail::hook::AsException;
/// use expected_rail::{Expected, Unexpected};
///
/// let raised = std::panic::catch_unwind(|| {
///     Expected::<i32, String, AsException>::from_error("bad input".to_string())
/// });
/// let unexpected = raised.unwrap_err().downcast::<Unexpected<String>>().unwrap();
/// assert_eq!(unexpected.error(), "bad input");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AsException;

impl<T, E: Send + 'static> Hook<T, E> for AsException {
    type Storage = Inline<T, E>;

    fn on_access_empty_value(error: Option<E>) -> T {
        <Throw as Hook<T, E>>::on_access_empty_value(error)
    }

    fn on_access_empty_error() -> E {
        <Throw as Hook<T, E>>::on_access_empty_error()
    }

    fn on_error_set(error: E) -> E {
        panic_any(Unexpected::new(error))
    }
}
