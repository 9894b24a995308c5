use core::fmt::{Display, Formatter};

/// Error object raised when a side of an [`Expected`](crate::Expected) is
/// requested but not stored, and there is no error value to wrap instead.
///
/// The [`Throw`](crate::hook::Throw) policy raises it with `panic_any` for
/// the value of an empty result and for the error of a result holding none.
///
/// # Examples
///
/// ```
/// use expected_rail::BadAccess;
///
/// assert_eq!(
///     BadAccess::Error.to_string(),
///     "error accessed on an Expected holding no error"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadAccess {
    /// The value was requested.
    Value,
    /// The error was requested.
    Error,
}

impl Display for BadAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value => f.write_str("value accessed on an Expected holding no value"),
            Self::Error => f.write_str("error accessed on an Expected holding no error"),
        }
    }
}

impl core::error::Error for BadAccess {}
