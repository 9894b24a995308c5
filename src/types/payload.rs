//! The tagged payload held by every [`Expected`](crate::Expected).
//!
//! [`Payload`] is the single source of truth for which side is live. Even when
//! the value and error types coincide, the variant tag disambiguates them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of an [`Expected`](crate::Expected) is currently live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Neither a value nor an error is stored.
    Empty,
    /// A success value is stored.
    Value,
    /// An error is stored.
    Error,
}

/// Explicit success/failure flag used when the value and error types are the same.
///
/// # Examples
///
/// ```
/// use expected_rail::{Expected, Flavor};
///
/// let failed = Expected::<String, String>::with_flavor("disk full".to_string(), Flavor::Failure);
/// assert!(failed.has_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Success,
    Failure,
}

/// Storage-level representation of a result: at most one of a value or an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Payload<T, E> {
    Empty,
    Value(T),
    Error(E),
}

impl<T, E> Payload<T, E> {
    /// Returns the tag of the live variant.
    #[inline]
    pub const fn state(&self) -> State {
        match self {
            Self::Empty => State::Empty,
            Self::Value(_) => State::Value,
            Self::Error(_) => State::Error,
        }
    }

    /// Borrows the live payload.
    #[inline]
    pub const fn as_ref(&self) -> Payload<&T, &E> {
        match self {
            Self::Empty => Payload::Empty,
            Self::Value(value) => Payload::Value(value),
            Self::Error(error) => Payload::Error(error),
        }
    }

    /// Returns the value, if one is live.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error, if one is live.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<T, E> Default for Payload<T, E> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T, E> From<Result<T, E>> for Payload<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}
