//! Free-function forms of the [`Expected`] combinators.
//!
//! Each function forwards to the method of the same name; they read better in
//! pipelines built from function values.
//!
//! # Examples
//!
//! ```
//! use expected_rail::ops::{and_then, map, map_error, map_or_else};
//! use expected_rail::Expected;
//!
//! fn divide(a: i32, b: i32) -> Expected<i32> {
//!     if b == 0 {
//!         Expected::from_error("division by zero".to_string())
//!     } else {
//!         Expected::from_value(a / b)
//!     }
//! }
//!
//! let doubled = map(divide(10, 2), |q| q * 2);
//! assert_eq!(doubled.value(), 10);
//!
//! let chained = and_then(divide(12, 2), |q| divide(q, 3));
//! assert_eq!(chained.value(), 2);
//!
//! let shouted = map_error(divide(1, 0), |msg| msg.to_uppercase());
//! assert_eq!(map_or_else(shouted, |_| String::new(), |e| e), "DIVISION BY ZERO");
//! ```

use crate::hook::Hook;
use crate::types::Expected;

/// See [`Expected::and`].
#[inline]
pub fn and<T, U, E, H>(expected: Expected<T, E, H>, next: Expected<U, E, H>) -> Expected<U, E, H>
where
    H: Hook<T, E> + Hook<U, E>,
{
    expected.and(next)
}

/// See [`Expected::and_then`].
#[inline]
#[track_caller]
pub fn and_then<T, U, E, H, F>(expected: Expected<T, E, H>, f: F) -> Expected<U, E, H>
where
    H: Hook<T, E> + Hook<U, E>,
    F: FnOnce(T) -> Expected<U, E, H>,
{
    expected.and_then(f)
}

/// See [`Expected::or`].
#[inline]
pub fn or<T, E, H>(expected: Expected<T, E, H>, fallback: Expected<T, E, H>) -> Expected<T, E, H>
where
    H: Hook<T, E>,
{
    expected.or(fallback)
}

/// See [`Expected::or_else`].
#[inline]
pub fn or_else<T, E, H, F>(expected: Expected<T, E, H>, f: F) -> Expected<T, E, H>
where
    H: Hook<T, E>,
    F: FnOnce(E) -> Expected<T, E, H>,
{
    expected.or_else(f)
}

/// See [`Expected::map`].
#[inline]
#[track_caller]
pub fn map<T, U, E, H, F>(expected: Expected<T, E, H>, f: F) -> Expected<U, E, H>
where
    H: Hook<T, E> + Hook<U, E>,
    F: FnOnce(T) -> U,
{
    expected.map(f)
}

/// See [`Expected::map_error`].
#[inline]
pub fn map_error<T, E, G, H, F>(expected: Expected<T, E, H>, f: F) -> Expected<T, G, H>
where
    H: Hook<T, E> + Hook<T, G>,
    F: FnOnce(E) -> G,
{
    expected.map_error(f)
}

/// See [`Expected::map_or_else`].
#[inline]
#[track_caller]
pub fn map_or_else<T, E, H, U, V, F>(expected: Expected<T, E, H>, on_value: V, on_error: F) -> U
where
    H: Hook<T, E>,
    V: FnOnce(T) -> U,
    F: FnOnce(E) -> U,
{
    expected.map_or_else(on_value, on_error)
}
