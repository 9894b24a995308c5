//! Early-return macros for functions returning [`Expected`](crate::Expected).
//!
//! - [`macro@crate::try_value`] unwraps a value or returns the error to the caller,
//!   converting it with `From`.
//! - [`macro@crate::ensure`] returns an error when a condition does not hold.
//!
//! # Examples
//!
//! ```
//! use expected_rail::{ensure, try_value, Expected};
//!
//! fn divide(a: i32, b: i32) -> Expected<i32> {
//!     ensure!(b != 0, "division by zero".to_string());
//!     Expected::from_value(a / b)
//! }
//!
//! fn average(total: i32, count: i32) -> Expected<i32> {
//!     let mean = try_value!(divide(total, count));
//!     Expected::from_value(mean)
//! }
//!
//! assert_eq!(average(12, 4).value(), 3);
//! assert_eq!(average(1, 0).error(), "division by zero");
//! ```

/// Returns the value of an [`Expected`](crate::Expected), or returns its error
/// from the enclosing function.
///
/// The error is converted with [`From`], so a function may widen the error type
/// of the results it calls. An empty input goes through its hook like a call
/// to `value()`.
///
/// # Examples
///
/// ```
/// use expected_rail::{try_value, Expected};
///
/// #[derive(Debug, PartialEq)]
/// enum AppError {
///     Parse(String),
/// }
///
/// impl From<String> for AppError {
///     fn from(message: String) -> Self {
///         AppError::Parse(message)
///     }
/// }
///
/// fn parse(raw: &str) -> Expected<u8> {
///     match raw.parse() {
///         Ok(n) => Expected::from_value(n),
///         Err(_) => Expected::from_error(format!("bad number: {raw}")),
///     }
/// }
///
/// fn load(raw: &str) -> Expected<u8, AppError> {
///     let n = try_value!(parse(raw));
///     Expected::from_value(n + 1)
/// }
///
/// assert_eq!(load("1").value(), 2);
/// assert_eq!(load("x").error(), AppError::Parse("bad number: x".to_string()));
/// ```
#[macro_export]
macro_rules! try_value {
    ($expr:expr $(,)?) => {{
        let expected = $expr;
        if expected.has_error() {
            return $crate::Expected::from_error(::core::convert::From::from(expected.error()));
        }
        expected.value()
    }};
}

/// Returns `error` (converted with [`From`]) from the enclosing function unless
/// `cond` holds.
///
/// The error expression is only evaluated when the condition fails.
///
/// # Examples
///
/// ```
/// use expected_rail::{ensure, Expected};
///
/// fn reserve(seats: u32) -> Expected<u32, &'static str> {
///     ensure!(seats > 0, "at least one seat");
///     ensure!(seats <= 8, "at most eight seats");
///     Expected::from_value(seats)
/// }
///
/// assert_eq!(reserve(2).value(), 2);
/// assert_eq!(reserve(9).error(), "at most eight seats");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error:expr $(,)?) => {
        if !$cond {
            return $crate::Expected::from_error(::core::convert::From::from($error));
        }
    };
}
