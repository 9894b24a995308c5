//! Extension trait lifting `Result` into [`Expected`].
//!
//! # Examples
//!
//! ```
//! use expected_rail::traits::ResultExt;
//! use expected_rail::Expected;
//!
//! fn parse_port(raw: &str) -> Expected<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into_expected()
//! }
//!
//! assert_eq!(parse_port("8080").value(), 8080);
//! assert!(parse_port("http").has_error());
//! ```

use crate::hook::Hook;
use crate::types::Expected;

/// Converts a `Result` into an [`Expected`] with the policy picked by the caller.
///
/// The hook defaults through the target type, so an annotated binding is
/// usually enough:
///
/// ```
/// use expected_rail::hook::RcAbort;
/// use expected_rail::traits::ResultExt;
/// use expected_rail::Expected;
///
/// let shared: Expected<i32, String, RcAbort> = Ok::<_, String>(3).into_expected();
/// let copy = shared.clone();
/// assert_eq!(copy.handle_count(), 2);
/// assert!(shared.has_value());
/// ```
pub trait ResultExt<T, E> {
    /// `Ok` becomes a value and `Err` an error, both passing through the hook.
    fn into_expected<H: Hook<T, E>>(self) -> Expected<T, E, H>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_expected<H: Hook<T, E>>(self) -> Expected<T, E, H> {
        Expected::from_result(self)
    }
}
