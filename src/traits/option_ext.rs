use crate::hook::Hook;
use crate::types::Expected;

/// Converts an `Option` into an [`Expected`], supplying the error for `None`.
///
/// # Examples
///
/// ```
/// use expected_rail::traits::OptionExt;
/// use expected_rail::Expected;
///
/// let users = ["ada", "grace"];
/// let found: Expected<&&str> = users.first().ok_or_expected("no users".to_string());
/// assert_eq!(*found.value(), "ada");
///
/// let missing: Expected<&&str> = users
///     .get(5)
///     .ok_or_else_expected(|| format!("no user at {}", 5));
/// assert_eq!(missing.error(), "no user at 5");
/// ```
pub trait OptionExt<T> {
    /// `Some` becomes a value; `None` becomes `error`.
    fn ok_or_expected<E, H: Hook<T, E>>(self, error: E) -> Expected<T, E, H>;

    /// Like [`ok_or_expected`](OptionExt::ok_or_expected), building the error
    /// only when it is needed.
    fn ok_or_else_expected<E, H, F>(self, error: F) -> Expected<T, E, H>
    where
        H: Hook<T, E>,
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_expected<E, H: Hook<T, E>>(self, error: E) -> Expected<T, E, H> {
        match self {
            Some(value) => Expected::from_value(value),
            None => Expected::from_error(error),
        }
    }

    #[inline]
    fn ok_or_else_expected<E, H, F>(self, error: F) -> Expected<T, E, H>
    where
        H: Hook<T, E>,
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Expected::from_value(value),
            None => Expected::from_error(error()),
        }
    }
}
