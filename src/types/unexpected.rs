use core::fmt::{Debug, Display};

/// Error object wrapping the error value of an [`Expected`](crate::Expected)
/// that was accessed as if it held a value.
///
/// The throwing policies (`Throw`, `AsException`) raise it as a panic payload,
/// so it can be recovered with `std::panic::catch_unwind` and downcast, or
/// turned back into a stored error by [`attempt`](crate::convert::attempt).
///
/// # Examples
///
/// ```
/// use expected_rail::Unexpected;
///
/// let unexpected = Unexpected::new("connection reset");
/// assert_eq!(unexpected.to_string(), "unexpected error: connection reset");
/// assert_eq!(unexpected.into_inner(), "connection reset");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Unexpected<E> {
    pub(crate) error: E,
}

impl<E> Unexpected<E> {
    /// Wraps an error value.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Returns a reference to the wrapped error.
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the adapter, returning the wrapped error.
    #[inline]
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: Debug> Debug for Unexpected<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Unexpected").field(&self.error).finish()
    }
}

impl<E: Display> Display for Unexpected<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unexpected error: {}", self.error)
    }
}

impl<E> core::error::Error for Unexpected<E>
where
    E: core::error::Error + 'static,
{
    /// Returns the wrapped error, so error chains continue through it.
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<E> From<E> for Unexpected<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
