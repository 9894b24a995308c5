//! Sequencing and mapping operations on [`Expected`].
//!
//! Every combinator inspects the state of its input, so the input counts as
//! checked. Functions passed to a combinator run only on the side they apply to.

use crate::hook::Hook;
use crate::types::expected::Expected;
use crate::types::payload::Payload;

impl<T, E, H: Hook<T, E>> Expected<T, E, H> {
    /// Applies `f` to the value, propagating an error untouched.
    ///
    /// For a value-less success (`T = ()`), `f` receives `()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let name: Expected<&str> = Expected::from_value("rail");
    /// assert_eq!(name.map(str::len).value(), 4);
    /// ```
    #[inline]
    #[track_caller]
    pub fn map<U, F>(self, f: F) -> Expected<U, E, H>
    where
        F: FnOnce(T) -> U,
        H: Hook<U, E>,
    {
        match self.into_payload() {
            Payload::Value(value) => Expected::from_value(f(value)),
            Payload::Error(error) => Expected::from_error(error),
            Payload::Empty => Expected::from_value(f(Self::missing_value(None))),
        }
    }

    /// Applies `f` to the error, passing a value (or emptiness) through.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let failed: Expected<i32, u16> = Expected::from_error(404);
    /// let described = failed.map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(described.error(), "HTTP 404");
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Expected<T, G, H>
    where
        F: FnOnce(E) -> G,
        H: Hook<T, G>,
    {
        match self.into_payload() {
            Payload::Value(value) => Expected::from_value(value),
            Payload::Error(error) => Expected::from_error(f(error)),
            Payload::Empty => Expected::from_payload(Payload::Empty),
        }
    }

    /// Collapses both sides into one plain value.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let failed: Expected<i32> = Expected::from_error("timeout".to_string());
    /// let line = failed.map_or_else(|v| format!("got {v}"), |e| format!("failed: {e}"));
    /// assert_eq!(line, "failed: timeout");
    /// ```
    #[inline]
    #[track_caller]
    pub fn map_or_else<U, V, F>(self, on_value: V, on_error: F) -> U
    where
        V: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self.into_payload() {
            Payload::Value(value) => on_value(value),
            Payload::Error(error) => on_error(error),
            Payload::Empty => on_value(Self::missing_value(None)),
        }
    }

    /// Returns `next` unless this result holds an error, which is propagated.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let first: Expected<i32> = Expected::from_value(5);
    /// let second: Expected<&str> = Expected::from_value("next");
    /// assert_eq!(first.and(second).value(), "next");
    /// ```
    #[inline]
    pub fn and<U>(self, next: Expected<U, E, H>) -> Expected<U, E, H>
    where
        H: Hook<U, E>,
    {
        match self.into_payload() {
            Payload::Error(error) => {
                next.discard();
                Expected::from_error(error)
            },
            Payload::Value(_) | Payload::Empty => next,
        }
    }

    /// Feeds the value into the next fallible step, propagating an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// fn half(n: i32) -> Expected<i32> {
    ///     if n % 2 == 0 {
    ///         Expected::from_value(n / 2)
    ///     } else {
    ///         Expected::from_error(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(half(8).and_then(half).value(), 2);
    /// assert_eq!(half(6).and_then(half).error(), "3 is odd");
    /// ```
    #[inline]
    #[track_caller]
    pub fn and_then<U, F>(self, f: F) -> Expected<U, E, H>
    where
        F: FnOnce(T) -> Expected<U, E, H>,
        H: Hook<U, E>,
    {
        match self.into_payload() {
            Payload::Value(value) => f(value),
            Payload::Error(error) => Expected::from_error(error),
            Payload::Empty => f(Self::missing_value(None)),
        }
    }

    /// Returns `fallback` if this result holds an error, otherwise returns
    /// this result unchanged.
    #[inline]
    pub fn or(self, fallback: Self) -> Self {
        if self.has_error() {
            self.discard();
            fallback
        } else {
            fallback.discard();
            self
        }
    }

    /// Recovers from an error with a fallback result computed from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let cached: Expected<String> = Expected::from_error("cache miss".to_string());
    /// let loaded = cached.or_else(|_| Expected::from_value("from disk".to_string()));
    /// assert_eq!(loaded.value(), "from disk");
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        if self.has_error() {
            f(self.error())
        } else {
            self
        }
    }

    /// Returns the value, or `fallback` if an error is stored.
    #[inline]
    #[track_caller]
    pub fn value_or(self, fallback: T) -> T {
        match self.into_payload() {
            Payload::Value(value) => value,
            Payload::Error(_) => fallback,
            Payload::Empty => Self::missing_value(None),
        }
    }

    /// Returns the value, or computes one from the stored error.
    #[inline]
    #[track_caller]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.into_payload() {
            Payload::Value(value) => value,
            Payload::Error(error) => f(error),
            Payload::Empty => Self::missing_value(None),
        }
    }
}

impl<A, V, E, H> FromIterator<Expected<A, E, H>> for Expected<V, E, H>
where
    H: Hook<A, E> + Hook<V, E>,
    V: FromIterator<A>,
{
    /// Collects values until the first error, which becomes the result.
    ///
    /// Items after the first error are consumed without being reported as
    /// unchecked.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let rows: Vec<Expected<i32>> = vec![Expected::from_value(1), Expected::from_value(2)];
    /// let all: Expected<Vec<i32>> = rows.into_iter().collect();
    /// assert_eq!(all.value(), vec![1, 2]);
    ///
    /// let rows: Vec<Expected<i32>> = vec![
    ///     Expected::from_value(1),
    ///     Expected::from_error("bad row".to_string()),
    ///     Expected::from_value(3),
    /// ];
    /// let some: Expected<Vec<i32>> = rows.into_iter().collect();
    /// assert_eq!(some.error(), "bad row");
    /// ```
    fn from_iter<I: IntoIterator<Item = Expected<A, E, H>>>(iter: I) -> Self {
        let mut failure = None;
        let mut items = iter.into_iter();
        let collected: V = items
            .by_ref()
            .map_while(|item| match item.into_payload() {
                Payload::Value(value) => Some(value),
                Payload::Error(error) => {
                    failure = Some(error);
                    None
                },
                Payload::Empty => Some(Expected::<A, E, H>::missing_value(None)),
            })
            .collect();
        items.for_each(Expected::discard);
        match failure {
            Some(error) => Self::from_error(error),
            None => Self::from_value(collected),
        }
    }
}
