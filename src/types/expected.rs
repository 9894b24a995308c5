use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::hook::{Abort, Hook};
use crate::policy::Policy;
use crate::storage::Storage;
use crate::types::alloc_type::String;
use crate::types::iter::{IntoIter, Iter};
use crate::types::payload::{Flavor, Payload, State};

/// The outcome of a fallible operation: a value of type `T`, an error of type
/// `E`, or (only for policies that allow it) nothing yet.
///
/// The hook `H` decides at compile time how the container is stored, which
/// operations exist, and what happens on contract violations such as reading
/// the value of a failed result. See [`crate::hook`] for the stock policies.
///
/// Inspecting the state (`has_value`, `has_error`, `is_success`, comparisons,
/// the single-element view, or consuming the result) marks it as checked.
/// Policies that enforce checking report results dropped before that.
///
/// # Examples
///
/// ```
/// use expected_rail::Expected;
///
/// fn divide(a: i32, b: i32) -> Expected<i32> {
///     if b == 0 {
///         return Expected::from_error("division by zero".to_string());
///     }
///     Expected::from_value(a / b)
/// }
///
/// assert_eq!(divide(10, 2).value(), 5);
///
/// let failed = divide(1, 0).map_error(|msg| msg.to_uppercase());
/// assert_eq!(failed.error(), "DIVISION BY ZERO");
/// ```
#[must_use = "this `Expected` may hold an error, which should be handled"]
pub struct Expected<T, E = String, H = Abort>
where
    H: Hook<T, E>,
{
    storage: H::Storage,
    hook: PhantomData<fn() -> H>,
}

impl<T, E, H: Hook<T, E>> Expected<T, E, H> {
    /// Flags resolved from `H`. Evaluating it rejects inconsistent hooks at
    /// compile time.
    pub const POLICY: Policy = Policy::of::<T, E, H>();

    const DEFAULT_CONSTRUCTIBLE: () = assert!(
        H::ENABLE_DEFAULT_CONSTRUCTOR,
        "this hook does not enable the default constructor"
    );

    const COPYABLE: () = assert!(H::ENABLE_COPY, "this hook disables copying");

    #[inline]
    pub(crate) fn from_payload(payload: Payload<T, E>) -> Self {
        let _ = Self::POLICY;
        Self {
            storage: <H::Storage as Storage<T, E>>::new(payload, <H as Hook<T, E>>::on_unchecked),
            hook: PhantomData,
        }
    }

    /// Creates a successful result.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let parsed: Expected<u8> = Expected::from_value(42);
    /// assert!(parsed.has_value());
    /// ```
    #[inline]
    pub fn from_value(value: T) -> Self {
        let this = Self::from_payload(Payload::Value(value));
        if let Payload::Value(value) = this.storage.get() {
            <H as Hook<T, E>>::on_value_set(value);
        }
        this
    }

    /// Creates a failed result.
    ///
    /// The hook sees the error before it is stored and may raise it instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let failed: Expected<u8> = Expected::from_error("overflow".to_string());
    /// assert!(failed.has_error());
    /// ```
    #[inline]
    pub fn from_error(error: E) -> Self {
        let error = <H as Hook<T, E>>::on_error_set(error);
        Self::from_payload(Payload::Error(error))
    }

    /// Converts a `Result`, `Ok` becoming a value and `Err` an error.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }

    /// Creates an empty result.
    ///
    /// Only available when the hook enables the default constructor; using it
    /// with any other hook fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::hook::Minimal;
    /// use expected_rail::Expected;
    ///
    /// let pending = Expected::<i32, String, Minimal>::empty();
    /// assert!(!pending.has_value() && !pending.has_error());
    /// ```
    ///
    /// The default [`Abort`] policy has no empty state:
    ///
    /// ```rust,compile_fail
    /// use expected_rail::Expected;
    ///
    /// let pending = Expected::<i32, String>::empty();
    /// # drop(pending);
    /// ```
    ///
    /// Neither `Default` nor reassignment is available there:
    ///
    /// ```rust,compile_fail
    /// use expected_rail::Expected;
    ///
    /// let pending: Expected<i32, String> = Default::default();
    /// # drop(pending);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use expected_rail::Expected;
    ///
    /// let mut slot = Expected::<i32, String>::from_value(1);
    /// slot.assign_value(2);
    /// # drop(slot);
    /// ```
    #[inline]
    pub fn empty() -> Self {
        let () = Self::DEFAULT_CONSTRUCTIBLE;
        Self::from_payload(Payload::Empty)
    }

    /// Returns which side is live and marks the result as checked.
    #[inline]
    pub fn state(&self) -> State {
        self.storage.mark_checked();
        self.storage.get().state()
    }

    /// Returns `true` if a value is stored.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.state() == State::Value
    }

    /// Returns `true` if an error is stored.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.state() == State::Error
    }

    /// Boolean view of the result: `true` unless an error is stored.
    ///
    /// An empty result therefore counts as a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.state() != State::Error
    }

    /// Returns whether the state has been inspected since construction.
    ///
    /// For reference counted storage this covers every handle of the result.
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.storage.is_checked()
    }

    /// Number of handles sharing the payload: 1 for inline storage, the
    /// reference count for shared storage.
    #[inline]
    pub fn handle_count(&self) -> usize {
        self.storage.handle_count()
    }

    /// Borrows the live payload, marking the result as checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::types::Payload;
    /// use expected_rail::Expected;
    ///
    /// let port: Expected<u16> = Expected::from_value(8080);
    /// match port.as_payload() {
    ///     Payload::Value(port) => assert_eq!(*port, 8080),
    ///     Payload::Error(_) | Payload::Empty => unreachable!(),
    /// }
    /// ```
    #[inline]
    pub fn as_payload(&self) -> Payload<&T, &E> {
        self.storage.mark_checked();
        self.storage.get()
    }

    /// Consumes the result, returning its payload.
    #[inline]
    pub fn into_payload(mut self) -> Payload<T, E> {
        self.storage.mark_checked();
        self.storage.take()
    }

    /// Borrows the value, if one is stored.
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match self.as_payload() {
            Payload::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Borrows the error, if one is stored.
    #[inline]
    pub fn as_error(&self) -> Option<&E> {
        match self.as_payload() {
            Payload::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the stored value.
    ///
    /// Without a value, the hook's `on_access_empty_value` decides: the
    /// default [`Abort`] policy panics.
    ///
    /// For a value-less success (`T = ()`) there is nothing to return, and
    /// calling this only asserts that no error is stored. Use
    /// [`has_error`](Self::has_error) or [`error`](Self::error) to read such a
    /// result.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let answer: Expected<i32> = Expected::from_value(42);
    /// assert_eq!(answer.value(), 42);
    ///
    /// let saved: Expected<()> = Expected::from_value(());
    /// saved.value(); // yields `()`, panics on an error
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(self) -> T {
        match self.into_payload() {
            Payload::Value(value) => value,
            Payload::Error(error) => Self::missing_value(Some(error)),
            Payload::Empty => Self::missing_value(None),
        }
    }

    /// Returns the stored error.
    ///
    /// Without an error, the hook's `on_access_empty_error` decides.
    #[inline]
    #[track_caller]
    pub fn error(self) -> E {
        match self.into_payload() {
            Payload::Error(error) => error,
            Payload::Value(_) | Payload::Empty => <H as Hook<T, E>>::on_access_empty_error(),
        }
    }

    /// Returns `true` if a value equal to `other` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let answer: Expected<i32> = Expected::from_value(42);
    /// assert!(answer.value_eq(&42));
    ///
    /// let failed: Expected<i32> = Expected::from_error("42".to_string());
    /// assert!(!failed.value_eq(&42));
    /// ```
    #[inline]
    pub fn value_eq(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_value().is_some_and(|value| value == other)
    }

    /// Converts into `Option<T>`, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.into_payload().into_value()
    }

    /// Converts into `Option<E>`, discarding any value.
    #[inline]
    pub fn err(self) -> Option<E> {
        self.into_payload().into_error()
    }

    /// Converts into a `Result`. An empty result goes through the hook as a
    /// value access.
    #[inline]
    #[track_caller]
    pub fn into_result(self) -> Result<T, E> {
        match self.into_payload() {
            Payload::Value(value) => Ok(value),
            Payload::Error(error) => Err(error),
            Payload::Empty => Ok(Self::missing_value(None)),
        }
    }

    /// Replaces the payload with a value.
    ///
    /// Only available when the hook enables the default constructor. On an
    /// instance built with [`with_flavor`](Self::with_flavor) as a failure,
    /// the hook's `on_flavor_change` is called and the payload is kept. The
    /// lock holds even after the payload has been drained.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::hook::Minimal;
    /// use expected_rail::Expected;
    ///
    /// let mut slot = Expected::<i32, String, Minimal>::from_error("not loaded".to_string());
    /// slot.assign_value(7);
    /// assert_eq!(slot.value(), 7);
    /// ```
    pub fn assign_value(&mut self, value: T) {
        let () = Self::DEFAULT_CONSTRUCTIBLE;
        if self.storage.locked() == Some(Flavor::Failure) {
            <H as Hook<T, E>>::on_flavor_change();
            return;
        }
        self.storage.set(Payload::Value(value));
        if let Payload::Value(value) = self.storage.get() {
            <H as Hook<T, E>>::on_value_set(value);
        }
    }

    /// Replaces the payload with an error.
    ///
    /// The symmetric counterpart of [`assign_value`](Self::assign_value).
    pub fn assign_error(&mut self, error: E) {
        let () = Self::DEFAULT_CONSTRUCTIBLE;
        if self.storage.locked() == Some(Flavor::Success) {
            <H as Hook<T, E>>::on_flavor_change();
            return;
        }
        let error = <H as Hook<T, E>>::on_error_set(error);
        self.storage.set(Payload::Error(error));
    }

    /// Single-element view: `true` unless a value is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let mut one: Expected<i32> = Expected::from_value(1);
    /// assert!(!one.is_empty());
    /// assert_eq!(one.front(), Some(&1));
    /// one.pop_front();
    /// assert!(one.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.has_value()
    }

    /// Single-element view: peeks at the value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_value()
    }

    /// Single-element view: drops the value, leaving the result empty.
    ///
    /// Does nothing when no value is stored.
    #[inline]
    pub fn pop_front(&mut self) {
        let _ = self.drain();
    }

    /// Moves the value out into a one-shot iterator, leaving the result
    /// empty. An error stays in place and the iterator yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let mut one: Expected<i32> = Expected::from_value(1);
    /// assert_eq!(one.drain().collect::<Vec<_>>(), [1]);
    /// assert!(one.is_empty());
    /// assert_eq!(one.drain().next(), None);
    /// ```
    #[inline]
    pub fn drain(&mut self) -> IntoIter<T> {
        if !self.has_value() {
            return IntoIter::new(None);
        }
        IntoIter::new(self.storage.take().into_value())
    }

    /// Borrowing iterator over the value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_value())
    }

    /// Consumes the result without reporting it as unchecked.
    #[inline]
    pub(crate) fn discard(self) {
        self.storage.mark_checked();
    }

    #[inline]
    #[track_caller]
    pub(crate) fn missing_value(error: Option<E>) -> T {
        <H as Hook<T, E>>::on_access_empty_value(error)
    }
}

impl<T, H: Hook<T, T>> Expected<T, T, H> {
    /// Flag-disambiguated constructor for results whose value and error types
    /// coincide.
    ///
    /// The instance is flavor-locked: reassigning it to the other side is a
    /// contract violation reported through `on_flavor_change`. The lock is
    /// recorded by tracked storage only, which every reassignable hook uses.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::{Expected, Flavor};
    ///
    /// let ok = Expected::<String, String>::with_flavor("done".to_string(), Flavor::Success);
    /// let failed = Expected::<String, String>::with_flavor("done".to_string(), Flavor::Failure);
    /// assert_ne!(ok, failed);
    /// ```
    #[inline]
    pub fn with_flavor(payload: T, flavor: Flavor) -> Self {
        let mut this = match flavor {
            Flavor::Success => Self::from_value(payload),
            Flavor::Failure => Self::from_error(payload),
        };
        this.storage.lock(flavor);
        this
    }
}

impl<T, E, H: Hook<T, E>> Drop for Expected<T, E, H> {
    fn drop(&mut self) {
        if Self::POLICY.checks_inline() && !self.storage.is_checked() {
            <H as Hook<T, E>>::on_unchecked();
        }
    }
}

impl<T, E, H> Clone for Expected<T, E, H>
where
    H: Hook<T, E>,
    H::Storage: Clone,
{
    /// Copies the result. Reference counted storage shares the payload.
    ///
    /// Fails to compile when the hook disables copying:
    ///
    /// ```rust,compile_fail
    /// use expected_rail::hook::MustCheck;
    /// use expected_rail::Expected;
    ///
    /// let saved = Expected::<u64, String, MustCheck>::from_value(512);
    /// let copy = saved.clone();
    /// assert!(saved.has_value() && copy.has_value());
    /// ```
    #[inline]
    fn clone(&self) -> Self {
        let () = Self::COPYABLE;
        Self { storage: self.storage.clone(), hook: PhantomData }
    }
}

impl<T: Debug, E: Debug, H: Hook<T, E>> Debug for Expected<T, E, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.storage.get() {
            Payload::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Payload::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Payload::Empty => f.write_str("Empty"),
        }
    }
}

impl<T: PartialEq, E: PartialEq, H: Hook<T, E>> PartialEq for Expected<T, E, H> {
    /// Equal when both hold the same side with equal payloads. Marks both
    /// operands as checked.
    fn eq(&self, other: &Self) -> bool {
        self.as_payload() == other.as_payload()
    }
}

impl<T: Eq, E: Eq, H: Hook<T, E>> Eq for Expected<T, E, H> {}

impl<T: Hash, E: Hash, H: Hook<T, E>> Hash for Expected<T, E, H> {
    /// A stored value hashes exactly like the bare value; the other states
    /// hash their tag first.
    fn hash<S: Hasher>(&self, state: &mut S) {
        match self.storage.get() {
            Payload::Value(value) => value.hash(state),
            Payload::Error(error) => {
                State::Error.hash(state);
                error.hash(state);
            },
            Payload::Empty => State::Empty.hash(state),
        }
    }
}

impl<T, E, H: Hook<T, E>> Default for Expected<T, E, H> {
    /// Same as [`Expected::empty`].
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, E, H: Hook<T, E>> From<Result<T, E>> for Expected<T, E, H> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E, H: Hook<T, E>> From<Expected<T, E, H>> for Result<T, E> {
    #[inline]
    fn from(expected: Expected<T, E, H>) -> Self {
        expected.into_result()
    }
}

impl<T, E, H: Hook<T, E>> From<&Expected<T, E, H>> for bool {
    /// Boolean conversion, see [`Expected::is_success`].
    #[inline]
    fn from(expected: &Expected<T, E, H>) -> Self {
        expected.is_success()
    }
}

impl<T, E, H: Hook<T, E>> IntoIterator for Expected<T, E, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields the value, if any. An error is discarded.
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.ok())
    }
}

impl<'a, T, E, H: Hook<T, E>> IntoIterator for &'a Expected<T, E, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
