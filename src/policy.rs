//! Resolution of a [`Hook`] into the flags an [`Expected`](crate::Expected)
//! instantiation runs with.
//!
//! [`Policy::of`] is a `const fn`. The container evaluates it in an associated
//! constant, so an inconsistent policy fails the build for the
//! `(T, E, H)` combination that uses it instead of failing at run time.
//!
//! # Examples
//!
//! ```
//! use expected_rail::hook::{Abort, MustCheck, RcAbort};
//! use expected_rail::policy::Policy;
//!
//! let plain = Policy::of::<i32, String, Abort>();
//! assert!(plain.copy && !plain.enforces_check());
//!
//! let strict = Policy::of::<i32, String, MustCheck>();
//! assert!(!strict.copy && strict.enforces_check());
//!
//! let shared = Policy::of::<i32, String, RcAbort>();
//! assert!(shared.ref_counted && shared.enforces_check());
//! ```

use crate::hook::Hook;
use crate::storage::Storage;

/// Flags of a hook, resolved once per `(T, E, H)` instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Policy {
    /// Empty construction and reassignment are available.
    pub default_constructor: bool,
    /// Clones are allowed.
    pub copy: bool,
    /// The payload lives in a shared, reference counted block.
    pub ref_counted: bool,
    /// A value-less success type is allowed.
    pub void_value: bool,
    /// The storage records inspection and the flavor lock.
    pub tracked: bool,
}

impl Policy {
    /// Reads the flags of `H` for payloads `T` and `E`.
    ///
    /// # Panics
    ///
    /// In a const context (which is how the container uses it) this fails
    /// compilation when:
    ///
    /// - reference counting is combined with disabled copying,
    /// - `T` is zero-sized while the hook disallows value-less successes,
    /// - copying is disabled on storage that does not track inspection, or
    /// - the default constructor is enabled on storage that cannot record the
    ///   flavor lock.
    ///
    /// A shared block that cannot be copied:
    ///
    /// ```rust,compile_fail
    /// use expected_rail::hook::Hook;
    /// use expected_rail::policy::Policy;
    /// use expected_rail::storage::Shared;
    ///
    /// struct Pinned;
    ///
    /// impl Hook<i32, String> for Pinned {
    ///     type Storage = Shared<i32, String>;
    ///     const ENABLE_COPY: bool = false;
    ///
    ///     fn on_access_empty_value(_error: Option<String>) -> i32 {
    ///         0
    ///     }
    ///
    ///     fn on_access_empty_error() -> String {
    ///         String::new()
    ///     }
    /// }
    ///
    /// const _: Policy = Policy::of::<i32, String, Pinned>();
    /// ```
    ///
    /// A unit success under a hook that forbids it:
    ///
    /// ```rust,compile_fail
    /// use expected_rail::hook::Hook;
    /// use expected_rail::policy::Policy;
    /// use expected_rail::storage::Inline;
    ///
    /// struct ValueRequired;
    ///
    /// impl Hook<(), String> for ValueRequired {
    ///     type Storage = Inline<(), String>;
    ///     const ENABLE_VOID_VALUE: bool = false;
    ///
    ///     fn on_access_empty_value(_error: Option<String>) {}
    ///
    ///     fn on_access_empty_error() -> String {
    ///         String::new()
    ///     }
    /// }
    ///
    /// const _: Policy = Policy::of::<(), String, ValueRequired>();
    /// ```
    ///
    /// The same hook accepts a sized value type:
    ///
    /// ```
    /// use expected_rail::hook::Hook;
    /// use expected_rail::policy::Policy;
    /// use expected_rail::storage::Inline;
    ///
    /// struct ValueRequired;
    ///
    /// impl Hook<u8, String> for ValueRequired {
    ///     type Storage = Inline<u8, String>;
    ///     const ENABLE_VOID_VALUE: bool = false;
    ///
    ///     fn on_access_empty_value(_error: Option<String>) -> u8 {
    ///         0
    ///     }
    ///
    ///     fn on_access_empty_error() -> String {
    ///         String::new()
    ///     }
    /// }
    ///
    /// const POLICY: Policy = Policy::of::<u8, String, ValueRequired>();
    /// assert!(!POLICY.void_value);
    /// ```
    ///
    /// Plain inline storage under a hook that needs tracking:
    ///
    /// ```rust,compile_fail
    /// use expected_rail::hook::Hook;
    /// use expected_rail::policy::Policy;
    /// use expected_rail::storage::Inline;
    ///
    /// struct Forgetful;
    ///
    /// impl Hook<i32, String> for Forgetful {
    ///     type Storage = Inline<i32, String>;
    ///     const ENABLE_COPY: bool = false;
    ///
    ///     fn on_access_empty_value(_error: Option<String>) -> i32 {
    ///         0
    ///     }
    ///
    ///     fn on_access_empty_error() -> String {
    ///         String::new()
    ///     }
    /// }
    ///
    /// const _: Policy = Policy::of::<i32, String, Forgetful>();
    /// ```
    ///
    /// ```rust,compile_fail
    /// use expected_rail::hook::Hook;
    /// use expected_rail::policy::Policy;
    /// use expected_rail::storage::Inline;
    ///
    /// struct Unpinned;
    ///
    /// impl Hook<i32, String> for Unpinned {
    ///     type Storage = Inline<i32, String>;
    ///     const ENABLE_DEFAULT_CONSTRUCTOR: bool = true;
    ///
    ///     fn on_access_empty_value(_error: Option<String>) -> i32 {
    ///         0
    ///     }
    ///
    ///     fn on_access_empty_error() -> String {
    ///         String::new()
    ///     }
    /// }
    ///
    /// const _: Policy = Policy::of::<i32, String, Unpinned>();
    /// ```
    pub const fn of<T, E, H: Hook<T, E>>() -> Self {
        let policy = Self {
            default_constructor: H::ENABLE_DEFAULT_CONSTRUCTOR,
            copy: H::ENABLE_COPY,
            ref_counted: <H::Storage as Storage<T, E>>::REF_COUNTED,
            void_value: H::ENABLE_VOID_VALUE,
            tracked: <H::Storage as Storage<T, E>>::TRACKED,
        };
        assert!(
            !policy.ref_counted || policy.copy,
            "a reference counted payload requires ENABLE_COPY"
        );
        assert!(
            policy.void_value || !is_void::<T>(),
            "this hook does not allow a value-less success type"
        );
        assert!(
            policy.tracked || policy.copy,
            "a hook that disables copying needs storage that tracks inspection"
        );
        assert!(
            policy.tracked || !policy.default_constructor,
            "a reassignable hook needs storage that records the flavor lock"
        );
        policy
    }

    /// Whether results must be inspected before being released.
    #[inline]
    pub const fn enforces_check(&self) -> bool {
        !self.copy || self.ref_counted
    }

    /// Whether the container itself, rather than a shared block, verifies the
    /// checked obligation on drop.
    #[inline]
    pub(crate) const fn checks_inline(&self) -> bool {
        !self.copy && !self.ref_counted
    }
}

/// A success type carrying no data, `()` or any other zero-sized type.
#[inline]
pub const fn is_void<T>() -> bool {
    core::mem::size_of::<T>() == 0
}
