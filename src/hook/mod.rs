//! Behaviour policies for [`Expected`](crate::Expected).
//!
//! A hook is a (usually zero-sized) type implementing [`Hook<T, E>`]. Its
//! associated constants switch features on and off at compile time, its
//! `Storage` type picks the payload strategy, and its callbacks decide what
//! happens on contract violations and lifecycle events.
//!
//! | Policy | Storage | Wrong-side access | Unchecked drop |
//! |--------|---------|-------------------|----------------|
//! | [`Abort`] (default) | inline | panic | not tracked |
//! | [`Minimal`] | inline, tracked | `Default::default()` | not tracked |
//! | [`MustCheck`] | inline, tracked, no clones | panic | panic |
//! | [`RcAbort`] | `Rc` block | panic | panic |
//! | [`ArcAbort`] | `Arc` block | panic | panic |
//! | `Throw` (`std`) | inline | panic with [`Unexpected`](crate::Unexpected) or [`BadAccess`](crate::BadAccess) | not tracked |
//! | `AsException` (`std`) | inline | panic with [`Unexpected`](crate::Unexpected) at construction | not tracked |
//! | `Traced<H>` (`tracing`) | as `H` | logs, then as `H` | logs, then as `H` |
//!
//! # Writing a hook
//!
//! ```
//! use expected_rail::hook::Hook;
//! use expected_rail::storage::Tracked;
//! use expected_rail::Expected;
//!
//! struct Lenient;
//!
//! impl Hook<u32, String> for Lenient {
//!     type Storage = Tracked<u32, String>;
//!     const ENABLE_DEFAULT_CONSTRUCTOR: bool = true;
//!
//!     fn on_access_empty_value(_error: Option<String>) -> u32 {
//!         0
//!     }
//!
//!     fn on_access_empty_error() -> String {
//!         "no error".to_string()
//!     }
//! }
//!
//! let failed = Expected::<u32, String, Lenient>::from_error("offline".to_string());
//! assert_eq!(failed.value(), 0);
//!
//! let mut pending = Expected::<u32, String, Lenient>::empty();
//! pending.assign_value(3);
//! assert_eq!(pending.value(), 3);
//! ```

mod abort;
mod minimal;
#[cfg(feature = "std")]
mod throw;
#[cfg(feature = "tracing")]
mod traced;

pub use abort::{Abort, ArcAbort, MustCheck, RcAbort};
pub use minimal::Minimal;
#[cfg(feature = "std")]
pub use throw::{AsException, Throw};
#[cfg(feature = "tracing")]
pub use traced::Traced;

use crate::storage::Storage;

/// Compile-time policy controlling the shape and behaviour of an
/// [`Expected<T, E, Self>`](crate::Expected).
///
/// Flags default to the behaviour of a plain result: no default constructor,
/// clones allowed, value-less successes allowed. Callbacks with a body default
/// to doing nothing; the two access callbacks must be provided because only the
/// policy knows how to fabricate a fallback.
pub trait Hook<T, E>: Sized {
    /// Payload strategy: [`Inline`](crate::storage::Inline),
    /// [`Tracked`](crate::storage::Tracked) or one of the reference counted
    /// ones. Disabling copies or enabling the default constructor requires a
    /// tracked strategy.
    type Storage: Storage<T, E>;

    /// Allows [`Expected::empty`](crate::Expected::empty), `Default` and the
    /// `assign_*` methods.
    const ENABLE_DEFAULT_CONSTRUCTOR: bool = false;

    /// When `false`, cloning is rejected at compile time and a result dropped
    /// without being inspected triggers [`on_unchecked`](Hook::on_unchecked).
    const ENABLE_COPY: bool = true;

    /// When `false`, a zero-sized `T` such as `()` is rejected at compile time.
    const ENABLE_VOID_VALUE: bool = true;

    /// Called when the value is requested but none is stored. Receives the
    /// stored error, if any, and returns the value to hand out instead.
    fn on_access_empty_value(error: Option<E>) -> T;

    /// Called when the error is requested but none is stored.
    fn on_access_empty_error() -> E;

    /// Called when a result subject to the checked obligation is released
    /// without its state having been inspected.
    #[inline]
    fn on_unchecked() {}

    /// Called right after a value becomes the live payload.
    #[inline]
    fn on_value_set(_value: &T) {}

    /// Called right before an error becomes the live payload. The returned
    /// error is the one stored; a policy may instead diverge.
    #[inline]
    fn on_error_set(error: E) -> E {
        error
    }

    /// Called when a reassignment would flip the flavor of an instance built
    /// with [`Expected::with_flavor`](crate::Expected::with_flavor). If this
    /// returns, the reassignment is skipped.
    #[inline]
    fn on_flavor_change() {
        panic!("cannot change the flavor of a flavor-locked Expected");
    }
}
