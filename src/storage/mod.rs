//! Storage strategies backing an [`Expected`](crate::Expected).
//!
//! A [`Hook`](crate::hook::Hook) picks one strategy through its associated
//! `Storage` type:
//!
//! - [`Inline`] embeds the payload in the container (the default) and
//!   nothing else.
//! - [`Tracked`] embeds the payload plus the checked flag and flavor lock.
//! - [`Shared`] keeps the payload in one `Rc` block shared by clones.
//! - [`AtomicShared`] does the same on `Arc`, for results that cross threads.
//!
//! The shared strategies verify the checked obligation when the last handle
//! releases the block, calling the `on_unchecked` function they were built with.
//!
//! # Examples
//!
//! ```
//! use expected_rail::storage::{Inline, Storage};
//! use expected_rail::types::Payload;
//!
//! let storage = Inline::<i32, &str>::new(Payload::Value(7), || {});
//! assert_eq!(storage.get(), Payload::Value(&7));
//! assert_eq!(storage.handle_count(), 1);
//! ```

mod atomic;
mod inline;
mod shared;
mod tracked;

pub use atomic::AtomicShared;
pub use inline::Inline;
pub use shared::Shared;
pub use tracked::Tracked;

use crate::types::{Flavor, Payload};

/// Backing store for the payload of an [`Expected`](crate::Expected).
///
/// Implementations never expose a payload other than through its tag, so a
/// value slot is never read while an error is live and vice versa.
pub trait Storage<T, E>: Sized {
    /// `true` when clones share one heap block through a reference count.
    const REF_COUNTED: bool;

    /// `true` when the storage records inspection and the flavor lock.
    ///
    /// Hooks that disable copying or enable the default constructor are
    /// rejected at compile time unless their storage is tracked.
    const TRACKED: bool;

    /// Builds the storage around `payload`.
    ///
    /// `on_unchecked` is called by reference counted strategies when the last
    /// handle is released without the result having been inspected. Inline
    /// storage ignores it; the container enforces the obligation itself.
    fn new(payload: Payload<T, E>, on_unchecked: fn()) -> Self;

    /// Borrows the live payload.
    fn get(&self) -> Payload<&T, &E>;

    /// Moves the payload out, leaving [`Payload::Empty`] behind.
    fn take(&mut self) -> Payload<T, E>;

    /// Replaces the payload, dropping the previous one.
    fn set(&mut self, payload: Payload<T, E>);

    /// Records that the state of the result has been inspected.
    fn mark_checked(&self);

    /// Returns whether the state has been inspected since construction.
    fn is_checked(&self) -> bool;

    /// Number of live handles sharing this payload (1 for inline storage).
    fn handle_count(&self) -> usize;

    /// Pins the flavor the result was built with. Survives [`take`](Self::take)
    /// and [`set`](Self::set). Untracked storage ignores it.
    #[inline]
    fn lock(&mut self, _flavor: Flavor) {}

    /// The flavor pinned by [`lock`](Self::lock), if any.
    #[inline]
    fn locked(&self) -> Option<Flavor> {
        None
    }
}
