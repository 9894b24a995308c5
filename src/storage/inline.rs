use core::mem;

use super::Storage;
use crate::types::Payload;

/// Value-semantics storage embedded directly in the container.
///
/// Holds nothing but the payload, so an `Expected` backed by it has the size
/// of the payload enum. Inspection is not tracked and the flavor lock is not
/// recorded; hooks that need either pick [`Tracked`](super::Tracked).
#[derive(Debug, Clone)]
pub struct Inline<T, E> {
    payload: Payload<T, E>,
}

impl<T, E> Storage<T, E> for Inline<T, E> {
    const REF_COUNTED: bool = false;
    const TRACKED: bool = false;

    #[inline]
    fn new(payload: Payload<T, E>, _on_unchecked: fn()) -> Self {
        Self { payload }
    }

    #[inline]
    fn get(&self) -> Payload<&T, &E> {
        self.payload.as_ref()
    }

    #[inline]
    fn take(&mut self) -> Payload<T, E> {
        mem::take(&mut self.payload)
    }

    #[inline]
    fn set(&mut self, payload: Payload<T, E>) {
        self.payload = payload;
    }

    #[inline]
    fn mark_checked(&self) {}

    /// Nothing is owed on untracked storage, so this is always `true`.
    #[inline]
    fn is_checked(&self) -> bool {
        true
    }

    #[inline]
    fn handle_count(&self) -> usize {
        1
    }
}
