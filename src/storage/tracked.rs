use core::cell::Cell;
use core::mem;

use super::Storage;
use crate::types::{Flavor, Payload};

/// Inline storage that also records inspection and the flavor lock.
///
/// Backs the hooks that enforce the checked obligation without sharing
/// ([`MustCheck`](crate::MustCheck)) and the ones that allow reassignment
/// ([`Minimal`](crate::Minimal)). The lock outlives the payload: draining the
/// value does not unlock the instance.
#[derive(Debug, Clone)]
pub struct Tracked<T, E> {
    payload: Payload<T, E>,
    checked: Cell<bool>,
    locked: Option<Flavor>,
}

impl<T, E> Storage<T, E> for Tracked<T, E> {
    const REF_COUNTED: bool = false;
    const TRACKED: bool = true;

    #[inline]
    fn new(payload: Payload<T, E>, _on_unchecked: fn()) -> Self {
        Self { payload, checked: Cell::new(false), locked: None }
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
    fn mark_checked(&self) {
        self.checked.set(true);
    }

    #[inline]
    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    #[inline]
    fn handle_count(&self) -> usize {
        1
    }

    #[inline]
    fn lock(&mut self, flavor: Flavor) {
        self.locked = Some(flavor);
    }

    #[inline]
    fn locked(&self) -> Option<Flavor> {
        self.locked
    }
}
