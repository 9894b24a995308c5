use core::cell::Cell;
use core::fmt::{Debug, Formatter};
use core::mem;

use super::Storage;
use crate::types::alloc_type::Rc;
use crate::types::{Flavor, Payload};

/// Heap block shared by every handle of a reference counted result.
struct Block<T, E> {
    payload: Payload<T, E>,
    checked: Cell<bool>,
    on_unchecked: fn(),
}

impl<T, E> Drop for Block<T, E> {
    fn drop(&mut self) {
        if !self.checked.get() {
            (self.on_unchecked)();
        }
    }
}

/// Reference counted storage: clones share a single `Rc` block.
///
/// The checked flag lives in the block, so inspecting any handle discharges the
/// obligation for all of them. When the last handle goes away without any
/// inspection, the block calls `on_unchecked` exactly once.
///
/// Moving the payload out of a block that is still shared clones it, hence the
/// `Clone` bounds on the [`Storage`] implementation.
pub struct Shared<T, E> {
    block: Option<Rc<Block<T, E>>>,
    on_unchecked: fn(),
    locked: Option<Flavor>,
}

impl<T, E> Shared<T, E> {
    fn attach(&mut self, payload: Payload<T, E>, checked: bool) {
        self.block = Some(Rc::new(Block {
            payload,
            checked: Cell::new(checked),
            on_unchecked: self.on_unchecked,
        }));
    }
}

impl<T, E> Clone for Shared<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { block: self.block.clone(), on_unchecked: self.on_unchecked, locked: self.locked }
    }
}

impl<T: Debug, E: Debug> Debug for Shared<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let payload = self.block.as_ref().map(|block| block.payload.as_ref());
        f.debug_struct("Shared")
            .field("payload", &payload.unwrap_or(Payload::Empty))
            .field("handles", &self.block.as_ref().map_or(0, Rc::strong_count))
            .finish()
    }
}

impl<T: Clone, E: Clone> Storage<T, E> for Shared<T, E> {
    const REF_COUNTED: bool = true;
    const TRACKED: bool = true;

    #[inline]
    fn new(payload: Payload<T, E>, on_unchecked: fn()) -> Self {
        let mut storage = Self { block: None, on_unchecked, locked: None };
        storage.attach(payload, false);
        storage
    }

    #[inline]
    fn get(&self) -> Payload<&T, &E> {
        match &self.block {
            Some(block) => block.payload.as_ref(),
            None => Payload::Empty,
        }
    }

    fn take(&mut self) -> Payload<T, E> {
        let Some(block) = self.block.take() else {
            return Payload::Empty;
        };
        match Rc::try_unwrap(block) {
            // The block drops at the end of this arm and runs the obligation check.
            Ok(mut owned) => mem::take(&mut owned.payload),
            Err(shared) => shared.payload.clone(),
        }
    }

    fn set(&mut self, payload: Payload<T, E>) {
        if let Some(block) = self.block.as_mut().and_then(Rc::get_mut) {
            block.payload = payload;
            return;
        }
        // Other handles keep the old payload; this one detaches.
        let checked = self.block.as_ref().map_or(false, |block| block.checked.get());
        self.attach(payload, checked);
    }

    #[inline]
    fn mark_checked(&self) {
        if let Some(block) = &self.block {
            block.checked.set(true);
        }
    }

    #[inline]
    fn is_checked(&self) -> bool {
        self.block.as_ref().map_or(true, |block| block.checked.get())
    }

    #[inline]
    fn handle_count(&self) -> usize {
        self.block.as_ref().map_or(0, Rc::strong_count)
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
