use core::fmt::{Debug, Formatter};
use core::mem;
use core::sync::atomic::{AtomicBool, Ordering};

use super::Storage;
use crate::types::alloc_type::Arc;
use crate::types::{Flavor, Payload};

struct Block<T, E> {
    payload: Payload<T, E>,
    checked: AtomicBool,
    on_unchecked: fn(),
}

impl<T, E> Drop for Block<T, E> {
    fn drop(&mut self) {
        if !*self.checked.get_mut() {
            (self.on_unchecked)();
        }
    }
}

/// Thread-safe variant of [`Shared`](super::Shared) built on `Arc`.
///
/// Handles may be cloned and dropped on different threads. The count lives in
/// the `Arc`, so the obligation check in the block's destructor runs exactly
/// once, on whichever thread releases the last handle.
pub struct AtomicShared<T, E> {
    block: Option<Arc<Block<T, E>>>,
    on_unchecked: fn(),
    locked: Option<Flavor>,
}

impl<T, E> AtomicShared<T, E> {
    fn attach(&mut self, payload: Payload<T, E>, checked: bool) {
        self.block = Some(Arc::new(Block {
            payload,
            checked: AtomicBool::new(checked),
            on_unchecked: self.on_unchecked,
        }));
    }
}

impl<T, E> Clone for AtomicShared<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { block: self.block.clone(), on_unchecked: self.on_unchecked, locked: self.locked }
    }
}

impl<T: Debug, E: Debug> Debug for AtomicShared<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let payload = self.block.as_ref().map(|block| block.payload.as_ref());
        f.debug_struct("AtomicShared")
            .field("payload", &payload.unwrap_or(Payload::Empty))
            .field("handles", &self.block.as_ref().map_or(0, Arc::strong_count))
            .finish()
    }
}

impl<T: Clone, E: Clone> Storage<T, E> for AtomicShared<T, E> {
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
        match Arc::try_unwrap(block) {
            Ok(mut owned) => mem::take(&mut owned.payload),
            Err(shared) => shared.payload.clone(),
        }
    }

    fn set(&mut self, payload: Payload<T, E>) {
        if let Some(block) = self.block.as_mut().and_then(Arc::get_mut) {
            block.payload = payload;
            return;
        }
        let checked = self
            .block
            .as_ref()
            .map_or(false, |block| block.checked.load(Ordering::Acquire));
        self.attach(payload, checked);
    }

    #[inline]
    fn mark_checked(&self) {
        if let Some(block) = &self.block {
            block.checked.store(true, Ordering::Release);
        }
    }

    #[inline]
    fn is_checked(&self) -> bool {
        self.block.as_ref().map_or(true, |block| block.checked.load(Ordering::Acquire))
    }

    #[inline]
    fn handle_count(&self) -> usize {
        self.block.as_ref().map_or(0, Arc::strong_count)
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
