//! Re-entrant write guard
//!
//! Tracks which (entity, attribute) writes are in flight on this thread.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::entity::Entity;

thread_local! {
    static ACTIVE_WRITES: RefCell<HashSet<(usize, String)>> = RefCell::new(HashSet::new());
}

/// Held for the duration of one money write; released on drop.
#[derive(Debug)]
pub(crate) struct WriteGuard {
    slot: (usize, String),
}

impl WriteGuard {
    /// Mark a write as in flight. Returns `None` if the same entity and
    /// attribute are already being written further up the stack.
    pub(crate) fn acquire(entity: &dyn Entity, key: &str) -> Option<Self> {
        let slot = (entity_address(entity), key.to_string());
        let fresh = ACTIVE_WRITES.with(|active| active.borrow_mut().insert(slot.clone()));
        // Only a fresh slot may build a guard: dropping one releases the slot
        if fresh {
            Some(Self { slot })
        } else {
            None
        }
    }
}

impl Drop for WriteGuard {
    fn drop(&mut self) {
        ACTIVE_WRITES.with(|active| {
            active.borrow_mut().remove(&self.slot);
        });
    }
}

fn entity_address(entity: &dyn Entity) -> usize {
    entity as *const dyn Entity as *const () as usize
}
