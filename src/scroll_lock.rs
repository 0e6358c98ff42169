use crate::document::DocumentBackend;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, error};

struct ScrollLockInner {
    holders: Cell<usize>,
    document: Rc<dyn DocumentBackend>,
}

/// Reference-counted lock on background scrolling.
///
/// The body style is set when the first guard is taken and cleared when the
/// last one is dropped, so several open modals never stomp on each other.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<ScrollLockInner>,
}

impl ScrollLock {
    pub fn new(document: Rc<dyn DocumentBackend>) -> Self {
        Self {
            inner: Rc::new(ScrollLockInner {
                holders: Cell::new(0),
                document,
            }),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get() + 1;
        self.inner.holders.set(holders);
        debug!("Scroll lock acquired ({} holders)", holders);
        if holders == 1 {
            apply(&self.inner, true);
        }
        ScrollLockGuard {
            inner: self.inner.clone(),
        }
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

fn apply(inner: &ScrollLockInner, locked: bool) {
    if let Err(e) = inner.document.set_scroll_locked(locked) {
        error!("Failed to set scroll lock to {}: {}", locked, e);
    }
}

/// Held while a modal is open; releases its share of the lock on drop
pub struct ScrollLockGuard {
    inner: Rc<ScrollLockInner>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        debug!("Scroll lock released ({} holders)", holders);
        if holders == 0 {
            apply(&self.inner, false);
        }
    }
}
