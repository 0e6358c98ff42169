use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::trace;

pub const ESCAPE: &str = "Escape";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Stop delivering this key press
    Handled,
    Ignored,
}

type KeyListener = Rc<dyn Fn(&str) -> KeyOutcome>;

#[derive(Default)]
struct HubInner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, KeyListener)>>,
}

impl HubInner {
    fn contains(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(l, _)| *l == id)
    }
}

/// Fan-out of the document keydown stream.
///
/// Listeners are attached through [`KeyboardHub::listen`] and stay attached
/// for exactly as long as the returned guard lives. Key presses go to the
/// newest listener first, so the topmost modal sees Escape before the ones
/// beneath it.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    inner: Rc<HubInner>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&self, listener: impl Fn(&str) -> KeyOutcome + 'static) -> KeyListenerGuard {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        trace!("Key listener {} attached", id);
        KeyListenerGuard {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Deliver a key press. Listeners may attach or detach others while
    /// handling it; detached listeners are skipped.
    pub fn dispatch(&self, key: &str) -> KeyOutcome {
        let snapshot: Vec<(u64, KeyListener)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .rev()
            .cloned()
            .collect();

        for (id, listener) in snapshot {
            if !self.inner.contains(id) {
                continue;
            }
            if listener(key) == KeyOutcome::Handled {
                trace!("Key {:?} handled by listener {}", key, id);
                return KeyOutcome::Handled;
            }
        }
        KeyOutcome::Ignored
    }
}

/// Detaches its listener when dropped
pub struct KeyListenerGuard {
    id: u64,
    hub: Weak<HubInner>,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
            trace!("Key listener {} detached", self.id);
        }
    }
}
