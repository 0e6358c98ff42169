use crate::dismiss::DismissOptions;
use crate::keyboard::{KeyListenerGuard, KeyOutcome, KeyboardHub};
use crate::lifecycle::{Lifecycle, OpenTicket, Phase};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Lifecycle of one modal instance, independent of any UI framework.
///
/// Owns the modal's share of the page-global resources: a scroll lock guard
/// from opening until closing, and an Escape listener while open with
/// `escape_close` set. Both are released on close and on drop.
pub struct ModalController {
    lifecycle: Lifecycle,
    scroll_lock: ScrollLock,
    keyboard: KeyboardHub,
    scroll_guard: Option<ScrollLockGuard>,
    escape_guard: Option<KeyListenerGuard>,
}

impl ModalController {
    pub fn new(scroll_lock: ScrollLock, keyboard: KeyboardHub) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            scroll_lock,
            keyboard,
            scroll_guard: None,
            escape_guard: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn is_open(&self) -> bool {
        self.lifecycle.is_open()
    }

    pub fn is_visible(&self) -> bool {
        self.lifecycle.is_visible()
    }

    pub fn escape_bound(&self) -> bool {
        self.escape_guard.is_some()
    }

    /// Follow the `is_open` prop. Opening locks scrolling right away and
    /// returns the ticket the caller must reveal after the open delay.
    /// Closing hides, detaches the Escape listener and unlocks scrolling
    /// synchronously.
    pub fn set_open(&mut self, open: bool) -> Option<OpenTicket> {
        if open {
            let ticket = self.lifecycle.open()?;
            if self.scroll_guard.is_none() {
                self.scroll_guard = Some(self.scroll_lock.acquire());
            }
            Some(ticket)
        } else {
            self.lifecycle.close();
            self.escape_guard = None;
            self.scroll_guard = None;
            self.lifecycle.settle();
            None
        }
    }

    pub fn reveal(&mut self, ticket: OpenTicket) -> bool {
        self.lifecycle.reveal(ticket)
    }

    /// Wait out `delay`, then reveal. Returns whether the modal became
    /// visible; false when it was closed or reopened in the meantime.
    pub async fn reveal_after(
        controller: Rc<RefCell<Self>>,
        ticket: OpenTicket,
        delay: Duration,
    ) -> bool {
        tokio::time::sleep(delay).await;
        controller.borrow_mut().reveal(ticket)
    }

    /// Attach the Escape listener if the modal is open and `options` allow
    /// it, detaching any previous one.
    pub fn bind_escape(&mut self, options: DismissOptions, on_close: impl Fn() + 'static) {
        self.escape_guard = None;
        if !self.lifecycle.is_open() || !options.escape_close {
            return;
        }
        self.escape_guard = Some(self.keyboard.listen(move |key| {
            if options.closes_on_key(key) {
                on_close();
                KeyOutcome::Handled
            } else {
                KeyOutcome::Ignored
            }
        }));
    }

    /// Release everything, as on unmount
    pub fn release(&mut self) {
        self.set_open(false);
    }
}
