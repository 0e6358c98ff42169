// Test support utilities for both unit and integration tests

use crate::document::{DocumentBackend, DocumentError};
use std::cell::RefCell;

/// In-memory document for testing
///
/// Records every scroll lock update instead of touching a webview.
#[derive(Default)]
pub struct RecordingDocument {
    updates: RefCell<Vec<bool>>,
    fail: bool,
}

impl RecordingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose every update fails, after recording it
    pub fn failing() -> Self {
        Self {
            updates: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// Every value passed to `set_scroll_locked`, in order
    pub fn scroll_updates(&self) -> Vec<bool> {
        self.updates.borrow().clone()
    }

    /// Current state of the body scroll style
    pub fn scroll_locked(&self) -> bool {
        self.updates.borrow().last().copied().unwrap_or(false)
    }
}

impl DocumentBackend for RecordingDocument {
    fn set_scroll_locked(&self, locked: bool) -> Result<(), DocumentError> {
        self.updates.borrow_mut().push(locked);
        if self.fail {
            return Err(DocumentError::Eval("no webview attached".to_string()));
        }
        Ok(())
    }
}
