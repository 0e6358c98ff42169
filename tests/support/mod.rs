#![allow(dead_code)]

use std::cell::Cell;
use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::VirtualDom;
use portal_modal::document::{DocumentBackend, DocumentError};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Document that accepts every update without a webview
pub struct HeadlessDocument;

impl DocumentBackend for HeadlessDocument {
    fn set_scroll_locked(&self, _locked: bool) -> Result<(), DocumentError> {
        Ok(())
    }
}

/// Document that remembers the last body scroll state it was given
#[derive(Default)]
pub struct ScrollRecorder {
    locked: Cell<bool>,
    updates: Cell<usize>,
}

impl ScrollRecorder {
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl DocumentBackend for ScrollRecorder {
    fn set_scroll_locked(&self, locked: bool) -> Result<(), DocumentError> {
        self.locked.set(locked);
        self.updates.set(self.updates.get() + 1);
        Ok(())
    }
}

/// Run pending effects, tasks and re-renders until the dom goes quiet
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..10 {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(30)) => {}
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}
