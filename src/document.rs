//! Access to the page-global state modals touch: the body scroll style and
//! the document keydown stream.

use crate::keyboard::KeyboardHub;
use dioxus::prelude::*;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Script evaluation failed: {0}")]
    Eval(String),
    #[error("Key bridge closed: {0}")]
    BridgeClosed(String),
}

/// Page-level side effects, behind a trait so tests can record them
pub trait DocumentBackend {
    fn set_scroll_locked(&self, locked: bool) -> Result<(), DocumentError>;
}

const LOCK_SCROLL_SCRIPT: &str = "document.body.style.overflow = 'hidden';";
const UNLOCK_SCROLL_SCRIPT: &str = "document.body.style.overflow = '';";

/// Forwards every document keydown to Rust. Installed once per `PortalRoot`;
/// individual modals attach and detach through the `KeyboardHub`. The handler
/// lives on `window` so a reinstall replaces it instead of stacking another.
const KEY_BRIDGE_SCRIPT: &str = r#"
if (window.__portalModalKeydown) {
    document.removeEventListener('keydown', window.__portalModalKeydown);
}
window.__portalModalKeydown = (event) => dioxus.send(event.key);
document.addEventListener('keydown', window.__portalModalKeydown);
"#;

const KEY_BRIDGE_DETACH_SCRIPT: &str = r#"
if (window.__portalModalKeydown) {
    document.removeEventListener('keydown', window.__portalModalKeydown);
    window.__portalModalKeydown = undefined;
}
"#;

/// `DocumentBackend` that runs scripts in the live webview
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalDocument;

impl DocumentBackend for EvalDocument {
    fn set_scroll_locked(&self, locked: bool) -> Result<(), DocumentError> {
        let script = if locked {
            LOCK_SCROLL_SCRIPT
        } else {
            UNLOCK_SCROLL_SCRIPT
        };
        let eval = document::eval(script);
        spawn(async move {
            let result = eval
                .join::<serde_json::Value>()
                .await
                .map_err(|e| DocumentError::Eval(e.to_string()));
            if let Err(e) = result {
                error!("Failed to update body scroll style: {}", e);
            }
        });
        Ok(())
    }
}

/// Pump document key presses into `hub` until the bridge goes away
pub async fn run_key_bridge(hub: KeyboardHub) -> Result<(), DocumentError> {
    let mut eval = document::eval(KEY_BRIDGE_SCRIPT);
    debug!("Key bridge installed");
    loop {
        let key: String = eval
            .recv()
            .await
            .map_err(|e| DocumentError::BridgeClosed(e.to_string()))?;
        hub.dispatch(&key);
    }
}

/// Remove the document keydown listener installed by [`run_key_bridge`].
/// Runs while the owning scope is torn down, so the result is not awaited.
pub fn detach_key_bridge() {
    let _ = document::eval(KEY_BRIDGE_DETACH_SCRIPT);
    debug!("Key bridge removed");
}
