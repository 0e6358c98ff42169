// Library exports for the demo binary and integration tests

pub mod config;
pub mod controller;
pub mod dismiss;
pub mod document;
pub mod keyboard;
pub mod lifecycle;
pub mod manager;
pub mod scroll_lock;
pub mod ui;

pub use config::Config;
pub use dismiss::DismissOptions;
pub use manager::{ModalLayer, ModalManager};
pub use ui::components::{Modal, ModalView, PortalHost, PortalRoot};

// Test support (only available with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
