use crate::config::Config;
use crate::controller::ModalController;
use crate::dismiss::DismissOptions;
use crate::document::DocumentBackend;
use crate::keyboard::KeyboardHub;
use crate::scroll_lock::ScrollLock;
use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

pub type LayerId = u64;

/// Everything the portal host needs to draw one open modal
#[derive(Clone, PartialEq)]
pub struct ModalLayer {
    pub id: LayerId,
    pub title: String,
    pub text: String,
    pub is_error: bool,
    pub visible: bool,
    pub dismiss: DismissOptions,
    pub on_close: EventHandler<()>,
}

/// Shared state for every modal under one `PortalRoot`.
///
/// Owns the page-global resources (scroll lock, key stream) and the list of
/// layers the portal host renders. Must be created inside a component, like
/// any other signal owner.
#[derive(Clone)]
pub struct ModalManager {
    config: Rc<Config>,
    scroll_lock: ScrollLock,
    keyboard: KeyboardHub,
    next_layer: Rc<Cell<LayerId>>,
    pub layers: Signal<Vec<ModalLayer>>,
}

impl ModalManager {
    pub fn new(config: Config, document: Rc<dyn DocumentBackend>) -> Self {
        Self {
            config: Rc::new(config),
            scroll_lock: ScrollLock::new(document),
            keyboard: KeyboardHub::new(),
            next_layer: Rc::new(Cell::new(0)),
            layers: Signal::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn keyboard(&self) -> KeyboardHub {
        self.keyboard.clone()
    }

    pub fn scroll_lock(&self) -> ScrollLock {
        self.scroll_lock.clone()
    }

    pub fn controller(&self) -> ModalController {
        ModalController::new(self.scroll_lock.clone(), self.keyboard.clone())
    }

    pub fn allocate_layer(&self) -> LayerId {
        let id = self.next_layer.get();
        self.next_layer.set(id + 1);
        id
    }

    /// Insert or update a layer. Layers keep their first insertion position,
    /// so later modals stack above earlier ones.
    pub fn show_layer(&self, layer: ModalLayer) {
        let mut layers = self.layers;
        let position = layers.peek().iter().position(|l| l.id == layer.id);
        match position {
            Some(index) if layers.peek()[index] == layer => {}
            Some(index) => layers.write()[index] = layer,
            None => {
                debug!("Portal layer {} added", layer.id);
                layers.write().push(layer);
            }
        }
    }

    pub fn hide_layer(&self, id: LayerId) {
        // The portal root may already be gone when a whole tree unmounts
        let mut layers = self.layers;
        let present = layers
            .try_peek()
            .map(|layers| layers.iter().any(|l| l.id == id))
            .unwrap_or(false);
        if !present {
            return;
        }
        if let Ok(mut layers) = layers.try_write() {
            layers.retain(|l| l.id != id);
            debug!("Portal layer {} removed", id);
        };
    }
}
