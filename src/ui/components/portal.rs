use super::modal_view::ModalView;
use super::style::CLOSE_HOVER_RULE;
use crate::config::Config;
use crate::document::{detach_key_bridge, run_key_bridge, EvalDocument};
use crate::manager::ModalManager;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{debug, warn};

/// Hook to access the modal manager provided by `PortalRoot`
pub fn use_modal_manager() -> ModalManager {
    use_context::<ModalManager>()
}

/// Provider for modals: owns the manager, forwards document key presses and
/// renders the portal anchor after `children`, so modals escape any
/// clipping or stacking context of the tree they are declared in.
#[component]
pub fn PortalRoot(config: Option<Config>, children: Element) -> Element {
    use_context_provider(|| {
        let config = config.clone().unwrap_or_default();
        debug!("Portal root mounted on #{}", config.anchor_id);
        ModalManager::new(config, Rc::new(EvalDocument))
    });

    rsx! {
        KeyboardBridge {}
        {children}
        PortalHost {}
    }
}

/// Installs the document keydown bridge for the surrounding manager
#[component]
pub fn KeyboardBridge() -> Element {
    let manager = use_modal_manager();

    use_future(move || {
        let keyboard = manager.keyboard();
        async move {
            if let Err(e) = run_key_bridge(keyboard).await {
                warn!("Escape dismissal unavailable: {}", e);
            }
        }
    });
    use_drop(detach_key_bridge);

    rsx! {}
}

/// The portal anchor. Renders every registered layer, oldest first.
#[component]
pub fn PortalHost() -> Element {
    let manager = use_modal_manager();
    let anchor_id = manager.config().anchor_id.clone();
    let transition_ms = manager.config().transition_ms;
    let layers = manager.layers.read().clone();

    rsx! {
        div { id: "{anchor_id}",
            if !layers.is_empty() {
                style { {CLOSE_HOVER_RULE} }
            }
            for (index, layer) in layers.into_iter().enumerate() {
                ModalView {
                    key: "{layer.id}",
                    title: layer.title,
                    text: layer.text,
                    is_error: layer.is_error,
                    visible: layer.visible,
                    dismiss: layer.dismiss,
                    transition_ms,
                    stack_index: index,
                    on_close: layer.on_close,
                }
            }
        }
    }
}
