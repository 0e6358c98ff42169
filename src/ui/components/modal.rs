use crate::controller::ModalController;
use crate::dismiss::DismissOptions;
use crate::manager::{ModalLayer, ModalManager};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::error;

/// A dismissible modal dialog.
///
/// Renders nothing where it is declared. While `is_open` is true it
/// registers a layer with the surrounding `PortalRoot`, which draws it into
/// the portal anchor. Opening locks background scrolling and fades the
/// dialog in after the configured delay; closing hides it immediately.
///
/// - `escape_close` (default true): Escape calls `on_close` while open
/// - `click_close` (default true): a click on the backdrop calls `on_close`
/// - `is_error` (default false): heading in the alert colour
///
/// The header close button always calls `on_close`.
#[component]
pub fn Modal(
    is_open: bool,
    on_close: EventHandler<()>,
    title: String,
    text: String,
    #[props(default = false)] is_error: bool,
    #[props(default = true)] escape_close: bool,
    #[props(default = true)] click_close: bool,
) -> Element {
    let Some(manager) = try_use_context::<ModalManager>() else {
        use_hook(|| error!("Modal \"{}\" has no PortalRoot to render into", title));
        return rsx! {};
    };

    let layer_id = use_hook(|| manager.allocate_layer());
    let controller = use_hook(|| Rc::new(RefCell::new(manager.controller())));
    let visible = use_signal(|| false);
    let dismiss = DismissOptions {
        escape_close,
        click_close,
    };

    // Follow is_open: scroll lock, delayed reveal and the Escape listener
    use_effect({
        let controller = controller.clone();
        let delay = manager.config().open_delay();
        let mut visible = visible;
        use_reactive(&(is_open, escape_close), move |(is_open, escape_close)| {
            let mut modal = controller.borrow_mut();
            if let Some(ticket) = modal.set_open(is_open) {
                let controller = controller.clone();
                spawn(async move {
                    if ModalController::reveal_after(controller, ticket, delay).await {
                        visible.set(true);
                    }
                });
            }
            let options = DismissOptions {
                escape_close,
                ..Default::default()
            };
            modal.bind_escape(options, move || on_close.call(()));
            visible.set(modal.is_visible());
        })
    });

    // Publish the current layer to the portal host
    let layer = is_open.then(|| ModalLayer {
        id: layer_id,
        title: title.clone(),
        text: text.clone(),
        is_error,
        visible: visible(),
        dismiss,
        on_close,
    });
    use_effect({
        let manager = manager.clone();
        use_reactive(&layer, move |layer| match layer {
            Some(layer) => manager.show_layer(layer),
            None => manager.hide_layer(layer_id),
        })
    });

    use_drop({
        let controller = controller.clone();
        let manager = manager.clone();
        move || {
            controller.borrow_mut().release();
            manager.hide_layer(layer_id);
        }
    });

    rsx! {}
}
