use super::style::{
    container_style, overlay_style, title_style, BODY_STYLE, CLOSE_BUTTON_STYLE, HEADER_STYLE,
};
use crate::config::DEFAULT_TRANSITION_MS;
use crate::dismiss::DismissOptions;
use dioxus::prelude::*;

/// Presentational modal: backdrop, dialog box, header with close button, body.
///
/// Stateless; `Modal` decides when it is shown and `PortalHost` places it.
#[component]
pub fn ModalView(
    title: String,
    text: String,
    #[props(default)] is_error: bool,
    visible: bool,
    #[props(default)] dismiss: DismissOptions,
    #[props(default = DEFAULT_TRANSITION_MS)] transition_ms: u64,
    #[props(default)] stack_index: usize,
    on_close: EventHandler<()>,
) -> Element {
    let overlay = overlay_style(visible, transition_ms, stack_index);
    let container = container_style(visible, transition_ms);
    let heading = title_style(is_error);

    rsx! {
        div {
            class: "portal-modal-overlay",
            style: "{overlay}",
            onclick: move |_| {
                if dismiss.closes_on_backdrop_click() {
                    on_close.call(());
                }
            },
            div {
                class: "portal-modal-container",
                style: "{container}",
                // Keeps content clicks from reaching the backdrop
                onclick: move |evt| evt.stop_propagation(),
                div { style: HEADER_STYLE,
                    h2 { class: "portal-modal-title", style: "{heading}", "{title}" }
                    button {
                        class: "portal-modal-close",
                        style: CLOSE_BUTTON_STYLE,
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "portal-modal-body", style: BODY_STYLE, "{text}" }
            }
        }
    }
}
