use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::ui::components::{Modal, PortalRoot};

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("portal-modal")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(900, 700))
}

const BUTTON_STYLE: &str = "margin-right: 12px; padding: 8px 16px; border-radius: 6px; \
     border: 1px solid #1565c0; background: white; color: #1565c0; cursor: pointer;";

#[component]
pub fn App() -> Element {
    debug!("Rendering demo app");
    let config = use_hook(Config::load);

    rsx! {
        PortalRoot { config, DemoPage {} }
    }
}

/// A long scrollable page with a success and an error modal
#[component]
fn DemoPage() -> Element {
    let mut show_saved = use_signal(|| false);
    let mut show_failed = use_signal(|| false);

    rsx! {
        div { style: "padding: 24px; font-family: sans-serif;",
            h1 { "portal-modal" }
            div { style: "margin-bottom: 24px;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| show_saved.set(true),
                    "Save"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| show_failed.set(true),
                    "Fail"
                }
            }
            // Clipping container: the modals still cover the whole window
            div { style: "overflow: hidden; height: 40px; position: relative; transform: translateZ(0);",
                Modal {
                    is_open: show_saved(),
                    on_close: move |_| {
                        info!("Success modal dismissed");
                        show_saved.set(false);
                    },
                    title: "Saved",
                    text: "Your changes have been saved.",
                }
                Modal {
                    is_open: show_failed(),
                    on_close: move |_| {
                        info!("Error modal dismissed");
                        show_failed.set(false);
                    },
                    title: "Something went wrong",
                    text: "The changes could not be saved. Close this dialog with the × button.",
                    is_error: true,
                    escape_close: false,
                    click_close: false,
                }
            }
            for line in 1..=60 {
                p { "Background line {line}" }
            }
        }
    }
}
