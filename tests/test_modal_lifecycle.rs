mod support;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::support::{settle, tracing_init, ScrollRecorder};
use dioxus::prelude::*;
use portal_modal::{Config, Modal, ModalManager, PortalHost};

/// Handles into a mounted test page
#[derive(Clone)]
struct Page {
    config: Config,
    escape_close: bool,
    document: Rc<ScrollRecorder>,
    closes: Rc<Cell<usize>>,
    manager: Rc<RefCell<Option<ModalManager>>>,
    is_open: Rc<Cell<Option<Signal<bool>>>>,
    mounted: Rc<Cell<Option<Signal<bool>>>>,
}

impl Page {
    fn new(config: Config, escape_close: bool) -> Self {
        Self {
            config,
            escape_close,
            document: Rc::new(ScrollRecorder::default()),
            closes: Rc::new(Cell::new(0)),
            manager: Rc::new(RefCell::new(None)),
            is_open: Rc::new(Cell::new(None)),
            mounted: Rc::new(Cell::new(None)),
        }
    }

    fn manager(&self) -> ModalManager {
        self.manager.borrow().clone().unwrap()
    }

    fn listeners(&self) -> usize {
        self.manager().keyboard().listener_count()
    }

    fn press(&self, dom: &VirtualDom, key: &str) {
        let keyboard = self.manager().keyboard();
        dom.in_runtime(|| {
            keyboard.dispatch(key);
        });
    }

    fn set_open(&self, dom: &VirtualDom, open: bool) {
        let mut is_open = self.is_open.get().unwrap();
        dom.in_runtime(|| is_open.set(open));
    }

    fn unmount(&self, dom: &VirtualDom) {
        let mut mounted = self.mounted.get().unwrap();
        dom.in_runtime(|| mounted.set(false));
    }
}

fn modal_page(page: Page) -> Element {
    let manager = use_context_provider(|| {
        ModalManager::new(page.config.clone(), page.document.clone())
    });
    let mut is_open = use_signal(|| true);
    let mounted = use_signal(|| true);
    use_hook(|| {
        *page.manager.borrow_mut() = Some(manager);
        page.is_open.set(Some(is_open));
        page.mounted.set(Some(mounted));
    });

    let closes = page.closes.clone();
    rsx! {
        div { class: "page",
            if mounted() {
                Modal {
                    is_open: is_open(),
                    on_close: move |_| {
                        closes.set(closes.get() + 1);
                        is_open.set(false);
                    },
                    title: "Saved",
                    text: "Your changes have been saved.",
                    escape_close: page.escape_close,
                }
            }
        }
        PortalHost {}
    }
}

async fn mount(page_state: Page) -> VirtualDom {
    tracing_init();
    let mut dom = VirtualDom::new_with_props(modal_page, page_state);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    dom
}

#[tokio::test]
async fn test_escape_closes_exactly_once() {
    let state = Page::new(Config::default(), true);
    let mut dom = mount(state.clone()).await;

    assert_eq!(state.listeners(), 1);
    assert!(state.document.is_locked());
    assert!(dioxus_ssr::render(&dom).contains("Saved"));

    state.press(&dom, "Escape");
    settle(&mut dom).await;

    assert_eq!(state.closes.get(), 1);
    assert_eq!(state.listeners(), 0);
    assert!(!state.document.is_locked());
    assert!(!dioxus_ssr::render(&dom).contains("Saved"));

    state.press(&dom, "Escape");
    settle(&mut dom).await;
    assert_eq!(state.closes.get(), 1);
}

#[tokio::test]
async fn test_other_keys_do_not_close() {
    let state = Page::new(Config::default(), true);
    let mut dom = mount(state.clone()).await;

    state.press(&dom, "Enter");
    settle(&mut dom).await;

    assert_eq!(state.closes.get(), 0);
    assert_eq!(state.listeners(), 1);
    assert!(dioxus_ssr::render(&dom).contains("Saved"));
}

#[tokio::test]
async fn test_escape_disabled_keeps_modal_open() {
    let state = Page::new(Config::default(), false);
    let mut dom = mount(state.clone()).await;

    assert_eq!(state.listeners(), 0);

    state.press(&dom, "Escape");
    settle(&mut dom).await;

    assert_eq!(state.closes.get(), 0);
    assert!(state.document.is_locked());
    assert!(dioxus_ssr::render(&dom).contains("Saved"));
}

#[tokio::test]
async fn test_unmount_while_open_detaches_everything() {
    let state = Page::new(Config::default(), true);
    let mut dom = mount(state.clone()).await;

    // Close and reopen first, so the unmount happens from a fresh open
    state.press(&dom, "Escape");
    settle(&mut dom).await;
    state.set_open(&dom, true);
    settle(&mut dom).await;
    assert_eq!(state.listeners(), 1);
    assert!(state.document.is_locked());

    state.unmount(&dom);
    settle(&mut dom).await;

    assert_eq!(state.listeners(), 0);
    assert!(!state.document.is_locked());
    assert_eq!(state.manager().scroll_lock().holders(), 0);
    assert!(!dioxus_ssr::render(&dom).contains("Saved"));

    state.press(&dom, "Escape");
    settle(&mut dom).await;
    assert_eq!(state.closes.get(), 1);
}

#[tokio::test]
async fn test_open_modal_renders_into_portal_anchor() {
    let state = Page::new(Config::default(), true);
    let dom = mount(state.clone()).await;

    let html = dioxus_ssr::render(&dom);
    let anchor = html.find(r#"id="portal""#).unwrap();
    let title = html.find("Saved").unwrap();
    assert!(anchor < title, "{}", html);
    assert!(html.contains("pointer-events: auto;"), "{}", html);
}

#[tokio::test(start_paused = true)]
async fn test_visibility_waits_for_open_delay() {
    let state = Page::new(
        Config {
            open_delay_ms: 1000,
            ..Config::default()
        },
        true,
    );
    let mut dom = mount(state.clone()).await;

    // Locked and in the portal, but not faded in yet
    let html = dioxus_ssr::render(&dom);
    assert!(state.document.is_locked());
    assert!(html.contains("Saved"));
    assert!(html.contains("pointer-events: none;"), "{}", html);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("pointer-events: auto;"), "{}", html);
}

#[tokio::test]
async fn test_closing_unlocks_scroll_once() {
    let state = Page::new(Config::default(), true);
    let mut dom = mount(state.clone()).await;
    let updates = state.document.updates();

    state.set_open(&dom, false);
    settle(&mut dom).await;

    assert!(!state.document.is_locked());
    assert_eq!(state.document.updates(), updates + 1);
    assert_eq!(state.closes.get(), 0);
    assert!(!dioxus_ssr::render(&dom).contains("Saved"));
}
