pub mod modal;
pub mod modal_view;
pub mod portal;
pub mod style;

pub use modal::Modal;
pub use modal_view::ModalView;
pub use portal::{use_modal_manager, KeyboardBridge, PortalHost, PortalRoot};
