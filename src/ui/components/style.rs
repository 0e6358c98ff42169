//! Inline styles for the modal. No stylesheet build step is needed; the one
//! rule inline styles cannot express (button hover) ships as `CLOSE_HOVER_RULE`.

pub const ALERT_COLOR: &str = "#e53935";
pub const ACCENT_COLOR: &str = "#1565c0";
pub const CLOSE_HOVER_COLOR: &str = "#ff4f01";

/// Base z-index of the first layer; stacked layers go above it
pub const BASE_Z_INDEX: usize = 1000;

pub const HEADER_STYLE: &str =
    "display: flex; justify-content: space-between; align-items: center;";

pub const CLOSE_BUTTON_STYLE: &str = "margin-top: -15px; background: none; border: none; \
     color: #1565c0; font-size: 40px; cursor: pointer; transition: color 0.3s;";

pub const BODY_STYLE: &str = "padding: 20px 0; font-size: 17px; color: black;";

pub const CLOSE_HOVER_RULE: &str = ".portal-modal-close:hover { color: #ff4f01 !important; }";

pub fn title_color(is_error: bool) -> &'static str {
    if is_error {
        ALERT_COLOR
    } else {
        ACCENT_COLOR
    }
}

pub fn title_style(is_error: bool) -> String {
    format!("font-size: 22px; color: {};", title_color(is_error))
}

/// Full-viewport translucent backdrop
pub fn overlay_style(visible: bool, transition_ms: u64, stack_index: usize) -> String {
    let (opacity, pointer_events) = if visible { (1, "auto") } else { (0, "none") };
    format!(
        "position: fixed; top: 0; left: 0; right: 0; bottom: 0; \
         background-color: rgba(0, 0, 0, 0.5); display: flex; \
         justify-content: center; align-items: center; z-index: {}; \
         transition: opacity {}ms ease; opacity: {}; pointer-events: {};",
        BASE_Z_INDEX + stack_index,
        transition_ms,
        opacity,
        pointer_events
    )
}

/// The centered dialog box; slides down into place while fading in
pub fn container_style(visible: bool, transition_ms: u64) -> String {
    let (offset, opacity) = if visible { ("0", 1) } else { ("-20px", 0) };
    format!(
        "background-color: white; padding: 20px; border-radius: 10px; \
         max-width: 500px; width: 100%; box-shadow: 0px 4px 10px rgba(0, 0, 0, 0.2); \
         transform: translateY({}); opacity: {}; transition: all {}ms ease;",
        offset, opacity, transition_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_color_by_variant() {
        assert_eq!(title_color(true), "#e53935");
        assert_eq!(title_color(false), "#1565c0");
        assert_ne!(title_style(true), title_style(false));
    }

    #[test]
    fn test_overlay_hidden_ignores_pointer() {
        let hidden = overlay_style(false, 300, 0);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("pointer-events: none;"));
        assert!(hidden.contains("z-index: 1000;"));

        let shown = overlay_style(true, 300, 2);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("pointer-events: auto;"));
        assert!(shown.contains("z-index: 1002;"));
    }

    #[test]
    fn test_container_slides_into_place() {
        assert!(container_style(false, 300).contains("translateY(-20px)"));
        assert!(container_style(true, 300).contains("translateY(0)"));
        assert!(container_style(true, 120).contains("transition: all 120ms ease;"));
    }
}
