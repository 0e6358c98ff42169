use crate::keyboard::ESCAPE;

/// Which user gestures dismiss a modal. Both are enabled by default; the
/// header close button dismisses regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissOptions {
    pub escape_close: bool,
    pub click_close: bool,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            escape_close: true,
            click_close: true,
        }
    }
}

impl DismissOptions {
    pub fn closes_on_key(&self, key: &str) -> bool {
        self.escape_close && key == ESCAPE
    }

    /// Clicks inside the dialog box never reach the backdrop handler
    pub fn closes_on_backdrop_click(&self) -> bool {
        self.click_close
    }
}
