use web_sys::Window;

use crate::board::error::describe_js_error;

/// Page-level side effects a drop may trigger.
pub trait PageActions {
    fn reload(&self);
    /// Blocking, user-visible message.
    fn alert(&self, message: &str);
}

pub struct BrowserPage {
    window: Window,
}

impl BrowserPage {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl PageActions for BrowserPage {
    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::error!("page reload failed: {}", describe_js_error(&e));
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {}", describe_js_error(&e));
        }
    }
}
