//! Page-level configuration.
//!
//! Every DOM name and wire constant the board depends on lives in
//! [`BoardConfig`]. A page may override any subset of them by defining
//! `window.__KANBAN_DND__` before the module loads:
//!
//! ```js
//! window.__KANBAN_DND__ = { drop_endpoint: "/boards/drop/", guard_in_flight: true };
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "__KANBAN_DND__";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub card_id: String,
    pub card_class: String,
    pub highlight_shadow: String,
    pub cleared_shadow: String,
    pub column_class: String,
    /// Attribute suffix: `column-id` reads the `data-column-id` attribute.
    pub column_id_attribute: String,
    pub drop_target_class: String,
    pub drop_endpoint: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub transfer_format: String,
    pub guard_in_flight: bool,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            card_id: "card".to_string(),
            card_class: "job-block".to_string(),
            highlight_shadow: "0 2px 3px gray".to_string(),
            cleared_shadow: "none".to_string(),
            column_class: "column".to_string(),
            column_id_attribute: "column-id".to_string(),
            drop_target_class: "dropme".to_string(),
            drop_endpoint: "/drop/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            transfer_format: "Text".to_string(),
            guard_in_flight: false,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Reads the page override, falling back to defaults when it is absent
    /// or malformed.
    pub fn from_window(window: &web_sys::Window) -> Self {
        let raw = match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };

        match serde_wasm_bindgen::from_value::<BoardConfig>(raw) {
            Ok(config) => {
                log::debug!("loaded board config from window.{}", CONFIG_GLOBAL);
                config
            }
            Err(e) => {
                log::warn!("ignoring malformed window.{}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
