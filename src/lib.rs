//! Drag-and-drop behaviour for a server-rendered kanban board.
//!
//! The module wires two independent behaviours onto the page once the
//! document is ready:
//! - card highlighting on the `#card` element
//! - column drop handling on every `.column`, persisting moves via `POST /drop/`

pub mod board;
pub mod dragster_bridge;
pub mod features;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use board::config::BoardConfig;
use board::error::WireError;

fn page() -> Result<(Window, Document), WireError> {
    let window = web_sys::window().ok_or(WireError::NoWindow)?;
    let document = window.document().ok_or(WireError::NoDocument)?;
    Ok((window, document))
}

/// `document.readyState` before `DOMContentLoaded` has fired.
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn wire_all(window: &Window, document: &Document) {
    let config = BoardConfig::from_window(window);
    log::set_max_level(config.level_filter());

    features::card_highlight::wire(document, &config);
    match features::column_drop::wire(window, document, &config) {
        Ok(count) => log::info!("kanban drag-and-drop ready ({} columns)", count),
        Err(e) => log::error!("column drop wiring failed: {}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    board::logger::init(log::LevelFilter::Info);

    let (window, document) = page()?;

    if is_loading(&document.ready_state()) {
        let on_ready = Closure::once_into_js(move || {
            if let Ok((window, document)) = page() {
                wire_all(&window, &document);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        wire_all(&window, &document);
    }
    Ok(())
}

/// Wires the card highlighter now. For pages that run their own start-up.
#[wasm_bindgen]
pub fn wire_card_highlighter() -> Result<bool, JsValue> {
    let (window, document) = page()?;
    Ok(features::card_highlight::wire(
        &document,
        &BoardConfig::from_window(&window),
    ))
}

/// Wires the column drop handler now and returns the number of columns newly
/// wired. Columns already wired at start-up are left alone.
#[wasm_bindgen]
pub fn wire_column_drop() -> Result<usize, JsValue> {
    let (window, document) = page()?;
    let config = BoardConfig::from_window(&window);
    Ok(features::column_drop::wire(&window, &document, &config)?)
}
