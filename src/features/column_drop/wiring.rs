use std::rc::Rc;

use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DragEvent, Event, HtmlElement, Window};

use super::handlers::ColumnDropHandler;
use crate::board::config::BoardConfig;
use crate::board::dom::claim_once;
use crate::board::error::{describe_js_error, WireError};
use crate::board::services::{BrowserPage, CookieSource, DocumentCookies, FetchTransport};
use crate::dragster_bridge::{self, DRAGSTER_ENTER, DRAGSTER_LEAVE};

type BrowserHandler = ColumnDropHandler<FetchTransport, BrowserPage, Box<dyn CookieSource>>;

impl CookieSource for Box<dyn CookieSource> {
    fn cookie(&self, name: &str) -> Option<String> {
        (**self).cookie(name)
    }
}

struct NoCookies;

impl CookieSource for NoCookies {
    fn cookie(&self, _name: &str) -> Option<String> {
        None
    }
}

fn listen<T>(element: &HtmlElement, event: &str, callback: Closure<T>) -> Result<(), WireError>
where
    T: ?Sized + WasmClosure,
{
    element
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| WireError::Listener {
            event: event.to_string(),
            reason: describe_js_error(&e),
        })?;
    callback.forget();
    Ok(())
}

/// Wires every column present in the document right now.
///
/// Columns wired by an earlier call are skipped, so each drop still sends a
/// single request. Returns the number of columns newly wired.
pub fn wire(window: &Window, document: &Document, config: &BoardConfig) -> Result<usize, WireError> {
    let cookies: Box<dyn CookieSource> = match DocumentCookies::new(document) {
        Some(cookies) => Box::new(cookies),
        None => {
            log::warn!("document is not an HTML document, CSRF cookie unavailable");
            Box::new(NoCookies)
        }
    };
    let handler: Rc<BrowserHandler> = Rc::new(ColumnDropHandler::new(
        config,
        FetchTransport,
        BrowserPage::new(window.clone()),
        cookies,
    ));

    // Snapshot: the live collection would also pick up columns added later
    let collection = document.get_elements_by_class_name(&config.column_class);
    let columns: Vec<HtmlElement> = (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    let mut wired = 0;
    for column in columns.iter().filter(|column| claim_once(*column, "column")) {
        wire_column(column, &handler)?;
        wired += 1;
    }

    log::debug!("wired {} of {} .{} elements", wired, columns.len(), config.column_class);
    Ok(wired)
}

fn wire_column(column: &HtmlElement, handler: &Rc<BrowserHandler>) -> Result<(), WireError> {
    if let Err(e) = dragster_bridge::attach(column) {
        log::error!(
            "Dragster unavailable, column enter/leave feedback disabled: {}",
            describe_js_error(&e)
        );
    }

    let on_drag_over = {
        let h = handler.clone();
        Closure::<dyn Fn(DragEvent)>::new(move |e: DragEvent| h.drag_over(&e))
    };
    listen(column, "dragover", on_drag_over)?;

    let on_enter = {
        let h = handler.clone();
        let column = column.clone();
        Closure::<dyn Fn(Event)>::new(move |_: Event| h.drag_enter(&column))
    };
    listen(column, DRAGSTER_ENTER, on_enter)?;

    let on_leave = {
        let h = handler.clone();
        let column = column.clone();
        Closure::<dyn Fn(Event)>::new(move |_: Event| h.drag_leave(&column))
    };
    listen(column, DRAGSTER_LEAVE, on_leave)?;

    let on_drop = {
        let h = handler.clone();
        let column = column.clone();
        Closure::<dyn Fn(DragEvent)>::new(move |e: DragEvent| {
            let Some(request) = h.begin_drop(&e, &column) else {
                return;
            };
            let h = h.clone();
            spawn_local(async move {
                // Outcome already surfaced to the user or the console
                let _ = h.complete_drop(request).await;
            });
        })
    };
    listen(column, "drop", on_drop)
}
