use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, HtmlElement};

use super::handlers::CardHighlighter;
use crate::board::config::BoardConfig;
use crate::board::dom::claim_once;

fn event_target(event: &DragEvent) -> Option<HtmlElement> {
    event.target()?.dyn_into::<HtmlElement>().ok()
}

/// Binds the highlighter to the card element's `on*` drag handlers.
///
/// Returns `false` when the page has no card element. Calling it again on an
/// already wired card attaches nothing.
pub fn wire(document: &Document, config: &BoardConfig) -> bool {
    let Some(card) = document
        .get_element_by_id(&config.card_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("no #{} element, card highlighting disabled", config.card_id);
        return false;
    };

    if !claim_once(&card, "card") {
        log::debug!("#{} already wired", config.card_id);
        return true;
    }

    let highlighter = Rc::new(CardHighlighter::new(config));

    let on_drag_over = {
        let h = highlighter.clone();
        Closure::<dyn Fn(DragEvent)>::new(move |e: DragEvent| {
            h.drag_over(&e, event_target(&e).as_ref());
        })
    };
    let on_drag_leave = {
        let h = highlighter.clone();
        Closure::<dyn Fn(DragEvent)>::new(move |e: DragEvent| {
            h.drag_leave(event_target(&e).as_ref());
        })
    };
    let on_drag_start = {
        let h = highlighter.clone();
        Closure::<dyn Fn(DragEvent)>::new(move |_: DragEvent| h.drag_start())
    };
    let on_drag_end = {
        let h = highlighter.clone();
        Closure::<dyn Fn(DragEvent)>::new(move |e: DragEvent| {
            h.drag_end(event_target(&e).as_ref());
        })
    };
    let on_drop = {
        let h = highlighter;
        Closure::<dyn Fn(DragEvent)>::new(move |e: DragEvent| h.on_drop(&e))
    };

    card.set_ondragover(Some(on_drag_over.as_ref().unchecked_ref()));
    card.set_ondragleave(Some(on_drag_leave.as_ref().unchecked_ref()));
    card.set_ondragstart(Some(on_drag_start.as_ref().unchecked_ref()));
    card.set_ondragend(Some(on_drag_end.as_ref().unchecked_ref()));
    card.set_ondrop(Some(on_drop.as_ref().unchecked_ref()));

    // Handlers live as long as the page
    on_drag_over.forget();
    on_drag_leave.forget();
    on_drag_start.forget();
    on_drag_end.forget();
    on_drop.forget();

    log::debug!("card highlighter wired to #{}", config.card_id);
    true
}
