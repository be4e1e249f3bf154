use wasm_bindgen::prelude::*;

/// Name of the event Dragster fires when a drag enters its element.
pub const DRAGSTER_ENTER: &str = "dragster:enter";
/// Name of the event Dragster fires when a drag leaves its element.
pub const DRAGSTER_LEAVE: &str = "dragster:leave";

#[wasm_bindgen]
extern "C" {
    /// The page's global `Dragster` helper. It turns the continuous native
    /// `dragover` stream into one enter and one leave event per element.
    pub type Dragster;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &web_sys::Element) -> Result<Dragster, JsValue>;
}

/// Attaches Dragster to `element`. Fails when the library is not loaded.
pub fn attach(element: &web_sys::Element) -> Result<Dragster, JsValue> {
    Dragster::new(element)
}
