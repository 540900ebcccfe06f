//! Browser glue: event wiring, per-frame drivers and the fetch transport.
//! Everything in here assumes a DOM and only compiles on wasm32.

use wasm_bindgen::JsValue;
use web_sys::Document;

pub mod chat;
pub mod fetch;
pub mod lab;
pub mod narrative;
pub mod showcase;
pub mod sway;

use std::rc::Rc;

use crate::ai::GeminiClient;

/// Mount every page driver. The AI client is constructed once here and
/// shared; a missing credential is carried as `None` and surfaces as a
/// configuration error when a feature first needs it.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let client: Rc<Option<GeminiClient>> = Rc::new(GeminiClient::from_build_env());

    sway::start(document)?;
    narrative::start(document)?;
    showcase::render(document)?;
    lab::start(document, client.clone())?;
    chat::start(document, client)?;
    Ok(())
}

/// Shorthand for the elements the drivers look up by id.
pub(crate) fn require(document: &Document, id: &str) -> Result<web_sys::HtmlElement, JsValue> {
    use wasm_bindgen::JsCast;
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HtmlElement")))
}
