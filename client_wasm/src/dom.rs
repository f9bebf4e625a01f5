//! DOM glue: the three mutually exclusive screens and the winner banner.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Element ids the page must provide.
pub const START_SCREEN: &str = "start-screen";
pub const GAME_OVER_SCREEN: &str = "game-over-screen";
pub const WINNER_TEXT: &str = "winner-text";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn element(id: &str) -> Result<HtmlElement, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HtmlElement")))
}

pub fn set_display(id: &str, value: &str) -> Result<(), JsValue> {
    element(id)?.style().set_property("display", value)
}

pub fn set_text(id: &str, text: &str) -> Result<(), JsValue> {
    element(id)?.set_text_content(Some(text));
    Ok(())
}
