//! Small DOM helpers shared by the controls.

use folio_editor_core::{Axis, Pixels, PointerSample};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| js_error("no document"))
}

/// Look up an element by id and cast it to `HtmlElement`.
pub fn html_element_by_id(id: &str) -> Result<HtmlElement, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| js_error(format!("element #{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| js_error(format!("element #{id} is not an HTMLElement")))
}

/// Viewport position of an element's start edge along `axis`.
///
/// `None` once the element has been detached, so the caller can skip the
/// frame instead of measuring against a zero rect.
pub fn start_edge(element: &HtmlElement, axis: Axis) -> Option<Pixels> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(Pixels(match axis {
        Axis::X => rect.left(),
        Axis::Y => rect.top(),
    }))
}

pub fn pointer_sample(event: &Event) -> Option<PointerSample> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(PointerSample::new(
        event.client_x() as f64,
        event.client_y() as f64,
    ))
}

pub(crate) fn set_px(element: &HtmlElement, property: &str, value: Pixels) -> Result<(), JsValue> {
    element
        .style()
        .set_property(property, &format!("{}px", value.get()))
}

pub(crate) fn set_percent(element: &HtmlElement, property: &str, value: f64) -> Result<(), JsValue> {
    element.style().set_property(property, &format!("{value}%"))
}

pub(crate) fn toggle_class(element: &HtmlElement, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

/// Wrap a Rust error as a JS `Error` so it carries a stack in the console.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
