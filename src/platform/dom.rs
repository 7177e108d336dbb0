//! DOM helpers

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn body() -> Result<HtmlElement, JsValue> {
    document()?
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))
}

/// Create `<tag class="...">`
pub fn create<T: JsCast>(tag: &str, class: &str) -> Result<T, JsValue> {
    let el = document()?.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{tag}> has unexpected type")))
}

/// Create an element with text content and append it to `parent`
pub fn append_text(parent: &Element, tag: &str, class: &str, text: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = create(tag, class)?;
    el.set_text_content(Some(text));
    parent.append_child(&el)?;
    Ok(el)
}

/// Set a list of inline style properties
pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Current `window.innerWidth/innerHeight`, falling back to the root element's client size
pub fn window_size() -> (f32, f32) {
    let Ok(window) = window() else {
        return (0.0, 0.0);
    };
    let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
    match (inner(window.inner_width()), inner(window.inner_height())) {
        (Some(w), Some(h)) => (w as f32, h as f32),
        _ => window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| (el.client_width() as f32, el.client_height() as f32))
            .unwrap_or((0.0, 0.0)),
    }
}

/// Milliseconds since page load (monotonic where available)
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Seed for per-component RNGs
pub fn seed() -> u64 {
    (js_sys::Date::now() as u64) ^ ((js_sys::Math::random() * u32::MAX as f64) as u64) << 20
}
