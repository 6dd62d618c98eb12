//! Browser bindings: turn DOM nodes and events into the gesture core's seams.
//!
//! Requires a browser environment. Everything in here is compiled only with
//! the `hydrate` feature; the rest of the crate stays testable natively.

pub mod crosshair;
pub mod drag;
pub mod typewriter;
pub mod views;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, Window};

use crate::error::AtelierError;
use crate::layout::Size;

/// The page's `window`, or an error outside a browser.
pub fn window() -> Result<Window, AtelierError> {
    web_sys::window().ok_or(AtelierError::NoBrowser("window"))
}

/// The page's `document`.
pub fn document() -> Result<Document, AtelierError> {
    window()?.document().ok_or(AtelierError::NoBrowser("document"))
}

/// Look up an element by id and require it to be an `HtmlElement`.
pub fn html_element(document: &Document, id: &str) -> Result<HtmlElement, AtelierError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AtelierError::MissingElement(id.to_owned()))?
        .dyn_into::<HtmlElement>()
        .map_err(|el| AtelierError::dom("element is not an HtmlElement", el.id()))
}

/// Create an element with the given tag and class list.
pub fn create(document: &Document, tag: &str, class: &str) -> Result<Element, AtelierError> {
    let el = document
        .create_element(tag)
        .map_err(|err| AtelierError::dom("create element", err))?;
    el.set_class_name(class);
    Ok(el)
}

/// Like [`create`], for nodes whose inline style is written afterwards.
pub fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, AtelierError> {
    create(document, tag, class)?
        .dyn_into::<HtmlElement>()
        .map_err(|el| AtelierError::dom("created element is not an HtmlElement", el.tag_name()))
}

/// Set one inline style property on `el`.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), AtelierError> {
    el.style()
        .set_property(property, value)
        .map_err(|err| AtelierError::dom("set style property", err))
}

/// Append `child` as the last child of `parent`.
pub fn append(parent: &Element, child: &Element) -> Result<(), AtelierError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|err| AtelierError::dom("append child", err))
}

/// Register a non-passive listener that lives for the rest of the page.
///
/// Non-passive so move handlers may cancel touch scrolling mid-drag.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), AtelierError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|err| AtelierError::dom("add event listener", err))?;
    closure.forget();
    Ok(())
}

/// Inner size of the browser window in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<Size, AtelierError> {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, what: &'static str| {
        value
            .map_err(|err| AtelierError::dom(what, err))?
            .as_f64()
            .ok_or(AtelierError::NoBrowser(what))
    };
    Ok(Size::new(
        read(window.inner_width(), "window.innerWidth")?,
        read(window.inner_height(), "window.innerHeight")?,
    ))
}

/// Seed for the page's random generators.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn entropy_seed() -> u64 {
    let noise = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    noise ^ (js_sys::Date::now() as u64).rotate_left(32)
}
