//! Host page access.
//!
//! Thin wrappers over the 1337x page's window and document. A missing window
//! or element makes the enhancement skip that step instead of failing.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

/// Window of the host page.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the host page.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current `location.href`, empty if unavailable.
pub fn location_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Full page navigation to `url`.
pub fn navigate(url: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_href(url);
    }
}

/// Blocking `alert()`.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Set the cursor on `<body>`.
pub fn set_body_cursor(cursor: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("cursor", cursor);
    }
}

/// Focus an input by CSS selector and select its text.
///
/// Returns `true` if the element was found and focused.
pub fn focus_and_select(selector: &str) -> bool {
    let Some(element) = document().and_then(|d| d.query_selector(selector).ok().flatten()) else {
        return false;
    };

    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        let focused = input.focus().is_ok();
        input.select();
        return focused;
    }

    element
        .dyn_into::<HtmlElement>()
        .is_ok_and(|el| el.focus().is_ok())
}

/// Whether an event target is a text-entry field.
pub fn is_text_field(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
}

/// Elements of a `querySelectorAll` result, in document order.
///
/// ```ignore
/// let rows = dom::elements(table.query_selector_all("tr"));
/// ```
pub fn elements(result: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = result else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Append a `<style>` element with `css` to `<head>`.
pub fn inject_style(css: &str) {
    let Some(document) = document() else { return };
    let Some(head) = document.head() else { return };
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }
}
