use motion_core::Capabilities;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{FINE_POINTER_QUERY, REDUCED_MOTION_QUERY};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `event` on `target`, downcasting to `E`. Events of
/// another type are ignored. The closure lives for the page session.
pub fn add_listener<E>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Elements matching `selector` that are `HtmlElement`s.
pub fn query_html_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// `Some(matches)` when the query could be evaluated.
fn media_matches(window: &web::Window, query: &str) -> Option<bool> {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
}

pub fn probe_capabilities(window: &web::Window) -> Capabilities {
    Capabilities {
        fine_pointer: media_matches(window, FINE_POINTER_QUERY),
        reduced_motion: media_matches(window, REDUCED_MOTION_QUERY),
    }
}

/// Viewport size in CSS pixels, zero when unavailable.
pub fn viewport(window: &web::Window) -> glam::Vec2 {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    glam::Vec2::new(read(window.inner_width()), read(window.inner_height()))
}
