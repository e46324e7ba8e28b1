use crate::constants::*;
use crate::dom;
use crate::style;
use crate::surface::DomSurface;
use glam::Vec2;
use motion_core::MotionEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the follower element, bind it, and feed document pointer moves
/// into the engine. Returns false when the follower is disabled or the
/// element could not be created.
pub fn wire_follower(
    document: &web::Document,
    engine: &Rc<RefCell<MotionEngine>>,
    surface: &Rc<RefCell<DomSurface>>,
) -> bool {
    if !engine.borrow().follower_enabled() {
        return false;
    }
    let Some(body) = document.body() else {
        log::warn!("[cursor] no <body>; follower skipped");
        return false;
    };
    let Some(follower) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return false;
    };
    follower.set_id(FOLLOWER_ID);
    dom::set_style(&follower, "opacity", "0");
    if body.append_child(&follower).is_err() {
        return false;
    }
    let Some(handle) = engine.borrow_mut().bind_follower() else {
        return false;
    };
    surface.borrow_mut().insert(handle, follower);

    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let engine_move = engine.clone();
    dom::add_listener(document, "pointermove", move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let ambient = engine_move
            .borrow_mut()
            .pointer_moved(pointer, dom::viewport(&window));
        if let (Some(ambient), Some(root)) = (ambient, &root) {
            dom::set_style(root, BG_X_VAR, &style::pct(ambient.x_pct));
            dom::set_style(root, BG_Y_VAR, &style::pct(ambient.y_pct));
        }
    });

    wire_clickable_hover(document, &body);
    log::info!("[cursor] follower wired");
    true
}

/// Toggle the body's hover class while over any interactive element.
fn wire_clickable_hover(document: &web::Document, body: &web::HtmlElement) {
    let targets = dom::query_html_all(document, INTERACTIVE_SELECTOR);
    for el in &targets {
        let body_enter = body.clone();
        dom::add_listener(el, "pointerenter", move |_: web::PointerEvent| {
            _ = body_enter.class_list().add_1(HOVERING_CLICKABLE_CLASS);
        });
        let body_leave = body.clone();
        dom::add_listener(el, "pointerleave", move |_: web::PointerEvent| {
            _ = body_leave.class_list().remove_1(HOVERING_CLICKABLE_CLASS);
        });
    }
    log::debug!("[cursor] {} interactive elements", targets.len());
}
