use crate::constants::*;
use crate::dom;
use crate::style;
use crate::surface::DomSurface;
use glam::Vec2;
use motion_core::{EntityHandle, MotionEngine, Rect};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Bind every card in the document. Already-bound cards are skipped, so this
/// is safe to call again after the page adds cards. Cloned cards carry the
/// source card's key and are rekeyed. Returns the number of newly bound
/// cards.
pub fn wire_cards(
    document: &web::Document,
    engine: &Rc<RefCell<MotionEngine>>,
    surface: &Rc<RefCell<DomSurface>>,
) -> usize {
    if !engine.borrow().tilt_enabled() {
        return 0;
    }
    let mut fresh = 0;
    for card in dom::query_html_all(document, CARD_SELECTOR) {
        let stamped = style::parse_key(card.get_attribute(CARD_KEY_ATTR));
        let bound = engine.borrow_mut().bind_card_element(stamped, |handle| {
            surface.borrow().holds(handle, &card)
        });
        let Some((key, bound)) = bound else {
            continue;
        };
        if !bound.fresh {
            continue;
        }
        _ = card.set_attribute(CARD_KEY_ATTR, &key.to_string());
        surface.borrow_mut().insert(bound.handle, card.clone());
        wire_card(&card, bound.handle, engine);
        fresh += 1;
    }
    log::info!("[tilt] {} cards bound", fresh);
    fresh
}

fn wire_card(
    card: &web::HtmlElement,
    handle: EntityHandle,
    engine: &Rc<RefCell<MotionEngine>>,
) {
    let engine_enter = engine.clone();
    dom::add_listener(card, "pointerenter", move |_: web::PointerEvent| {
        engine_enter.borrow_mut().card_entered(handle);
    });

    let engine_leave = engine.clone();
    dom::add_listener(card, "pointerleave", move |_: web::PointerEvent| {
        engine_leave.borrow_mut().card_left(handle);
    });

    let engine_move = engine.clone();
    let card_move = card.clone();
    dom::add_listener(card, "pointermove", move |ev: web::PointerEvent| {
        let r = card_move.get_bounding_client_rect();
        let rect = Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        );
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let spot = engine_move.borrow_mut().card_moved(handle, rect, pointer);
        if let Some(spot) = spot {
            dom::set_style(&card_move, SPOT_X_VAR, &style::px(spot.x));
            dom::set_style(&card_move, SPOT_Y_VAR, &style::px(spot.y));
        }
    });
}
