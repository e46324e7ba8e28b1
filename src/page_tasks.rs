//! Flip clock and logo swap, run as periodic tasks from one interval timer.

use crate::constants::*;
use crate::dom;
use instant::Instant;
use motion_core::clock::plan_flip;
use motion_core::constants::{CLOCK_FLIP_MS, CLOCK_PERIOD, LOGO_SWAP_PERIOD};
use motion_core::{TaskId, TaskList};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PageTasks {
    list: TaskList,
    clock: Option<TaskId>,
    logo: TaskId,
}

impl PageTasks {
    fn run_due(&mut self, document: &web::Document) {
        for id in self.list.due(Instant::now()) {
            if Some(id) == self.clock {
                update_clock(document);
            } else if id == self.logo {
                swap_logo(document);
            }
        }
    }
}

/// Register the page tasks and start polling them.
pub fn start(window: &web::Window, document: &web::Document) {
    let now = Instant::now();
    let mut list = TaskList::new();
    let has_clock = document.query_selector(CLOCK_SELECTOR).ok().flatten().is_some();
    let clock = has_clock.then(|| list.add("clock", CLOCK_PERIOD, now, true));
    let logo = list.add("logo", LOGO_SWAP_PERIOD, now, false);
    let interval_ms = list
        .poll_interval()
        .map_or(1000, |d| d.as_millis().min(i32::MAX as u128) as i32);

    let tasks = Rc::new(RefCell::new(PageTasks { list, clock, logo }));
    // first clock face without waiting a full period
    tasks.borrow_mut().run_due(document);

    let doc = document.clone();
    let poll = Closure::wrap(Box::new(move || {
        tasks.borrow_mut().run_due(&doc);
    }) as Box<dyn FnMut()>);
    if window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            poll.as_ref().unchecked_ref(),
            interval_ms,
        )
        .is_err()
    {
        log::error!("[tasks] could not start interval");
    }
    poll.forget();
    log::info!("[tasks] polling every {}ms (clock={})", interval_ms, has_clock);
}

fn update_clock(document: &web::Document) {
    let now = js_sys::Date::new_0();
    update_flip(document, CLOCK_HOURS_ID, now.get_hours());
    update_flip(document, CLOCK_MINUTES_ID, now.get_minutes());
}

fn update_flip(document: &web::Document, id: &str, value: u32) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    let part = |sel: &str| el.query_selector(sel).ok().flatten();
    let (Some(top), Some(bottom), Some(top_flip), Some(bottom_flip)) = (
        part(FLIP_TOP),
        part(FLIP_BOTTOM),
        part(FLIP_TOP_FLIP),
        part(FLIP_BOTTOM_FLIP),
    ) else {
        return;
    };
    let shown = top.text_content().unwrap_or_default();
    let Some(flip) = plan_flip(&shown, value) else {
        return;
    };
    top_flip.set_text_content(Some(&flip.from));
    bottom_flip.set_text_content(Some(&flip.to));
    _ = el.class_list().add_1(FLIPPING_CLASS);

    let settle = Closure::once_into_js(move || {
        for node in [&top, &bottom, &top_flip, &bottom_flip] {
            node.set_text_content(Some(&flip.to));
        }
        _ = el.class_list().remove_1(FLIPPING_CLASS);
    });
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            settle.unchecked_ref(),
            CLOCK_FLIP_MS,
        );
    }
}

fn swap_logo(document: &web::Document) {
    let Some(logo) = document.query_selector(LOGO_SELECTOR).ok().flatten() else {
        return;
    };
    _ = logo.class_list().toggle(LOGO_REVERSED_CLASS);
    let Ok(icons) = logo.query_selector_all(LOGO_ICON_SELECTOR) else {
        return;
    };
    for icon in (0..icons.length())
        .filter_map(|i| icons.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
    {
        dom::set_style(&icon, "animation", "none");
        // reading layout restarts the animation
        _ = icon.offset_height();
        dom::set_style(&icon, "animation", LOGO_SPIN_ANIMATION);
    }
}
