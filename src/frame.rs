use crate::surface::DomSurface;
use motion_core::MotionEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<MotionEngine>>,
    pub surface: Rc<RefCell<DomSurface>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let report = {
            let mut surface = self.surface.borrow_mut();
            self.engine.borrow_mut().tick(&mut *surface)
        };
        if report.detached > 0 {
            log::debug!("[frame] {} entities lost their element", report.detached);
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame for the rest of the session.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[frame] loop started");
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
