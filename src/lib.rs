#![cfg(target_arch = "wasm32")]
use motion_core::{MotionEngine, MotionParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod page_tasks;
mod style;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Capability gates are read once; later changes are ignored.
    let caps = dom::probe_capabilities(&window);
    log::info!(
        "[caps] fine_pointer={:?} reduced_motion={:?}",
        caps.fine_pointer,
        caps.reduced_motion
    );

    let engine = Rc::new(RefCell::new(MotionEngine::new(
        MotionParams::default(),
        caps,
    )?));
    let surface = Rc::new(RefCell::new(surface::DomSurface::default()));

    events::wire_follower(&document, &engine, &surface);
    events::wire_cards(&document, &engine, &surface);

    if engine.borrow().needs_frames() {
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            engine: engine.clone(),
            surface: surface.clone(),
        }));
        frame::start_loop(frame_ctx);
    } else {
        log::info!("[frame] nothing to animate; loop not started");
    }

    page_tasks::start(&window, &document);
    Ok(())
}
