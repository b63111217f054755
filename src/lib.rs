#![cfg(target_arch = "wasm32")]
use crate::core::{SparkColor, SparkEngine};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;

use constants::SPARK_CANVAS_ID;

// Keep the canvas backing size in sync with its parent; also re-synced on
// each click before spawning (see events::wire_click).
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_parent(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_parent(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spark-web starting");

    // Decorative layer: init failures are logged, never thrown at the page.
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(SPARK_CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{}", SPARK_CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let config = dom::config_from_element(&canvas);
    let engine = Rc::new(RefCell::new(SparkEngine::new(config)?));

    // Symbolic colors track the live theme; fixed colors are resolved once
    // at construction.
    let color = engine.borrow().config.color.clone();
    if let SparkColor::Token(token) = color {
        engine
            .borrow_mut()
            .set_resolved_color(dom::resolve_css_var(&token).as_deref());
        events::wire_theme_observer(engine.clone(), token);
    }

    wire_canvas_resize(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        engine.clone(),
        canvas.clone(),
        ctx,
    )));
    // The click closure keeps the loop alive for the page's lifetime; its
    // Drop cancels any pending frame callback.
    let raf = Rc::new(frame::RafLoop::new(frame_ctx));
    events::wire_click(&canvas, engine, raf);

    Ok(())
}
