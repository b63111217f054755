use crate::constants::THEME_ATTR;
use crate::core::SparkEngine;
use crate::dom;
use crate::frame::RafLoop;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Convert a click's client coordinates to canvas backing pixels. The
/// backing store tracks the parent's CSS size, so the scale factor is
/// normally 1, but scaling through the rect keeps coordinates right if the
/// two ever disagree mid-layout.
#[inline]
pub fn click_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let rw = rect.width() as f32;
    let rh = rect.height() as f32;
    if rw > 0.0 && rh > 0.0 {
        Vec2::new(
            x_css / rw * canvas.width() as f32,
            y_css / rh * canvas.height() as f32,
        )
    } else {
        Vec2::new(x_css, y_css)
    }
}

/// Wire the click handler: re-measure the canvas (the click itself may have
/// changed layout), spawn a burst at the click point, and make sure the
/// frame loop is running. Attached to the canvas's parent so the canvas can
/// stay `pointer-events: none`.
pub fn wire_click(
    canvas: &web::HtmlCanvasElement,
    engine: Rc<RefCell<SparkEngine>>,
    raf: Rc<RafLoop>,
) {
    let target: web::EventTarget = match canvas.parent_element() {
        Some(parent) => parent.into(),
        None => match web::window() {
            Some(w) => w.into(),
            None => return,
        },
    };

    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        dom::sync_canvas_to_parent(&canvas);
        // No usable clock means no spark; decorative only, drop silently.
        let Some(now) = dom::now_ms() else {
            return;
        };
        let pos = click_canvas_px(&ev, &canvas);
        engine.borrow_mut().spawn_burst(pos.x, pos.y, now);
        raf.ensure_running();
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Re-resolve a symbolic stroke color whenever the document element's class
/// list changes (theme toggles flip a class there). The engine keeps using
/// the last resolved value between notifications.
pub fn wire_theme_observer(engine: Rc<RefCell<SparkEngine>>, token: String) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    let closure = Closure::wrap(Box::new(
        move |_records: js_sys::Array, _observer: web::MutationObserver| {
            let resolved = dom::resolve_css_var(&token);
            if resolved.is_none() {
                log::warn!("[theme] {} resolved empty, using fallback color", token);
            }
            engine.borrow_mut().set_resolved_color(resolved.as_deref());
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);

    match web::MutationObserver::new(closure.as_ref().unchecked_ref()) {
        Ok(observer) => {
            let init = web::MutationObserverInit::new();
            init.set_attributes(true);
            let filter = js_sys::Array::of1(&THEME_ATTR.into());
            init.set_attribute_filter(&filter);
            if observer.observe_with_options(&root, &init).is_err() {
                log::warn!("[theme] could not observe document element");
            }
            closure.forget();
        }
        Err(e) => log::warn!("[theme] MutationObserver unavailable: {:?}", e),
    }
}
