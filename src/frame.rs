use crate::core::{Segment, SparkEngine, STROKE_WIDTH_PX};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<SparkEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    segments: Vec<Segment>,
}

impl FrameContext {
    pub fn new(
        engine: Rc<RefCell<SparkEngine>>,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
    ) -> Self {
        Self {
            engine,
            canvas,
            ctx,
            segments: Vec::new(),
        }
    }

    /// Advance the engine to `now_ms` and stroke the surviving sparks.
    /// A zero-area canvas still prunes but draws nothing.
    pub fn frame(&mut self, now_ms: f64) {
        self.segments.clear();
        self.engine.borrow_mut().frame(now_ms, &mut self.segments);

        let w = self.canvas.width();
        let h = self.canvas.height();
        if w == 0 || h == 0 {
            return;
        }
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        if self.segments.is_empty() {
            return;
        }

        let color = self.engine.borrow().resolved_color().to_string();
        self.ctx.set_stroke_style_str(&color);
        self.ctx.set_line_width(STROKE_WIDTH_PX);
        for seg in &self.segments {
            self.ctx.begin_path();
            self.ctx.move_to(seg.from.x as f64, seg.from.y as f64);
            self.ctx.line_to(seg.to.x as f64, seg.to.y as f64);
            self.ctx.stroke();
        }
    }
}

/// Self-terminating `requestAnimationFrame` chain: a tick is pending only
/// while sparks are live, and at most one is pending at a time.
pub struct RafLoop {
    raf_id: Rc<RefCell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl RafLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let raf_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let raf_id_tick = raf_id.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            raf_id_tick.borrow_mut().take();
            let idle = {
                let mut fc = frame_ctx.borrow_mut();
                fc.frame(timestamp);
                fc.engine.borrow().is_idle()
            };
            if !idle {
                request_tick(&raf_id_tick, &tick_clone);
            }
        }) as Box<dyn FnMut(f64)>));

        Self { raf_id, tick }
    }

    /// Schedule the next tick unless one is already pending. Spawning while
    /// an animation is in flight must not double-schedule.
    pub fn ensure_running(&self) {
        if self.raf_id.borrow().is_none() {
            request_tick(&self.raf_id, &self.tick);
        }
    }

    /// Cancel any pending tick; safe to call when none is scheduled.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_tick(
    raf_id: &Rc<RefCell<Option<i32>>>,
    tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
) {
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            *raf_id.borrow_mut() = Some(id);
        }
    }
}
