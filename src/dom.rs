use crate::constants::*;
use crate::core::{Easing, SparkColor, SparkConfig};
use std::str::FromStr;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current time in milliseconds on the same clock `requestAnimationFrame`
/// timestamps use.
#[inline]
pub fn now_ms() -> Option<f64> {
    web::window().and_then(|w| w.performance()).map(|p| p.now())
}

/// Size the canvas backing store to its parent's bounding rect. Writing a
/// canvas dimension clears it, so dimensions are only written on genuine
/// change.
pub fn sync_canvas_to_parent(canvas: &web::HtmlCanvasElement) {
    let Some(parent) = canvas.parent_element() else {
        return;
    };
    let rect = parent.get_bounding_client_rect();
    let w = rect.width() as u32;
    let h = rect.height() as u32;
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
}

/// Read the current concrete value of a CSS custom property from the
/// document element. `None` when the property is unset or empty.
pub fn resolve_css_var(name: &str) -> Option<String> {
    let document = window_document()?;
    let root = document.document_element()?;
    let style = web::window()?.get_computed_style(&root).ok()??;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn attr_parsed<T: FromStr>(canvas: &web::HtmlCanvasElement, name: &str) -> Option<T> {
    let raw = canvas.get_attribute(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring malformed {}=\"{}\"", name, raw);
            None
        }
    }
}

/// Build the engine config from defaults plus any `data-spark-*` attributes
/// on the canvas element. Malformed values keep the default for that field;
/// an invalid combination is caught by `SparkConfig::validate` at
/// construction.
pub fn config_from_element(canvas: &web::HtmlCanvasElement) -> SparkConfig {
    let mut cfg = SparkConfig::default();
    if let Some(raw) = canvas.get_attribute(ATTR_COLOR) {
        cfg.color = SparkColor::parse(&raw);
    }
    if let Some(v) = attr_parsed::<f32>(canvas, ATTR_SIZE) {
        cfg.size_px = v;
    }
    if let Some(v) = attr_parsed::<f32>(canvas, ATTR_RADIUS) {
        cfg.radius_px = v;
    }
    if let Some(v) = attr_parsed::<usize>(canvas, ATTR_COUNT) {
        cfg.count = v;
    }
    if let Some(v) = attr_parsed::<f64>(canvas, ATTR_DURATION) {
        cfg.duration_ms = v;
    }
    if let Some(raw) = canvas.get_attribute(ATTR_EASING) {
        match Easing::from_name(raw.trim()) {
            Some(e) => cfg.easing = e,
            None => log::warn!("[config] unknown easing \"{}\"", raw),
        }
    }
    if let Some(v) = attr_parsed::<f32>(canvas, ATTR_EXTRA_SCALE) {
        cfg.extra_scale = v;
    }
    cfg
}
