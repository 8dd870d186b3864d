use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a canvas element by id.
pub fn canvas_by_id(id: &str) -> Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{id} is not a canvas: {e:?}"))
}

/// Acquire the 2D context. `None` means the surface is unusable and the
/// visualization stays inert.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Match the canvas backing store to its CSS size * devicePixelRatio. A
/// canvas that has not been laid out yet keeps a zero backing size, which
/// defers field construction until a later resize.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        canvas.set_width((rect.width() * dpr) as u32);
        canvas.set_height((rect.height() * dpr) as u32);
    }
}

/// The visual layers are purely decorative and must never intercept clicks.
pub fn disable_pointer_events(el: &web::HtmlElement) {
    _ = el.style().set_property("pointer-events", "none");
}

/// The trail replaces the native pointer indicator while mounted.
pub fn hide_native_cursor(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("cursor", "none");
    }
}

pub fn restore_native_cursor(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().remove_property("cursor");
    }
}

/// Event-listener registration that detaches itself when dropped, so
/// unmount can remove every handler in one synchronous step.
pub struct Listener<F: ?Sized> {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<F>,
}

impl<F: ?Sized> Listener<F> {
    pub fn new(target: &web::EventTarget, kind: &'static str, closure: Closure<F>) -> Self {
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl<F: ?Sized> Drop for Listener<F> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
