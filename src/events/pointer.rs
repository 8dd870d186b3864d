use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

use crate::core::CursorTrail;
use crate::dom::Listener;
use crate::input::{surface_local, PointerState};

/// Shared state the pointer handlers write into.
#[derive(Clone)]
pub struct PointerWiring {
    pub field_canvas: web::HtmlCanvasElement,
    pub cursor_canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub trail: Rc<RefCell<CursorTrail>>,
}

/// Surface-local position of a pointer event relative to `canvas`, in
/// backing pixels.
fn event_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    surface_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Window-level pointermove: overwrite the shared record with the
/// field-surface coordinate and retarget both trail springs.
pub fn wire_pointermove(
    w: &PointerWiring,
    window: &web::Window,
) -> Listener<dyn FnMut(web::PointerEvent)> {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.pointer
            .borrow_mut()
            .set(event_canvas_px(&ev, &w.field_canvas));
        w.trail
            .borrow_mut()
            .set_target(event_canvas_px(&ev, &w.cursor_canvas));
    }) as Box<dyn FnMut(_)>);
    Listener::new(window.as_ref(), "pointermove", closure)
}

/// Document-level pointerleave: reset the record to the off-screen sentinel
/// so no particle can sit inside the repulsion radius of a phantom pointer.
pub fn wire_pointerleave(
    w: &PointerWiring,
    document: &web::Document,
) -> Listener<dyn FnMut(web::PointerEvent)> {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.pointer.borrow_mut().clear();
    }) as Box<dyn FnMut(_)>);
    Listener::new(document.as_ref(), "pointerleave", closure)
}
