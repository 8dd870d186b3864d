#![cfg(target_arch = "wasm32")]
//! Interactive hero visualization: a particle network that reacts to the
//! pointer, plus a custom spring-damped cursor trail. The host page owns
//! the two canvas layers and mounts/unmounts this crate around them.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use crate::core::CursorTrail;
use crate::input::PointerState;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-field ready");
    Ok(())
}

/// Everything `unmount` must release. Dropping this cancels the pending
/// frame, clears the liveness flag, breaks the loop closure's keep-alive
/// cycle, restores the native cursor and (through `Listener`) detaches all
/// handlers, in one synchronous step.
struct Mounted {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    _pointermove: dom::Listener<dyn FnMut(web::PointerEvent)>,
    _pointerleave: dom::Listener<dyn FnMut(web::PointerEvent)>,
    _resize: dom::Listener<dyn FnMut()>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
            if let Some(d) = w.document() {
                dom::restore_native_cursor(&d);
            }
        }
        self.tick.borrow_mut().take();
        log::info!("hero visualization unmounted");
    }
}

/// Host-facing handle. The two states are ACTIVE (`mounted` is `Some`:
/// loop running, listeners attached) and INACTIVE (`None`: everything
/// released).
#[wasm_bindgen]
pub struct HeroViz {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl HeroViz {
    /// Mount onto the two host canvases and start the frame loop. On any
    /// failure the handle comes back inert: this layer is cosmetic and
    /// never throws into the page.
    pub fn mount(field_canvas_id: &str, cursor_canvas_id: &str) -> HeroViz {
        match try_mount(field_canvas_id, cursor_canvas_id) {
            Ok(m) => HeroViz { mounted: Some(m) },
            Err(e) => {
                log::warn!("hero visualization disabled: {e:#}");
                HeroViz { mounted: None }
            }
        }
    }

    /// Stop the loop, detach all listeners and restore the native cursor.
    /// Complete before this returns; calling it twice is a no-op.
    pub fn unmount(&mut self) {
        self.mounted.take();
    }
}

fn try_mount(field_canvas_id: &str, cursor_canvas_id: &str) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let field_canvas = dom::canvas_by_id(field_canvas_id)?;
    let cursor_canvas = dom::canvas_by_id(cursor_canvas_id)?;

    // Fail closed when a 2D context is unavailable: no loop is started
    let field_ctx = dom::context_2d(&field_canvas)
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #{field_canvas_id}"))?;
    let cursor_ctx = dom::context_2d(&cursor_canvas)
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #{cursor_canvas_id}"))?;

    dom::sync_canvas_backing_size(&field_canvas);
    dom::sync_canvas_backing_size(&cursor_canvas);
    dom::disable_pointer_events(&field_canvas);
    dom::disable_pointer_events(&cursor_canvas);
    dom::hide_native_cursor(&document);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let trail = Rc::new(RefCell::new(CursorTrail::new()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field: None,
        pointer: pointer.clone(),
        trail: trail.clone(),
        field_canvas: field_canvas.clone(),
        field_ctx,
        cursor_canvas: cursor_canvas.clone(),
        cursor_ctx,
        last_instant: Instant::now(),
    }));
    // A zero-sized canvas defers this until the next resize notification
    frame_ctx.borrow_mut().ensure_field();

    let wiring = events::pointer::PointerWiring {
        field_canvas,
        cursor_canvas,
        pointer,
        trail,
    };
    let pointermove = events::pointer::wire_pointermove(&wiring, &window);
    let pointerleave = events::pointer::wire_pointerleave(&wiring, &document);
    let resize = wire_window_resize(&window, frame_ctx.clone());

    let alive = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let tick = frame::start_loop(frame_ctx, alive.clone(), raf_id.clone());

    log::info!("hero visualization mounted");
    Ok(Mounted {
        alive,
        raf_id,
        tick,
        _pointermove: pointermove,
        _pointerleave: pointerleave,
        _resize: resize,
    })
}

fn wire_window_resize(
    window: &web::Window,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
) -> dom::Listener<dyn FnMut()> {
    let closure = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().on_resize();
    }) as Box<dyn FnMut()>);
    dom::Listener::new(window.as_ref(), "resize", closure)
}
