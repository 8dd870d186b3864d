use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT;
use crate::core::constants::PARTICLE_COUNT;
use crate::core::{CursorTrail, ParticleField};
use crate::dom;
use crate::input::PointerState;
use crate::render;

/// Everything the per-frame tick touches.
///
/// `pointer` and `trail` are shared with the pointer handlers; the frame is
/// their only reader. `field` stays `None` until the surface reports a
/// non-zero size; construction is retried from the resize handler and at
/// the top of each frame.
pub struct FrameContext {
    pub field: Option<ParticleField>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub trail: Rc<RefCell<CursorTrail>>,
    pub field_canvas: web::HtmlCanvasElement,
    pub field_ctx: web::CanvasRenderingContext2d,
    pub cursor_canvas: web::HtmlCanvasElement,
    pub cursor_ctx: web::CanvasRenderingContext2d,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Build the particle pool once the surface has a usable size.
    pub fn ensure_field(&mut self) {
        if self.field.is_some() {
            return;
        }
        let (w, h) = (self.field_canvas.width(), self.field_canvas.height());
        if w == 0 || h == 0 {
            return;
        }
        let mut rng = rand::thread_rng();
        self.field = Some(ParticleField::new(
            w as f32,
            h as f32,
            PARTICLE_COUNT,
            &mut rng,
        ));
        log::info!("field initialized at {w}x{h} with {PARTICLE_COUNT} particles");
    }

    /// Window resize: re-sync both backing stores, then update the field
    /// bounds without resetting the pool (or build it if init was deferred).
    pub fn on_resize(&mut self) {
        dom::sync_canvas_backing_size(&self.field_canvas);
        dom::sync_canvas_backing_size(&self.cursor_canvas);
        match &mut self.field {
            Some(f) => f.resize(
                self.field_canvas.width() as f32,
                self.field_canvas.height() as f32,
            ),
            None => self.ensure_field(),
        }
    }

    /// Advance and draw one frame.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;

        self.ensure_field();
        if let Some(field) = &mut self.field {
            let pointer = self.pointer.borrow().as_vec2();
            field.step(pointer);
            render::draw_field(&self.field_ctx, field);
        }

        let (dot, ring) = {
            let mut trail = self.trail.borrow_mut();
            trail.step(dt);
            (trail.dot.value, trail.ring.value)
        };
        render::draw_cursor(
            &self.cursor_ctx,
            self.cursor_canvas.width() as f64,
            self.cursor_canvas.height() as f64,
            dot,
            ring,
        );
    }
}

/// Self-rescheduling requestAnimationFrame loop.
///
/// The closure checks `alive` before doing anything, so a callback that was
/// already queued when teardown ran is a no-op and schedules nothing. Each
/// pending frame id lands in `raf_id` for cancellation. The returned cell
/// owns the closure; taking the closure out of it breaks the self-reference
/// cycle that keeps the loop alive.
pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
) -> Rc<RefCell<Option<Closure<dyn FnMut()>>>> {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
    tick
}
