use glam::Vec2;

/// Sentinel for "pointer not over the page"; far enough off-screen that no
/// in-bounds particle can ever fall within the repulsion radius of it.
pub const POINTER_OFFSCREEN: [f32; 2] = [-999.0, -999.0];

/// Shared pointer record: written by the pointermove handler, read by the
/// frame tick. Single writer, single reader, overwritten in place on every
/// event (no per-event allocation).
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        let [x, y] = POINTER_OFFSCREEN;
        Self { x, y }
    }
}

impl PointerState {
    /// Overwrite with a fresh surface-local coordinate.
    pub fn set(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Reset to the off-screen sentinel (pointer left the tracked region).
    pub fn clear(&mut self) {
        let [x, y] = POINTER_OFFSCREEN;
        self.x = x;
        self.y = y;
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Map a client (CSS pixel) coordinate into canvas backing pixels relative
/// to the surface origin, given the surface's bounding rect.
#[inline]
pub fn surface_local(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing_size: Vec2) -> Vec2 {
    let css = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        css / rect_size * backing_size
    } else {
        css
    }
}
