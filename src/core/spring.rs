use glam::Vec2;

use super::constants::*;

/// Damped spring filter chasing a moving 2D target.
///
/// Integration is explicit Euler, applied componentwise:
/// `acc = stiffness * (target - value) - damping * velocity`. The axes never
/// couple, so one 2D spring behaves exactly like two independent per-axis
/// filters.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub value: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    /// A filter at rest on `seed`, targeting `seed`.
    pub fn new(stiffness: f32, damping: f32, seed: Vec2) -> Self {
        Self {
            value: seed,
            velocity: Vec2::ZERO,
            target: seed,
            stiffness,
            damping,
        }
    }

    /// Advance the filter by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let acc = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
        self.velocity += acc * dt;
        self.value += self.velocity * dt;
    }
}

/// The two followers of the custom cursor: a fast inner dot and a slow
/// outer ring that visibly lags behind it.
pub struct CursorTrail {
    pub dot: Spring,
    pub ring: Spring,
}

impl CursorTrail {
    pub fn new() -> Self {
        let seed = Vec2::from(SPRING_SEED);
        Self {
            dot: Spring::new(DOT_STIFFNESS, DOT_DAMPING, seed),
            ring: Spring::new(RING_STIFFNESS, RING_DAMPING, seed),
        }
    }

    /// Point both followers at the same target; called from raw pointer
    /// events.
    pub fn set_target(&mut self, target: Vec2) {
        self.dot.target = target;
        self.ring.target = target;
    }

    /// Advance both filters; called once per rendered frame.
    pub fn step(&mut self, dt: f32) {
        self.dot.step(dt);
        self.ring.step(dt);
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}
