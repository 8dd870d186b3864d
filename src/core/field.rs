use glam::Vec2;
use rand::prelude::*;

use super::constants::*;

/// A point mass participating in the field simulation.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Particle-network simulation over a `[0,W]x[0,H]` surface.
///
/// The pool size is fixed for the lifetime of the field; `step` mutates the
/// particles in place once per rendered frame. Positions are in canvas
/// backing pixels, velocities in pixels per frame.
///
/// Typical usage:
/// - Construct with `ParticleField::new(width, height, count, rng)`
/// - Call `step(pointer)` once per frame with the tracked pointer position
///   (or the off-screen sentinel when there is none)
/// - Call `resize` on surface-size changes; the pool is kept as-is
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
}

impl ParticleField {
    /// Create `count` particles at uniform random positions with small
    /// random velocities and radii.
    pub fn new(width: f32, height: f32, count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height)),
                vel: Vec2::new(
                    rng.gen_range(-MAX_INITIAL_SPEED..=MAX_INITIAL_SPEED),
                    rng.gen_range(-MAX_INITIAL_SPEED..=MAX_INITIAL_SPEED),
                ),
                radius: rng.gen_range(RADIUS_MIN..=RADIUS_MAX),
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Update the surface bounds without resetting the pool. Particles left
    /// outside the new bounds are recaptured by the next step's clamp.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance the simulation one frame: pointer repulsion, drag,
    /// integration, boundary reflection. Positions always end the frame
    /// inside bounds.
    pub fn step(&mut self, pointer: Vec2) {
        for p in &mut self.particles {
            let away = p.pos - pointer;
            let d2 = away.length_squared();
            if d2 > 0.0 && d2 < REPULSION_RADIUS * REPULSION_RADIUS {
                let dist = d2.sqrt();
                // Strongest at the pointer, vanishing at the field edge
                p.vel += away / dist * (1.0 - dist / REPULSION_RADIUS) * FORCE_CONSTANT;
            }
            p.vel *= VELOCITY_DAMPING;
            p.pos += p.vel;

            // Per-axis elastic wall: clamp and point the velocity back
            // inward. Drag is the only energy loss.
            if p.pos.x < 0.0 {
                p.pos.x = 0.0;
                p.vel.x = p.vel.x.abs();
            } else if p.pos.x > self.width {
                p.pos.x = self.width;
                p.vel.x = -p.vel.x.abs();
            }
            if p.pos.y < 0.0 {
                p.pos.y = 0.0;
                p.vel.y = p.vel.y.abs();
            } else if p.pos.y > self.height {
                p.pos.y = self.height;
                p.vel.y = -p.vel.y.abs();
            }
        }
    }
}

/// Strict connection predicate: two particles are linked only below
/// `CONNECT_DISTANCE`, never at it.
#[inline]
pub fn linked(a: Vec2, b: Vec2) -> bool {
    a.distance_squared(b) < CONNECT_DISTANCE * CONNECT_DISTANCE
}
