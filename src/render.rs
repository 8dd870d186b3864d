use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

use crate::constants::*;
use crate::core::{linked, ParticleField};

/// Draw one frame of the particle field: clear, every particle as a filled
/// disc, then all links batched into a single stroked path.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width as f64, field.height as f64);

    ctx.set_fill_style_str(PARTICLE_FILL);
    for p in &field.particles {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
        ctx.fill();
    }

    // O(n^2) scan over unique pairs; a spatial partition only becomes
    // worthwhile well above this pool size
    ctx.set_stroke_style_str(LINK_STROKE);
    ctx.set_line_width(LINK_WIDTH);
    ctx.begin_path();
    let ps = &field.particles;
    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            if linked(ps[i].pos, ps[j].pos) {
                ctx.move_to(ps[i].pos.x as f64, ps[i].pos.y as f64);
                ctx.line_to(ps[j].pos.x as f64, ps[j].pos.y as f64);
            }
        }
    }
    ctx.stroke();
}

/// Draw the cursor trail: fast inner dot plus slow outer ring, each
/// centered on its spring value.
pub fn draw_cursor(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    dot: Vec2,
    ring: Vec2,
) {
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(DOT_FILL);
    ctx.begin_path();
    _ = ctx.arc(dot.x as f64, dot.y as f64, DOT_RADIUS, 0.0, TAU);
    ctx.fill();

    ctx.set_stroke_style_str(RING_STROKE);
    ctx.set_line_width(RING_WIDTH);
    ctx.begin_path();
    _ = ctx.arc(ring.x as f64, ring.y as f64, RING_RADIUS, 0.0, TAU);
    ctx.stroke();
}
