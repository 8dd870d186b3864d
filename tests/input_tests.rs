// Host-side tests for the pointer record and coordinate mapping. The main
// crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn default_pointer_is_the_off_screen_sentinel() {
    let p = PointerState::default();
    assert_eq!([p.x, p.y], POINTER_OFFSCREEN);
}

#[test]
fn set_and_clear_round_trip() {
    let mut p = PointerState::default();
    p.set(Vec2::new(12.0, 34.0));
    assert_eq!(p.as_vec2(), Vec2::new(12.0, 34.0));
    p.clear();
    assert_eq!([p.x, p.y], POINTER_OFFSCREEN);
}

#[test]
fn sentinel_sits_outside_any_repulsion_radius() {
    // The closest in-bounds point to the sentinel is the surface origin
    let sentinel = Vec2::from(POINTER_OFFSCREEN);
    assert!(Vec2::ZERO.distance(sentinel) > constants::REPULSION_RADIUS);
}

#[test]
fn surface_local_maps_css_to_backing_pixels() {
    // Canvas at (10, 20), 400x300 CSS px, 2x backing store
    let pos = surface_local(
        Vec2::new(210.0, 170.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(pos, Vec2::new(400.0, 300.0));
}

#[test]
fn surface_local_is_identity_at_dpr_one() {
    let pos = surface_local(
        Vec2::new(55.0, 66.0),
        Vec2::ZERO,
        Vec2::new(400.0, 300.0),
        Vec2::new(400.0, 300.0),
    );
    assert_eq!(pos, Vec2::new(55.0, 66.0));
}

#[test]
fn surface_local_tolerates_a_degenerate_rect() {
    let pos = surface_local(
        Vec2::new(50.0, 60.0),
        Vec2::ZERO,
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
    );
    assert!(pos.is_finite());
}
