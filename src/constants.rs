/// Presentation constants for the two visual layers.
// Hero palette: indigo accents over the dark site background
pub const PARTICLE_FILL: &str = "rgba(129, 140, 248, 0.55)";
pub const LINK_STROKE: &str = "rgba(129, 140, 248, 0.18)";
pub const LINK_WIDTH: f64 = 1.0;

pub const DOT_FILL: &str = "rgb(99, 102, 241)";
pub const DOT_RADIUS: f64 = 4.0;
pub const RING_STROKE: &str = "rgba(99, 102, 241, 0.8)";
pub const RING_RADIUS: f64 = 16.0;
pub const RING_WIDTH: f64 = 1.5;

// Spring dt clamp: a long frame gap (background tab) must not destabilize
// the explicit Euler integration
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;
