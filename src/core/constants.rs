/// Field and trail tuning constants.
///
/// These are calibrated values, not derived ones; the feel of the hero
/// section depends on them staying exactly as tuned.
// Particle pool
pub const PARTICLE_COUNT: usize = 75;
pub const MAX_INITIAL_SPEED: f32 = 0.19; // per axis, units per frame
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_MAX: f32 = 2.0;

// Pointer repulsion field: strongest at the pointer, zero at the field edge
pub const REPULSION_RADIUS: f32 = 160.0;
pub const FORCE_CONSTANT: f32 = 0.011;

// Per-axis velocity damping applied every frame (drag)
pub const VELOCITY_DAMPING: f32 = 0.99;

// Maximum pairwise distance at which two particles are linked
pub const CONNECT_DISTANCE: f32 = 130.0;

// Cursor trail spring presets
pub const DOT_STIFFNESS: f32 = 800.0; // near-instant tracking
pub const DOT_DAMPING: f32 = 40.0;
pub const RING_STIFFNESS: f32 = 100.0; // visible lag
pub const RING_DAMPING: f32 = 15.0;

// Springs are seeded here so the trail flies in from off-screen on mount
pub const SPRING_SEED: [f32; 2] = [-100.0, -100.0];
