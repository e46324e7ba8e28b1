/// Motion tuning constants.
///
/// These express the intended feel of each effect (smoothing factors, tilt
/// range, lift) and keep magic numbers out of bindings and publishers.
use std::time::Duration;

// Settle threshold shared by both kinds (absolute distance to target)
pub const SETTLE_EPSILON: f32 = 0.01;

// Cursor follower
pub const CURSOR_SMOOTHING: f32 = 0.12; // per-frame fraction of the gap closed

// Card tilt
pub const TILT_SMOOTHING: f32 = 0.1; // softer, floating response
pub const TILT_MAX_DEG: f32 = 5.0; // max rotation about either axis
pub const TILT_LIFT_PX: f32 = -10.0; // negative lifts the card up
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Lift -> scale mapping: scale = 1 + |lift| / LIFT_SCALE_DIVISOR * LIFT_SCALE_GAIN
pub const LIFT_SCALE_DIVISOR: f32 = 100.0;
pub const LIFT_SCALE_GAIN: f32 = 0.2; // |lift| 10 -> 1.02

// Channel storage is inline up to this many axes per kind
pub const MAX_AXES: usize = 4;

// Periodic page tasks
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1); // catches the minute change
pub const CLOCK_FLIP_MS: i32 = 500; // matches the CSS flip duration
pub const LOGO_SWAP_PERIOD: Duration = Duration::from_secs(8);
