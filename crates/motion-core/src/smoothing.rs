//! First-order exponential smoothing.
//!
//! Each call closes a fixed fraction of the remaining gap, so repeated
//! application against a constant target converges monotonically without
//! overshoot. The step is per frame, not per second: the visual speed follows
//! the display refresh rate.

/// Advance `current` toward `target` by `factor` of the remaining distance.
///
/// `factor` is expected in (0, 1]; 1 snaps straight to the target.
#[inline]
pub fn step(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Number of steps needed to bring a gap of `deviation` below `epsilon`.
///
/// Returns 0 when the gap is already inside epsilon and 1 for a snapping
/// factor. Inputs outside the valid ranges yield `u32::MAX` (never settles).
pub fn ticks_to_settle(deviation: f32, factor: f32, epsilon: f32) -> u32 {
    let deviation = deviation.abs();
    if deviation < epsilon {
        return 0;
    }
    if factor >= 1.0 {
        return 1;
    }
    if !(factor > 0.0) || !(epsilon > 0.0) || !deviation.is_finite() {
        return u32::MAX;
    }
    let ratio = (f64::from(epsilon) / f64::from(deviation)).ln();
    let per_tick = (1.0 - f64::from(factor)).ln();
    (ratio / per_tick).ceil() as u32
}
