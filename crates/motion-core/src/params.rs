use crate::binding::TiltBinding;
use crate::constants::*;
use crate::registry::{Axis, KindSpec};

pub const CURSOR_AXES: &[&str] = &["x", "y"];
pub const CURSOR_X: Axis = Axis(0);
pub const CURSOR_Y: Axis = Axis(1);

pub const TILT_AXES: &[&str] = &["x", "y", "lift"];
/// Rotation about the horizontal axis, degrees.
pub const TILT_X: Axis = Axis(0);
/// Rotation about the vertical axis, degrees.
pub const TILT_Y: Axis = Axis(1);
/// Vertical offset, pixels.
pub const TILT_LIFT: Axis = Axis(2);

/// Tunables for both effects. `Default` carries the site's reference feel.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub cursor_smoothing: f32,
    pub tilt_smoothing: f32,
    pub tilt_max_deg: f32,
    pub tilt_lift_px: f32,
    pub settle_epsilon: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            cursor_smoothing: CURSOR_SMOOTHING,
            tilt_smoothing: TILT_SMOOTHING,
            tilt_max_deg: TILT_MAX_DEG,
            tilt_lift_px: TILT_LIFT_PX,
            settle_epsilon: SETTLE_EPSILON,
        }
    }
}

impl MotionParams {
    pub fn cursor_spec(&self) -> KindSpec {
        KindSpec {
            name: "cursor",
            axes: CURSOR_AXES,
            smoothing: self.cursor_smoothing,
            settle_epsilon: self.settle_epsilon,
        }
    }

    pub fn tilt_spec(&self) -> KindSpec {
        KindSpec {
            name: "tilt",
            axes: TILT_AXES,
            smoothing: self.tilt_smoothing,
            settle_epsilon: self.settle_epsilon,
        }
    }

    pub fn tilt_binding(&self) -> TiltBinding {
        TiltBinding {
            max_tilt_deg: self.tilt_max_deg,
            lift_px: self.tilt_lift_px,
        }
    }
}
