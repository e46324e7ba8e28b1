//! Publishers turn an entity's numeric state into style writes.
//!
//! The host applies each [`StyleWrite`] to the element behind the handle;
//! publishers never see host objects.

use crate::constants::{LIFT_SCALE_DIVISOR, LIFT_SCALE_GAIN, TILT_PERSPECTIVE_PX};
use crate::params::{CURSOR_X, CURSOR_Y, TILT_LIFT, TILT_X, TILT_Y};
use crate::registry::{EntityHandle, EntityView};
use fnv::FnvHashSet;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum StyleWrite {
    /// Inline `transform` value.
    Transform(String),
    /// Remove the inline transform so the stylesheet takes over.
    ClearTransform,
    /// Inline `opacity` value.
    Opacity(&'static str),
}

pub type StyleWrites = SmallVec<[StyleWrite; 2]>;

/// Per-kind publish callback driven by the scheduler.
pub trait Publish {
    /// Called after every smoothing step while the entity is active.
    fn publish(&mut self, view: &EntityView<'_>, out: &mut StyleWrites);
    /// Called once when the entity settles, right before it is parked.
    fn rest(&mut self, view: &EntityView<'_>, out: &mut StyleWrites);
}

#[inline]
pub fn follower_transform(x: f32, y: f32) -> String {
    format!("translate({:.2}px, {:.2}px) translate(-50%, -50%)", x, y)
}

/// Scale-up that grows with lift magnitude (|lift| 10 -> 1.02).
#[inline]
pub fn lift_scale(lift: f32) -> f32 {
    1.0 + (lift.abs() / LIFT_SCALE_DIVISOR) * LIFT_SCALE_GAIN
}

pub fn tilt_transform(rot_x: f32, rot_y: f32, lift: f32) -> String {
    let scale = lift_scale(lift);
    format!(
        "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) translateY({:.2}px) scale3d({:.3}, {:.3}, 1)",
        TILT_PERSPECTIVE_PX, rot_x, rot_y, lift, scale, scale
    )
}

/// Positions the follower's center on the smoothed pointer and fades it in
/// once, on the first frame after a pointer position was seen.
#[derive(Debug, Default)]
pub struct FollowerPublisher {
    revealed: FnvHashSet<EntityHandle>,
}

impl FollowerPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, handle: EntityHandle) -> bool {
        self.revealed.contains(&handle)
    }
}

impl Publish for FollowerPublisher {
    fn publish(&mut self, view: &EntityView<'_>, out: &mut StyleWrites) {
        out.push(StyleWrite::Transform(follower_transform(
            view.current(CURSOR_X),
            view.current(CURSOR_Y),
        )));
        if view.meta().ever_shown && self.revealed.insert(view.handle) {
            out.push(StyleWrite::Opacity("1"));
        }
    }

    // The follower stays where the pointer stopped.
    fn rest(&mut self, view: &EntityView<'_>, out: &mut StyleWrites) {
        out.push(StyleWrite::Transform(follower_transform(
            view.current(CURSOR_X),
            view.current(CURSOR_Y),
        )));
    }
}

/// Perspective tilt with lift and a small scale-up; cleared at rest.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiltPublisher;

impl Publish for TiltPublisher {
    fn publish(&mut self, view: &EntityView<'_>, out: &mut StyleWrites) {
        out.push(StyleWrite::Transform(tilt_transform(
            view.current(TILT_X),
            view.current(TILT_Y),
            view.current(TILT_LIFT),
        )));
    }

    fn rest(&mut self, _view: &EntityView<'_>, out: &mut StyleWrites) {
        out.push(StyleWrite::ClearTransform);
    }
}
