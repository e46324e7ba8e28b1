//! Input bindings: translate pointer events into entity targets.
//!
//! Bindings only ever write `target`. Geometry that cannot be normalized
//! (zero-size boxes, non-finite coordinates) drops the event.

use crate::params::{CURSOR_X, CURSOR_Y, TILT_LIFT, TILT_X, TILT_Y};
use crate::registry::{EntityHandle, KindId, Registry};
use fnv::FnvHashMap;
use glam::Vec2;
use std::hash::Hash;

/// Axis-aligned box in viewport pixels (`origin` is the top-left corner).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
            || !self.origin.is_finite()
            || !self.size.is_finite()
    }
}

/// Map `pointer` into [-1, 1] on both axes about the center of `rect`.
///
/// Top-left maps to (-1, -1), bottom-right to (1, 1). Points outside the box
/// map outside the range. `None` for degenerate boxes or pointers.
#[inline]
pub fn normalize_in_rect(rect: Rect, pointer: Vec2) -> Option<Vec2> {
    if rect.is_degenerate() || !pointer.is_finite() {
        return None;
    }
    let half = rect.size * 0.5;
    let local = pointer - rect.origin;
    Some((local - half) / half)
}

/// Pointer position as a percentage of the viewport, for parallax styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientPointer {
    pub x_pct: f32,
    pub y_pct: f32,
}

#[inline]
pub fn ambient_pointer(pointer: Vec2, viewport: Vec2) -> Option<AmbientPointer> {
    if !(viewport.x > 0.0 && viewport.y > 0.0) || !pointer.is_finite() {
        return None;
    }
    let pct = pointer / viewport * 100.0;
    Some(AmbientPointer {
        x_pct: pct.x,
        y_pct: pct.y,
    })
}

/// Viewport pointer -> follower target.
#[derive(Clone, Copy, Debug)]
pub struct PointerBinding {
    pub handle: EntityHandle,
}

impl PointerBinding {
    /// Returns the ambient side channel, independent of the entity's state.
    pub fn on_move(
        &self,
        registry: &mut Registry,
        pointer: Vec2,
        viewport: Vec2,
    ) -> Option<AmbientPointer> {
        if pointer.is_finite() {
            _ = registry.set_target(self.handle, CURSOR_X, pointer.x);
            _ = registry.set_target(self.handle, CURSOR_Y, pointer.y);
            // a first move onto the resting target changes nothing, so arm here
            if registry.mark_shown(self.handle) {
                _ = registry.set_active(self.handle, true);
                log::debug!("[cursor] first pointer move; follower revealed");
            }
        }
        ambient_pointer(pointer, viewport)
    }
}

/// Hover-driven card tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltBinding {
    pub max_tilt_deg: f32,
    pub lift_px: f32,
}

impl TiltBinding {
    pub fn on_enter(&self, registry: &mut Registry, handle: EntityHandle) {
        if registry.set_hovering(handle, true) {
            _ = registry.set_target(handle, TILT_LIFT, self.lift_px);
        }
    }

    /// Aim the tilt at the pointer. Only while hovering.
    ///
    /// Returns the pointer offset from the card's top-left corner in pixels
    /// (the spotlight side channel) when the targets were updated.
    pub fn on_move(
        &self,
        registry: &mut Registry,
        handle: EntityHandle,
        rect: Rect,
        pointer: Vec2,
    ) -> Option<Vec2> {
        if !registry.meta(handle).is_some_and(|m| m.hovering && !m.detached) {
            return None;
        }
        let norm = normalize_in_rect(rect, pointer)?;
        // pointer down tips the top edge away: rotateX runs opposite to y
        _ = registry.set_target(handle, TILT_X, norm.y * -self.max_tilt_deg);
        _ = registry.set_target(handle, TILT_Y, norm.x * self.max_tilt_deg);
        Some(pointer - rect.origin)
    }

    pub fn on_leave(&self, registry: &mut Registry, handle: EntityHandle) {
        if registry.set_hovering(handle, false) {
            _ = registry.set_target(handle, TILT_X, 0.0);
            _ = registry.set_target(handle, TILT_Y, 0.0);
            _ = registry.set_target(handle, TILT_LIFT, 0.0);
        }
    }
}

/// Result of [`ElementIndex::bind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bound {
    pub handle: EntityHandle,
    /// False when the element was already bound; listeners must not be
    /// attached a second time.
    pub fresh: bool,
}

/// Host element identity -> entity handle.
///
/// Lives at the binding boundary so the registry itself never sees host
/// object identity.
#[derive(Debug)]
pub struct ElementIndex<K> {
    map: FnvHashMap<K, EntityHandle>,
}

impl<K> Default for ElementIndex<K> {
    fn default() -> Self {
        Self {
            map: FnvHashMap::default(),
        }
    }
}

impl<K: Hash + Eq> ElementIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, key: K, registry: &mut Registry, kind: KindId) -> Option<Bound> {
        if let Some(&handle) = self.map.get(&key) {
            return Some(Bound {
                handle,
                fresh: false,
            });
        }
        let handle = registry.register(kind)?;
        _ = self.map.insert(key, handle);
        Some(Bound {
            handle,
            fresh: true,
        })
    }

    pub fn get(&self, key: &K) -> Option<EntityHandle> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
