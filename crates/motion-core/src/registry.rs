//! Dense arena of tracked entities.
//!
//! Each entity holds a target and a current value per channel. Bindings write
//! targets through the public API; only the scheduler advances `current`
//! (through the crate-private `Registry::advance`). Handles are plain
//! indices into the arena, and every operation on an unknown or detached
//! handle is a no-op.

use crate::constants::MAX_AXES;
use crate::error::MotionError;
use crate::smoothing;
use smallvec::{smallvec, SmallVec};

/// Opaque reference to a registered entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(u32);

impl EntityHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifies a kind defined with [`Registry::define_kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KindId(u16);

impl KindId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a channel inside its kind's channel list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Axis(pub u8);

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shape and tuning shared by every entity of one kind.
#[derive(Clone, Debug, PartialEq)]
pub struct KindSpec {
    pub name: &'static str,
    pub axes: &'static [&'static str],
    pub smoothing: f32,
    pub settle_epsilon: f32,
}

impl KindSpec {
    /// Look up a channel by name.
    pub fn axis(&self, name: &str) -> Option<Axis> {
        self.axes
            .iter()
            .position(|a| *a == name)
            .map(|i| Axis(i as u8))
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if self.axes.is_empty() {
            return Err(MotionError::NoChannels(self.name));
        }
        if self.axes.len() > MAX_AXES {
            return Err(MotionError::TooManyChannels {
                kind: self.name,
                count: self.axes.len(),
                max: MAX_AXES,
            });
        }
        for (i, axis) in self.axes.iter().enumerate() {
            if self.axes[..i].contains(axis) {
                return Err(MotionError::DuplicateChannel {
                    kind: self.name,
                    axis: *axis,
                });
            }
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(MotionError::InvalidSmoothing {
                kind: self.name,
                factor: self.smoothing,
            });
        }
        if !(self.settle_epsilon > 0.0 && self.settle_epsilon.is_finite()) {
            return Err(MotionError::InvalidEpsilon {
                kind: self.name,
                epsilon: self.settle_epsilon,
            });
        }
        Ok(())
    }
}

/// Kind-specific auxiliary flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Meta {
    /// Pointer is over the element (tilt cards).
    pub hovering: bool,
    /// A pointer position has been seen at least once (cursor follower).
    pub ever_shown: bool,
    /// Backing element left the document; the entity is frozen.
    pub detached: bool,
}

#[derive(Clone, Debug)]
pub struct TrackedEntity {
    kind: KindId,
    current: SmallVec<[f32; MAX_AXES]>,
    target: SmallVec<[f32; MAX_AXES]>,
    active: bool,
    meta: Meta,
}

impl TrackedEntity {
    pub fn kind(&self) -> KindId {
        self.kind
    }
    pub fn current(&self) -> &[f32] {
        &self.current
    }
    pub fn target(&self) -> &[f32] {
        &self.target
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn meta(&self) -> Meta {
        self.meta
    }

    /// Not hovered and every channel within `epsilon` of its target.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        !self.meta.hovering
            && self
                .current
                .iter()
                .zip(&self.target)
                .all(|(c, t)| (t - c).abs() < epsilon)
    }
}

/// Read-only snapshot handed to publishers.
#[derive(Clone, Copy, Debug)]
pub struct EntityView<'a> {
    pub handle: EntityHandle,
    pub spec: &'a KindSpec,
    pub entity: &'a TrackedEntity,
}

impl EntityView<'_> {
    #[inline]
    pub fn current(&self, axis: Axis) -> f32 {
        self.entity.current.get(axis.index()).copied().unwrap_or(0.0)
    }
    #[inline]
    pub fn target(&self, axis: Axis) -> f32 {
        self.entity.target.get(axis.index()).copied().unwrap_or(0.0)
    }
    #[inline]
    pub fn meta(&self) -> Meta {
        self.entity.meta
    }
}

#[derive(Default)]
pub struct Registry {
    kinds: Vec<KindSpec>,
    entities: Vec<TrackedEntity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_kind(&mut self, spec: KindSpec) -> Result<KindId, MotionError> {
        spec.validate()?;
        let id = KindId(self.kinds.len() as u16);
        log::debug!(
            "[registry] kind `{}` axes={:?} smoothing={} epsilon={}",
            spec.name,
            spec.axes,
            spec.smoothing,
            spec.settle_epsilon
        );
        self.kinds.push(spec);
        Ok(id)
    }

    pub fn kind(&self, id: KindId) -> Option<&KindSpec> {
        self.kinds.get(id.index())
    }

    pub fn kind_count(&self) -> usize {
        self.kinds.len()
    }

    /// Allocate a resting entity of `kind` with every channel at zero.
    ///
    /// Returns `None` when `kind` was not defined on this registry.
    pub fn register(&mut self, kind: KindId) -> Option<EntityHandle> {
        let spec = self.kinds.get(kind.index())?;
        let n = spec.axes.len();
        let handle = EntityHandle(self.entities.len() as u32);
        self.entities.push(TrackedEntity {
            kind,
            current: smallvec![0.0; n],
            target: smallvec![0.0; n],
            active: false,
            meta: Meta::default(),
        });
        log::debug!("[registry] {} #{}", spec.name, handle.index());
        Some(handle)
    }

    #[inline]
    fn live(&self, handle: EntityHandle) -> Option<&TrackedEntity> {
        self.entities
            .get(handle.index())
            .filter(|e| !e.meta.detached)
    }

    #[inline]
    fn live_mut(&mut self, handle: EntityHandle) -> Option<&mut TrackedEntity> {
        self.entities
            .get_mut(handle.index())
            .filter(|e| !e.meta.detached)
    }

    /// Set one channel's target. A changed target re-arms the entity.
    ///
    /// Returns false for unknown/detached handles, unknown axes and
    /// non-finite values, none of which touch the entity.
    pub fn set_target(&mut self, handle: EntityHandle, axis: Axis, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        let Some(entity) = self.live_mut(handle) else {
            return false;
        };
        let Some(slot) = entity.target.get_mut(axis.index()) else {
            return false;
        };
        if *slot != value {
            *slot = value;
            entity.active = true;
        }
        true
    }

    pub fn get_target(&self, handle: EntityHandle, axis: Axis) -> Option<f32> {
        self.live(handle)?.target.get(axis.index()).copied()
    }

    pub fn get_current(&self, handle: EntityHandle, axis: Axis) -> Option<f32> {
        self.live(handle)?.current.get(axis.index()).copied()
    }

    pub fn set_active(&mut self, handle: EntityHandle, active: bool) -> bool {
        match self.live_mut(handle) {
            Some(e) => {
                e.active = active;
                true
            }
            None => false,
        }
    }

    /// Hover state; entering also arms the entity.
    pub fn set_hovering(&mut self, handle: EntityHandle, hovering: bool) -> bool {
        match self.live_mut(handle) {
            Some(e) => {
                e.meta.hovering = hovering;
                if hovering {
                    e.active = true;
                }
                true
            }
            None => false,
        }
    }

    /// Flip the one-shot `ever_shown` flag. True only on the call that flips it.
    pub fn mark_shown(&mut self, handle: EntityHandle) -> bool {
        match self.live_mut(handle) {
            Some(e) if !e.meta.ever_shown => {
                e.meta.ever_shown = true;
                true
            }
            _ => false,
        }
    }

    /// Freeze an entity whose element is gone. Idempotent.
    pub fn detach(&mut self, handle: EntityHandle) {
        if let Some(e) = self.live_mut(handle) {
            e.meta.detached = true;
            e.meta.hovering = false;
            e.active = false;
            log::warn!("[registry] #{} lost its element; parked", handle.index());
        }
    }

    pub fn meta(&self, handle: EntityHandle) -> Option<Meta> {
        self.entities.get(handle.index()).map(|e| e.meta)
    }

    pub fn is_active(&self, handle: EntityHandle) -> bool {
        self.live(handle).is_some_and(|e| e.active)
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&TrackedEntity> {
        self.entities.get(handle.index())
    }

    pub fn view(&self, handle: EntityHandle) -> Option<EntityView<'_>> {
        let entity = self.entities.get(handle.index())?;
        let spec = self.kinds.get(entity.kind.index())?;
        Some(EntityView {
            handle,
            spec,
            entity,
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.entities.iter().filter(|e| e.active).count()
    }

    pub fn handles(&self) -> impl Iterator<Item = EntityHandle> {
        (0..self.entities.len() as u32).map(EntityHandle)
    }

    /// Smooth every channel of one entity one step toward its target and
    /// report whether it is now settled.
    pub(crate) fn advance(&mut self, handle: EntityHandle) -> Option<bool> {
        let entity = self.entities.get_mut(handle.index())?;
        let spec = self.kinds.get(entity.kind.index())?;
        for (c, t) in entity.current.iter_mut().zip(&entity.target) {
            *c = smoothing::step(*c, *t, spec.smoothing);
        }
        Some(entity.is_settled(spec.settle_epsilon))
    }
}
