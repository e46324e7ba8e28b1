use crate::binding::{AmbientPointer, Bound, ElementIndex, PointerBinding, Rect, TiltBinding};
use crate::capability::Capabilities;
use crate::error::MotionError;
use crate::params::MotionParams;
use crate::publish::{FollowerPublisher, Publish, TiltPublisher};
use crate::registry::{EntityHandle, KindId, KindSpec, Registry};
use crate::scheduler::{Scheduler, Surface, TickReport};
use glam::Vec2;

/// Registry, scheduler and the two stock effects, gated by capabilities.
///
/// Kinds are only defined for effects the capabilities allow, so a disabled
/// effect can never register an entity or write a style.
pub struct MotionEngine {
    pub registry: Registry,
    pub scheduler: Scheduler,
    pub params: MotionParams,
    capabilities: Capabilities,
    cursor_kind: Option<KindId>,
    tilt_kind: Option<KindId>,
    follower: Option<PointerBinding>,
    tilt: TiltBinding,
    cards: ElementIndex<u32>,
}

impl MotionEngine {
    pub fn new(params: MotionParams, capabilities: Capabilities) -> Result<Self, MotionError> {
        let mut engine = Self {
            registry: Registry::new(),
            scheduler: Scheduler::new(),
            tilt: params.tilt_binding(),
            params,
            capabilities,
            cursor_kind: None,
            tilt_kind: None,
            follower: None,
            cards: ElementIndex::new(),
        };
        if capabilities.follower_enabled() {
            let spec = engine.params.cursor_spec();
            engine.cursor_kind = Some(engine.define(spec, Box::new(FollowerPublisher::new()))?);
        }
        if capabilities.tilt_enabled() {
            let spec = engine.params.tilt_spec();
            engine.tilt_kind = Some(engine.define(spec, Box::new(TiltPublisher))?);
        }
        log::info!(
            "[engine] follower={} tilt={}",
            engine.cursor_kind.is_some(),
            engine.tilt_kind.is_some()
        );
        Ok(engine)
    }

    /// Define an extra kind with its publish callback.
    pub fn define(
        &mut self,
        spec: KindSpec,
        publisher: Box<dyn Publish>,
    ) -> Result<KindId, MotionError> {
        let kind = self.registry.define_kind(spec)?;
        self.scheduler.attach(kind, publisher);
        Ok(kind)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn follower_enabled(&self) -> bool {
        self.cursor_kind.is_some()
    }

    pub fn tilt_enabled(&self) -> bool {
        self.tilt_kind.is_some()
    }

    /// Create the follower entity once. `None` when the follower is disabled.
    pub fn bind_follower(&mut self) -> Option<EntityHandle> {
        if let Some(binding) = self.follower {
            return Some(binding.handle);
        }
        let handle = self.registry.register(self.cursor_kind?)?;
        self.follower = Some(PointerBinding { handle });
        Some(handle)
    }

    pub fn follower(&self) -> Option<EntityHandle> {
        self.follower.map(|b| b.handle)
    }

    /// Bind a card by host key. `None` when tilt is disabled.
    pub fn bind_card(&mut self, key: u32) -> Option<Bound> {
        let kind = self.tilt_kind?;
        self.cards.bind(key, &mut self.registry, kind)
    }

    /// Bind a card element that may carry a `stamped` key from an earlier
    /// pass. `is_same` reports whether the element already bound under that
    /// key is this one; a copy of a bound card gets a key of its own.
    /// Returns the key to stamp along with the binding.
    pub fn bind_card_element(
        &mut self,
        stamped: Option<u32>,
        is_same: impl FnOnce(EntityHandle) -> bool,
    ) -> Option<(u32, Bound)> {
        let kind = self.tilt_kind?;
        if let Some(key) = stamped {
            match self.cards.get(&key) {
                Some(handle) if is_same(handle) => {
                    let bound = Bound {
                        handle,
                        fresh: false,
                    };
                    return Some((key, bound));
                }
                Some(_) => log::debug!("[engine] card key {} already taken; rekeying", key),
                None => {
                    let bound = self.cards.bind(key, &mut self.registry, kind)?;
                    return Some((key, bound));
                }
            }
        }
        let mut key = self.cards.len() as u32;
        while self.cards.get(&key).is_some() {
            key = key.wrapping_add(1);
        }
        let bound = self.cards.bind(key, &mut self.registry, kind)?;
        Some((key, bound))
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Document-level pointer move. Returns the ambient side channel; `None`
    /// without a follower or with a degenerate viewport.
    pub fn pointer_moved(&mut self, pointer: Vec2, viewport: Vec2) -> Option<AmbientPointer> {
        let binding = self.follower?;
        binding.on_move(&mut self.registry, pointer, viewport)
    }

    pub fn card_entered(&mut self, handle: EntityHandle) {
        self.tilt.on_enter(&mut self.registry, handle);
    }

    pub fn card_moved(&mut self, handle: EntityHandle, rect: Rect, pointer: Vec2) -> Option<Vec2> {
        self.tilt.on_move(&mut self.registry, handle, rect, pointer)
    }

    pub fn card_left(&mut self, handle: EntityHandle) {
        self.tilt.on_leave(&mut self.registry, handle);
    }

    pub fn tick(&mut self, surface: &mut dyn Surface) -> TickReport {
        self.scheduler.tick(&mut self.registry, surface)
    }

    /// Whether a frame loop has anything to drive.
    pub fn needs_frames(&self) -> bool {
        !self.registry.is_empty()
    }
}
