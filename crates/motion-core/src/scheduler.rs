//! One frame loop body for every entity kind.
//!
//! The host calls [`Scheduler::tick`] once per display refresh. Smoothing is
//! applied per tick with no delta-time correction, so motion runs faster on
//! high refresh-rate displays.

use crate::publish::{Publish, StyleWrite, StyleWrites};
use crate::registry::{EntityHandle, KindId, Registry};

/// Where style writes land. Implemented by the host.
pub trait Surface {
    /// False once the element behind `handle` is gone from the document.
    fn is_attached(&self, handle: EntityHandle) -> bool;
    fn write(&mut self, handle: EntityHandle, write: &StyleWrite);
}

/// Counters for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub advanced: usize,
    pub settled: usize,
    pub detached: usize,
}

#[derive(Default)]
pub struct Scheduler {
    publishers: Vec<Option<Box<dyn Publish>>>,
    scratch: StyleWrites,
    frames: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the publish callback for `kind`, replacing any previous one.
    pub fn attach(&mut self, kind: KindId, publisher: Box<dyn Publish>) {
        let i = kind.index();
        if self.publishers.len() <= i {
            self.publishers.resize_with(i + 1, || None);
        }
        self.publishers[i] = Some(publisher);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick(&mut self, registry: &mut Registry, surface: &mut dyn Surface) -> TickReport {
        self.frames += 1;
        let mut report = TickReport::default();
        for handle in registry.handles() {
            if !registry.is_active(handle) {
                continue;
            }
            if !surface.is_attached(handle) {
                registry.detach(handle);
                report.detached += 1;
                continue;
            }
            let Some(settled) = registry.advance(handle) else {
                continue;
            };
            report.advanced += 1;
            // kinds without a publisher still settle and park
            let publisher = registry.get(handle).and_then(|e| {
                self.publishers
                    .get_mut(e.kind().index())
                    .and_then(Option::as_mut)
            });
            if let (Some(view), Some(publisher)) = (registry.view(handle), publisher) {
                self.scratch.clear();
                publisher.publish(&view, &mut self.scratch);
                if settled {
                    publisher.rest(&view, &mut self.scratch);
                }
                for write in self.scratch.drain(..) {
                    surface.write(handle, &write);
                }
            }
            if settled {
                _ = registry.set_active(handle, false);
                report.settled += 1;
                log::trace!("[scheduler] #{} settled", handle.index());
            }
        }
        report
    }
}
