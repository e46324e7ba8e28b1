#![allow(dead_code)]

use motion_core::{EntityHandle, StyleWrite, Surface};
use std::collections::HashSet;

/// Surface double that records every write and can drop elements.
#[derive(Default)]
pub struct RecordingSurface {
    pub writes: Vec<(EntityHandle, StyleWrite)>,
    pub gone: HashSet<EntityHandle>,
}

impl RecordingSurface {
    pub fn writes_for(&self, handle: EntityHandle) -> Vec<&StyleWrite> {
        self.writes
            .iter()
            .filter(|(h, _)| *h == handle)
            .map(|(_, w)| w)
            .collect()
    }

    pub fn remove(&mut self, handle: EntityHandle) {
        self.gone.insert(handle);
    }
}

impl Surface for RecordingSurface {
    fn is_attached(&self, handle: EntityHandle) -> bool {
        !self.gone.contains(&handle)
    }

    fn write(&mut self, handle: EntityHandle, write: &StyleWrite) {
        self.writes.push((handle, write.clone()));
    }
}

pub fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}
