//! Start-up capability gates.
//!
//! Both signals are read once. A signal the host could not detect is `None`
//! and counts as the value that disables its effect.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// `(pointer: fine)` matched.
    pub fine_pointer: Option<bool>,
    /// `(prefers-reduced-motion: reduce)` matched.
    pub reduced_motion: Option<bool>,
}

impl Capabilities {
    pub fn follower_enabled(&self) -> bool {
        self.fine_pointer == Some(true)
    }

    pub fn tilt_enabled(&self) -> bool {
        self.reduced_motion == Some(false)
    }

    pub fn any_motion(&self) -> bool {
        self.follower_enabled() || self.tilt_enabled()
    }
}
