//! Pointer-reactive interpolation engine.
//!
//! Entities carry a target and a current value per channel. Input bindings
//! move targets, the scheduler chases them with exponential smoothing once per
//! frame, and per-kind publishers turn the result into style writes. Nothing
//! here touches a browser; the host supplies a [`Surface`].

pub mod binding;
pub mod capability;
pub mod clock;
pub mod constants;
pub mod engine;
pub mod error;
pub mod params;
pub mod publish;
pub mod registry;
pub mod scheduler;
pub mod smoothing;
pub mod tasks;

pub use binding::*;
pub use capability::*;
pub use engine::*;
pub use error::*;
pub use params::*;
pub use publish::*;
pub use registry::*;
pub use scheduler::*;
pub use tasks::*;
