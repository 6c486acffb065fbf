//! Time-driven animation of the blob scene.
//!
//! - [`phase`]: the cyclic [`BreakPhase`] state machine and its
//!   [`AnimationClock`]
//! - [`choreography`]: the pure visibility/opacity/scale table
//! - [`morph`]: sinusoidal vertex displacement
//! - [`motion`]: rigid motion of the blob, satellites, and camera

pub mod choreography;
pub mod morph;
pub mod motion;
pub mod phase;

pub use choreography::{Choreography, Presence};
pub use morph::MorphField;
pub use phase::{phase_progress, AnimationClock, BreakPhase};
