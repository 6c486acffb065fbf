//! Input handling: the events a host forwards and the pointer state they
//! update.

/// Platform-agnostic input events.
pub mod event;
/// Normalized pointer tracking.
pub mod pointer;

pub use event::InputEvent;
pub use pointer::{PointerState, Rect};
