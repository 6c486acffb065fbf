/// Platform-agnostic input events the host forwards to the animator.
///
/// # Example
///
/// ```ignore
/// animator.handle_input(InputEvent::PointerMoved { x: 100.0, y: 200.0 });
/// animator.handle_input(InputEvent::Resized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a client-space position (same space as the
    /// container's bounding rect).
    PointerMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// The window or container changed size; the animator re-reads the
    /// container's client size.
    Resized,
}
