use glam::Vec2;

/// Axis-aligned rectangle in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Rect anchored at the origin.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Last known pointer position, normalized to `[-1, 1]` on both axes with
/// `+y` up.
///
/// Written by input events and read by the next frame; last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    position: Vec2,
}

impl PointerState {
    /// Pointer at the center of the container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a client-space position relative to `rect`.
    ///
    /// A degenerate rect leaves the previous position untouched.
    pub fn handle_move(&mut self, x: f32, y: f32, rect: Rect) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.position = Vec2::new(
            ((x - rect.left) / rect.width) * 2.0 - 1.0,
            -((y - rect.top) / rect.height) * 2.0 + 1.0,
        );
    }

    /// Normalized position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}
