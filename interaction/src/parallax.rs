//! Pointer-to-translation projection for decorative parallax layers.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::pointer::PointerPosition;
use crate::timing::PARALLAX_SCALE;

/// A 2D offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translation2D {
    pub dx: f64,
    pub dy: f64,
}

impl Translation2D {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Offset of a layer moving at `speed` relative to the pointer.
#[must_use]
pub fn project(pointer: PointerPosition, speed: f64) -> Translation2D {
    Translation2D { dx: pointer.x * speed * PARALLAX_SCALE, dy: pointer.y * speed * PARALLAX_SCALE }
}

/// Offset a layer should render with. While selecting, layers snap to rest
/// rather than holding a stale offset.
#[must_use]
pub fn render_offset(selecting: bool, pointer: PointerPosition, speed: f64) -> Translation2D {
    if selecting { Translation2D::ZERO } else { project(pointer, speed) }
}
