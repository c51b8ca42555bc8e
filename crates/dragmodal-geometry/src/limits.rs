//! Minimum modal dimensions

use serde::{Deserialize, Serialize};

use crate::clamp::clamp;
use crate::{Size, Vec2, Viewport};

/// Smallest width or height a modal may be resized to
pub const MIN_MODAL_SIZE: f32 = 200.0;

/// Lower limits applied by resize operations
///
/// The upper limit is never configured here: it always comes from the
/// viewport edge minus the modal's position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeLimits {
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            min_width: MIN_MODAL_SIZE,
            min_height: MIN_MODAL_SIZE,
        }
    }
}

impl ResizeLimits {
    /// Create limits with explicit minimums
    pub const fn new(min_width: f32, min_height: f32) -> Self {
        Self {
            min_width,
            min_height,
        }
    }

    /// Clamp a requested size for a modal whose corner sits at `position`
    ///
    /// If the space left before the viewport edge is smaller than the
    /// minimum, the minimum wins.
    pub fn clamp(&self, viewport: Viewport, position: Vec2, size: Size) -> Size {
        Size::new(
            clamp(self.min_width, viewport.width - position.x, size.width),
            clamp(self.min_height, viewport.height - position.y, size.height),
        )
    }
}
