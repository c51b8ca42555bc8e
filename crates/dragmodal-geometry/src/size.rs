//! Size and viewport types

use serde::{Deserialize, Serialize};

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Usable window dimensions that modals are constrained to
///
/// Only a window-resize notification changes the viewport; modal actions
/// read it but never write it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a new viewport
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
