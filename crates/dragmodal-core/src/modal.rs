//! Per-modal state
//!
//! A [`ModalState`] is what the rendering layer reads for one modal:
//! position, optional size, stacking order, visibility and the bounds its
//! top-left corner must respect.

use dragmodal_geometry::{Bound, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::types::ZIndex;

/// State of a single modal
///
/// The `Default` value is the "not mounted" state: origin, no size,
/// z-index 0, hidden and unbounded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    /// Left edge in viewport coordinates
    pub x: f32,
    /// Top edge in viewport coordinates
    pub y: f32,
    /// Explicit width, or `None` for natural size
    pub width: Option<f32>,
    /// Explicit height, or `None` for natural size
    pub height: Option<f32>,
    /// Stacking order
    pub z_index: ZIndex,
    /// Hidden modals are skipped by viewport reflow
    pub visible: bool,
    /// Lower limit for the top-left corner
    #[serde(default)]
    pub min_position: Bound,
    /// Upper limit for the top-left corner
    #[serde(default)]
    pub max_position: Bound,
}

impl ModalState {
    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Size used for clamping; a missing dimension counts as 0
    pub fn clamp_size(&self) -> Size {
        Size::new(self.width.unwrap_or(0.0), self.height.unwrap_or(0.0))
    }

    /// Explicit size, if both dimensions are known
    pub fn size(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Size::new(width, height)),
            _ => None,
        }
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// Initial geometry supplied when a modal mounts
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MountOptions {
    pub initial_width: Option<f32>,
    pub initial_height: Option<f32>,
    pub initial_x: Option<f32>,
    pub initial_y: Option<f32>,
}

impl MountOptions {
    /// Options with an explicit initial size and the default position
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            initial_width: Some(width),
            initial_height: Some(height),
            ..Self::default()
        }
    }

    /// Set the initial position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.initial_x = Some(x);
        self.initial_y = Some(y);
        self
    }

    /// Whether a resizable modal mounted with these options has a size to
    /// start from. The reducer does not enforce this.
    pub fn supports_resize(&self) -> bool {
        self.initial_width.is_some() && self.initial_height.is_some()
    }

    /// Write the initial geometry into `modal`, leaving other fields alone
    pub(crate) fn apply_to(&self, modal: &mut ModalState) {
        modal.x = self.initial_x.unwrap_or(0.0);
        modal.y = self.initial_y.unwrap_or(0.0);
        modal.width = self.initial_width;
        modal.height = self.initial_height;
    }

    /// "Not mounted" state seeded with this initial geometry
    pub fn initial_state(&self) -> ModalState {
        let mut modal = ModalState::default();
        self.apply_to(&mut modal);
        modal
    }
}
