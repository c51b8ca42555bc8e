//! Actions accepted by the modal reducer
//!
//! [`Action`] is a closed enum with one variant per transition. On the
//! wire it is a tagged JSON object using camelCase names:
//!
//! ```json
//! { "type": "drag", "id": "settings", "x": 120, "y": 80 }
//! { "type": "updateMaxPosition", "id": "settings", "value": { "x": 500 } }
//! { "type": "windowResize", "size": { "width": 1280, "height": 720 } }
//! ```
//!
//! [`Action::from_json`] rejects tags outside the table with
//! [`ModalError::UnknownAction`] rather than ignoring them.

use dragmodal_geometry::{Bound, BoundUpdate, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::{ModalError, ModalResult};
use crate::modal::MountOptions;
use crate::types::ModalId;

/// An intent to change modal state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Create or overwrite a modal's geometry and raise it
    Mount {
        id: ModalId,
        #[serde(default, rename = "initialState", alias = "intialState")]
        options: MountOptions,
    },
    /// Remove a modal entirely
    Unmount { id: ModalId },
    /// Make a modal visible, re-clamp it and raise it
    #[serde(rename_all = "camelCase")]
    Show {
        id: ModalId,
        #[serde(default)]
        min_position: Bound,
        #[serde(default)]
        max_position: Bound,
    },
    /// Hide a modal without touching its geometry
    Hide { id: ModalId },
    /// Bring a modal to the front
    Focus { id: ModalId },
    /// Move a modal to a requested position
    #[serde(rename_all = "camelCase")]
    Drag {
        id: ModalId,
        x: f32,
        y: f32,
        #[serde(default)]
        min_position: Bound,
        #[serde(default)]
        max_position: Bound,
    },
    /// Resize a modal whose corner sits at `x, y`
    Resize {
        id: ModalId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Partially update the stored lower bound
    UpdateMinPosition { id: ModalId, value: BoundUpdate },
    /// Partially update the stored upper bound
    UpdateMaxPosition { id: ModalId, value: BoundUpdate },
    /// The owning window changed size
    WindowResize { size: Viewport },
}

impl Action {
    /// Every wire tag the reducer understands
    pub const KINDS: &'static [&'static str] = &[
        "mount",
        "unmount",
        "show",
        "hide",
        "focus",
        "drag",
        "resize",
        "updateMinPosition",
        "updateMaxPosition",
        "windowResize",
    ];

    /// Wire tag of this action
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Mount { .. } => "mount",
            Action::Unmount { .. } => "unmount",
            Action::Show { .. } => "show",
            Action::Hide { .. } => "hide",
            Action::Focus { .. } => "focus",
            Action::Drag { .. } => "drag",
            Action::Resize { .. } => "resize",
            Action::UpdateMinPosition { .. } => "updateMinPosition",
            Action::UpdateMaxPosition { .. } => "updateMaxPosition",
            Action::WindowResize { .. } => "windowResize",
        }
    }

    /// Modal addressed by this action; `None` for viewport-wide actions
    pub fn id(&self) -> Option<&ModalId> {
        match self {
            Action::Mount { id, .. }
            | Action::Unmount { id }
            | Action::Show { id, .. }
            | Action::Hide { id }
            | Action::Focus { id }
            | Action::Drag { id, .. }
            | Action::Resize { id, .. }
            | Action::UpdateMinPosition { id, .. }
            | Action::UpdateMaxPosition { id, .. } => Some(id),
            Action::WindowResize { .. } => None,
        }
    }

    /// Parse a wire-level action
    pub fn from_json(json: &str) -> ModalResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ModalError::MalformedAction(e.to_string()))?;

        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| ModalError::MalformedAction("missing `type` tag".to_string()))?;
        if !Self::KINDS.contains(&kind) {
            return Err(ModalError::UnknownAction(kind.to_string()));
        }

        serde_json::from_value(value).map_err(|e| ModalError::MalformedAction(e.to_string()))
    }

    /// Encode as a wire-level action
    pub fn to_json(&self) -> ModalResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn mount(id: impl Into<ModalId>, options: MountOptions) -> Self {
        Action::Mount {
            id: id.into(),
            options,
        }
    }

    pub fn unmount(id: impl Into<ModalId>) -> Self {
        Action::Unmount { id: id.into() }
    }

    pub fn show(id: impl Into<ModalId>) -> Self {
        Action::Show {
            id: id.into(),
            min_position: Bound::UNBOUNDED,
            max_position: Bound::UNBOUNDED,
        }
    }

    pub fn hide(id: impl Into<ModalId>) -> Self {
        Action::Hide { id: id.into() }
    }

    pub fn focus(id: impl Into<ModalId>) -> Self {
        Action::Focus { id: id.into() }
    }

    pub fn drag(id: impl Into<ModalId>, x: f32, y: f32) -> Self {
        Action::Drag {
            id: id.into(),
            x,
            y,
            min_position: Bound::UNBOUNDED,
            max_position: Bound::UNBOUNDED,
        }
    }

    pub fn resize(id: impl Into<ModalId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Action::Resize {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn update_min_position(id: impl Into<ModalId>, value: BoundUpdate) -> Self {
        Action::UpdateMinPosition {
            id: id.into(),
            value,
        }
    }

    pub fn update_max_position(id: impl Into<ModalId>, value: BoundUpdate) -> Self {
        Action::UpdateMaxPosition {
            id: id.into(),
            value,
        }
    }

    pub fn window_resize(width: f32, height: f32) -> Self {
        Action::WindowResize {
            size: Viewport::new(width, height),
        }
    }
}
