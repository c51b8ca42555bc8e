//! Store configuration

use dragmodal_geometry::{ResizeLimits, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::ModalResult;

/// Settings for a [`crate::ModalStore`]
///
/// Every field is optional in JSON:
///
/// ```json
/// { "limits": { "minWidth": 240 }, "viewport": { "width": 1280, "height": 720 } }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Minimum modal dimensions for resize
    pub limits: ResizeLimits,
    /// Initial viewport; when absent the store's viewport source is asked
    pub viewport: Option<Viewport>,
}

impl StoreConfig {
    /// Parse configuration from JSON
    pub fn from_json(json: &str) -> ModalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
