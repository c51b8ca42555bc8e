//! Per-axis position bounds and partial bound updates
//!
//! A [`Bound`] stores an optional limit per axis, where `None` means
//! "unconstrained, fall back to the viewport edge". Updates to a bound are
//! partial and need three states per axis, so they use [`AxisUpdate`]
//! instead of a plain `Option`:
//!
//! | Wire form        | `AxisUpdate`  | Effect on merge          |
//! |------------------|---------------|--------------------------|
//! | key omitted      | `Keep`        | previous value kept      |
//! | `null`           | `Clear`       | axis becomes unbounded   |
//! | number           | `Set(v)`      | axis becomes `v`         |

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clamp::effective_max;
use crate::{Vec2, Viewport};

/// Optional per-axis limit on a modal's top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
}

impl Bound {
    /// Bound with no limit on either axis
    pub const UNBOUNDED: Bound = Bound { x: None, y: None };

    /// Bound with a limit on both axes
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Resolve as a lower bound; missing axes default to 0
    pub fn or_zero(&self) -> Vec2 {
        Vec2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }

    /// Resolve as an upper bound against the viewport
    ///
    /// Each axis is the tighter of this bound and the viewport edge, or the
    /// viewport edge alone when the axis is unbounded.
    pub fn effective_max(&self, viewport: Viewport) -> Vec2 {
        Vec2::new(
            effective_max(self.x, viewport.width),
            effective_max(self.y, viewport.height),
        )
    }

    /// Apply a partial update in place
    pub fn merge(&mut self, update: BoundUpdate) {
        update.x.apply(&mut self.x);
        update.y.apply(&mut self.y);
    }
}

/// Edit to a single axis of a [`Bound`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AxisUpdate {
    /// Not part of this update; the previous value stays
    #[default]
    Keep,
    /// Explicitly cleared; the axis becomes unbounded
    Clear,
    /// Explicit new limit
    Set(f32),
}

impl AxisUpdate {
    /// True if this update leaves the axis untouched
    pub fn is_keep(&self) -> bool {
        matches!(self, AxisUpdate::Keep)
    }

    fn apply(self, slot: &mut Option<f32>) {
        match self {
            AxisUpdate::Keep => {}
            AxisUpdate::Clear => *slot = None,
            AxisUpdate::Set(value) => *slot = Some(value),
        }
    }
}

impl From<Option<f32>> for AxisUpdate {
    fn from(value: Option<f32>) -> Self {
        match value {
            Some(v) => AxisUpdate::Set(v),
            None => AxisUpdate::Clear,
        }
    }
}

impl Serialize for AxisUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // `Keep` fields are skipped by `BoundUpdate`; a bare one encodes as null
            AxisUpdate::Keep | AxisUpdate::Clear => serializer.serialize_none(),
            AxisUpdate::Set(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de> Deserialize<'de> for AxisUpdate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f32>::deserialize(deserializer).map(AxisUpdate::from)
    }
}

/// Partial update to a [`Bound`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundUpdate {
    #[serde(default, skip_serializing_if = "AxisUpdate::is_keep")]
    pub x: AxisUpdate,
    #[serde(default, skip_serializing_if = "AxisUpdate::is_keep")]
    pub y: AxisUpdate,
}

impl BoundUpdate {
    /// Update that sets both axes
    pub fn set(x: f32, y: f32) -> Self {
        Self {
            x: AxisUpdate::Set(x),
            y: AxisUpdate::Set(y),
        }
    }

    /// Update that clears both axes
    pub fn clear() -> Self {
        Self {
            x: AxisUpdate::Clear,
            y: AxisUpdate::Clear,
        }
    }

    /// Update touching only the x axis
    pub fn x(update: AxisUpdate) -> Self {
        Self {
            x: update,
            y: AxisUpdate::Keep,
        }
    }

    /// Update touching only the y axis
    pub fn y(update: AxisUpdate) -> Self {
        Self {
            x: AxisUpdate::Keep,
            y: update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_untouched_axis() {
        let mut bound = Bound {
            x: None,
            y: Some(100.0),
        };
        bound.merge(BoundUpdate::x(AxisUpdate::Set(500.0)));
        assert_eq!(bound, Bound::new(500.0, 100.0));
    }

    #[test]
    fn test_merge_clear_vs_keep() {
        let mut bound = Bound::new(10.0, 20.0);
        bound.merge(BoundUpdate::default());
        assert_eq!(bound, Bound::new(10.0, 20.0));

        bound.merge(BoundUpdate::y(AxisUpdate::Clear));
        assert_eq!(
            bound,
            Bound {
                x: Some(10.0),
                y: None
            }
        );
    }

    #[test]
    fn test_effective_max_uses_tighter_limit() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(
            Bound::UNBOUNDED.effective_max(viewport),
            Vec2::new(800.0, 600.0)
        );
        assert_eq!(
            Bound::new(500.0, 900.0).effective_max(viewport),
            Vec2::new(500.0, 600.0)
        );
    }

    #[test]
    fn test_zero_limit_is_a_real_limit() {
        let viewport = Viewport::new(800.0, 600.0);
        let bound = Bound {
            x: Some(0.0),
            y: None,
        };
        assert_eq!(bound.effective_max(viewport), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn test_or_zero() {
        let bound = Bound {
            x: Some(15.0),
            y: None,
        };
        assert_eq!(bound.or_zero(), Vec2::new(15.0, 0.0));
    }

    #[test]
    fn test_update_wire_forms() {
        let update: BoundUpdate = serde_json::from_str(r#"{"x": 500}"#).unwrap();
        assert_eq!(update, BoundUpdate::x(AxisUpdate::Set(500.0)));

        let update: BoundUpdate = serde_json::from_str(r#"{"x": null}"#).unwrap();
        assert_eq!(update, BoundUpdate::x(AxisUpdate::Clear));

        let update: BoundUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update, BoundUpdate::default());

        let json = serde_json::to_string(&BoundUpdate::y(AxisUpdate::Clear)).unwrap();
        assert_eq!(json, r#"{"y":null}"#);
    }
}
