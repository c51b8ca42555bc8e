//! Aggregate state of all modals
//!
//! [`ModalsState`] is the single root the reducer transitions. It owns the
//! viewport, the modal map and the z-index counter. Hosts create one per
//! session and only ever replace it with the reducer's output.

use std::collections::BTreeMap;

use dragmodal_geometry::Viewport;
use serde::{Deserialize, Serialize};

use crate::error::{ModalError, ModalResult};
use crate::modal::{ModalState, MountOptions};
use crate::types::{ModalId, ZIndex};

/// State of all modals sharing one viewport
///
/// Invariant: `max_z_index` is at least every modal's `z_index` and never
/// decreases across transitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalsState {
    /// Highest z-index ever assigned
    pub max_z_index: ZIndex,
    /// Current viewport
    pub window_size: Viewport,
    /// Mounted modals by ID
    pub modals: BTreeMap<ModalId, ModalState>,
}

impl ModalsState {
    /// Empty state for a viewport of the given size
    pub fn new(window_size: Viewport) -> Self {
        Self {
            max_z_index: 0,
            window_size,
            modals: BTreeMap::new(),
        }
    }

    /// Get a mounted modal
    pub fn modal(&self, id: &str) -> Option<&ModalState> {
        self.modals.get(id)
    }

    /// Get a mounted modal, or the "not mounted" state seeded from `options`
    pub fn modal_or_initial(&self, id: &str, options: &MountOptions) -> ModalState {
        self.modal(id)
            .cloned()
            .unwrap_or_else(|| options.initial_state())
    }

    /// Check whether a modal is mounted
    pub fn contains(&self, id: &str) -> bool {
        self.modals.contains_key(id)
    }

    /// Number of mounted modals
    pub fn len(&self) -> usize {
        self.modals.len()
    }

    /// True if no modal is mounted
    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }

    /// Visible modals ordered bottom to top
    ///
    /// Equal z-indices fall back to ID order so the result is stable.
    pub fn visible_by_z(&self) -> Vec<(&ModalId, &ModalState)> {
        let mut visible: Vec<_> = self.modals.iter().filter(|(_, m)| m.visible).collect();
        visible.sort_by_key(|(_, m)| m.z_index);
        visible
    }

    /// The visible modal drawn on top, if any
    pub fn topmost(&self) -> Option<&ModalId> {
        self.visible_by_z().last().map(|(id, _)| *id)
    }

    pub(crate) fn require(&self, id: &ModalId) -> ModalResult<&ModalState> {
        self.modals
            .get(id)
            .ok_or_else(|| ModalError::UnknownModal(id.clone()))
    }

    pub(crate) fn require_mut(&mut self, id: &ModalId) -> ModalResult<&mut ModalState> {
        self.modals
            .get_mut(id)
            .ok_or_else(|| ModalError::UnknownModal(id.clone()))
    }

    /// Allocate a fresh top z-index unconditionally
    pub(crate) fn bump_z_index(&mut self) -> ZIndex {
        self.max_z_index += 1;
        self.max_z_index
    }

    /// Z-index for raising a modal currently at `current`
    ///
    /// A modal already at the top keeps its value and the counter does not
    /// move, so a stream of drag events on the active modal is free.
    pub(crate) fn raise_z_index(&mut self, current: ZIndex) -> ZIndex {
        if current == self.max_z_index {
            current
        } else {
            self.bump_z_index()
        }
    }
}
