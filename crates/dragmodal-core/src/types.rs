//! Core type definitions for the modal reducer
//!
//! This module centralizes identifiers used throughout the crate.

use serde::{Deserialize, Serialize};

/// Stacking order value; higher draws on top
pub type ZIndex = u64;

/// Opaque, caller-supplied modal identifier
///
/// The reducer only compares IDs for equality. Uniqueness across the
/// process is the caller's responsibility (see [`crate::ports::IdSource`]).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(String);

impl ModalId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for ModalId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
