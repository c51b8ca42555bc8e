//! Error types for modal state transitions
//!
//! Every fallible operation in this crate returns [`ModalResult`]. A failed
//! transition never produces a partial state: the caller keeps the state
//! it passed in.

use crate::types::ModalId;

/// Errors that can occur while applying modal actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// The action addressed a modal that is not mounted
    UnknownModal(ModalId),

    /// A wire-level action carried a `type` tag outside the action table
    UnknownAction(String),

    /// A wire-level action had a known tag but an unusable payload
    MalformedAction(String),

    /// JSON serialization or deserialization failed
    Serialization(String),
}

impl std::fmt::Display for ModalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownModal(id) => write!(f, "unknown modal id: {}", id),
            Self::UnknownAction(kind) => write!(f, "unknown action type: {}", kind),
            Self::MalformedAction(msg) => write!(f, "malformed action: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ModalError {}

impl From<serde_json::Error> for ModalError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result type alias for modal operations
pub type ModalResult<T> = Result<T, ModalError>;
