//! Boundaries to the host environment
//!
//! The reducer never queries the environment. Viewport size and modal IDs
//! come in through these traits so hosts (and tests) decide where they
//! originate.

use std::cell::Cell;
use std::rc::Rc;

use dragmodal_geometry::Viewport;

use crate::types::ModalId;

/// Supplies the current viewport size on demand
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl<F> ViewportSource for F
where
    F: Fn() -> Viewport,
{
    fn viewport(&self) -> Viewport {
        self()
    }
}

/// Viewport that never changes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedViewport(pub Viewport);

impl ViewportSource for FixedViewport {
    fn viewport(&self) -> Viewport {
        self.0
    }
}

/// Viewport handle shared between a host's resize listener and a store
///
/// Clones point at the same cell; `set` on one is seen by all.
#[derive(Clone, Debug, Default)]
pub struct SharedViewport(Rc<Cell<Viewport>>);

impl SharedViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self(Rc::new(Cell::new(viewport)))
    }

    /// Record a new window size
    pub fn set(&self, viewport: Viewport) {
        self.0.set(viewport);
    }
}

impl ViewportSource for SharedViewport {
    fn viewport(&self) -> Viewport {
        self.0.get()
    }
}

/// Supplies process-unique modal identifiers
pub trait IdSource {
    fn next_id(&mut self) -> ModalId;
}

/// Counter-based IDs: `modal-1`, `modal-2`, ...
///
/// IDs are unique per generator; hosts should keep one per process.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::with_prefix("modal")
    }
}

impl SequentialIds {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ModalId {
        let id = ModalId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
