//! Modal state management for draggable, resizable overlay windows
//!
//! This crate tracks many simultaneously open modals sharing one viewport:
//! - Mount / unmount lifecycle
//! - Show, hide and focus with a total stacking order
//! - Drag and resize, clamped to the viewport and per-modal bounds
//! - Reflow of visible modals when the owning window is resized
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       ModalStore                         │
//! │  ┌──────────────┐  ┌───────────────┐  ┌──────────────┐  │
//! │  │ ModalsState  │  │ ModalReducer  │  │  listeners   │  │
//! │  │  (snapshot)  │─▶│ (pure reduce) │─▶│ (state/slice)│  │
//! │  └──────────────┘  └───────┬───────┘  └──────────────┘  │
//! │                            │ clamp_drag / clamp_resize   │
//! │                    ┌───────▼────────┐                    │
//! │                    │ dragmodal-     │                    │
//! │                    │   geometry     │                    │
//! │                    └────────────────┘                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`reduce`] / [`ModalReducer`]: the transition function
//! - [`Action`]: one variant per transition, with a JSON wire form
//! - [`ModalsState`] / [`ModalState`]: the aggregate and per-modal state
//! - [`ModalStore`]: optional host-side container and dispatch channel
//! - [`ports`]: viewport-size and ID providers
//!
//! ## Example
//!
//! ```rust
//! use dragmodal_core::{reduce, Action, ModalsState, MountOptions};
//! use dragmodal_geometry::Viewport;
//!
//! let state = ModalsState::new(Viewport::new(800.0, 600.0));
//! let state = reduce(&state, Action::mount("a", MountOptions::sized(400.0, 300.0))).unwrap();
//! let state = reduce(&state, Action::show("a")).unwrap();
//! let state = reduce(&state, Action::drag("a", 900.0, 900.0)).unwrap();
//!
//! let a = state.modal("a").unwrap();
//! assert_eq!((a.x, a.y), (400.0, 300.0));
//! assert_eq!(a.z_index, 2);
//! ```
//!
//! ## Logging
//!
//! Transitions are traced through `tracing` (`trace` per action, `debug`
//! for lifecycle and reflow, `warn` for rejected dispatches). The crate
//! never installs a subscriber.

pub mod action;
pub mod config;
pub mod error;
pub mod modal;
pub mod ports;
pub mod reducer;
pub mod state;
pub mod store;
pub mod types;

pub use action::Action;
pub use config::StoreConfig;
pub use error::{ModalError, ModalResult};
pub use modal::{ModalState, MountOptions};
pub use ports::{FixedViewport, IdSource, SequentialIds, SharedViewport, ViewportSource};
pub use reducer::{reduce, ModalReducer};
pub use state::ModalsState;
pub use store::{ModalStore, SubscriptionId};
pub use types::{ModalId, ZIndex};
