//! Geometry primitives for draggable modal windows
//!
//! This crate is the leaf of the workspace. It holds no state and knows
//! nothing about modals, actions or stacking order; it only answers
//! "where may this rectangle go" questions:
//!
//! - [`Vec2`], [`Size`], [`Viewport`]: plain value types
//! - [`Bound`]: an optional per-axis limit on a top-left corner
//! - [`BoundUpdate`] / [`AxisUpdate`]: partial, tri-state bound edits
//! - [`clamp`], [`clamp_drag`], [`clamp_resize`]: clamping primitives
//! - [`ResizeLimits`]: minimum modal dimensions
//!
//! ## Inverted ranges
//!
//! Every clamp here resolves `min > max` the same way: the lower bound
//! wins. A modal wider than the viewport therefore pins to the left edge
//! instead of oscillating between edges.
//!
//! ```rust
//! use dragmodal_geometry::{clamp_drag, Size, Vec2};
//!
//! let pos = clamp_drag(
//!     Vec2::new(900.0, 900.0),
//!     Size::new(400.0, 300.0),
//!     Vec2::new(800.0, 600.0),
//!     Vec2::ZERO,
//! );
//! assert_eq!(pos, Vec2::new(400.0, 300.0));
//! ```

mod bound;
mod clamp;
mod limits;
mod size;
mod vec2;

pub use bound::{AxisUpdate, Bound, BoundUpdate};
pub use clamp::{clamp, clamp_drag, clamp_resize, effective_max};
pub use limits::{ResizeLimits, MIN_MODAL_SIZE};
pub use size::{Size, Viewport};
pub use vec2::Vec2;
