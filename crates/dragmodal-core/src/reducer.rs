//! The modal state reducer
//!
//! [`ModalReducer::reduce`] is the only way state changes. It takes the
//! current state by reference and an [`Action`] by value and returns a
//! brand-new [`ModalsState`]; the input is never touched, so on error the
//! caller simply keeps what it had.
//!
//! ## Stacking
//!
//! Three rules move z-indices:
//!
//! - `mount`, `show`, `focus` always take `max_z_index + 1`.
//! - `drag`, `resize` take `max_z_index + 1` unless the modal is already
//!   at `max_z_index`, in which case nothing moves.
//! - Everything else leaves stacking alone.
//!
//! ## Bounds
//!
//! Position clamps use the modal's stored `max_position` intersected with
//! the viewport. A `max_position` carried by `show` or `drag` is accepted
//! on the wire but plays no part in clamping. The lower bound comes from
//! the action only and defaults to 0.

use dragmodal_geometry::{clamp_drag, Bound, ResizeLimits, Size, Vec2, Viewport};
use tracing::{debug, trace};

use crate::action::Action;
use crate::error::ModalResult;
use crate::modal::MountOptions;
use crate::state::ModalsState;
use crate::types::ModalId;

/// Reduce with the default [`ResizeLimits`]
pub fn reduce(state: &ModalsState, action: Action) -> ModalResult<ModalsState> {
    ModalReducer::default().reduce(state, action)
}

/// Pure transition function over [`ModalsState`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModalReducer {
    limits: ResizeLimits,
}

impl ModalReducer {
    /// Create a reducer with custom resize limits
    pub fn new(limits: ResizeLimits) -> Self {
        Self { limits }
    }

    /// Resize limits in effect
    pub fn limits(&self) -> ResizeLimits {
        self.limits
    }

    /// Compute the state that follows `state` after `action`
    pub fn reduce(&self, state: &ModalsState, action: Action) -> ModalResult<ModalsState> {
        let kind = action.kind();
        let mut next = state.clone();

        match action {
            Action::Mount { id, options } => mount(&mut next, id, &options),
            Action::Unmount { id } => unmount(&mut next, &id)?,
            Action::Show {
                id, min_position, ..
            } => show(&mut next, &id, &min_position)?,
            Action::Hide { id } => next.require_mut(&id)?.visible = false,
            Action::Focus { id } => focus(&mut next, &id)?,
            Action::Drag {
                id,
                x,
                y,
                min_position,
                ..
            } => drag(&mut next, &id, Vec2::new(x, y), &min_position)?,
            Action::Resize {
                id,
                x,
                y,
                width,
                height,
            } => self.resize(&mut next, &id, Vec2::new(x, y), Size::new(width, height))?,
            Action::UpdateMinPosition { id, value } => {
                next.require_mut(&id)?.min_position.merge(value)
            }
            Action::UpdateMaxPosition { id, value } => {
                next.require_mut(&id)?.max_position.merge(value)
            }
            Action::WindowResize { size } => window_resize(&mut next, size),
        }

        trace!(
            action = kind,
            max_z_index = next.max_z_index,
            modals = next.len(),
            "modal action applied"
        );
        Ok(next)
    }

    fn resize(
        &self,
        state: &mut ModalsState,
        id: &ModalId,
        position: Vec2,
        requested: Size,
    ) -> ModalResult<()> {
        let current_z = state.require(id)?.z_index;
        let size = self.limits.clamp(state.window_size, position, requested);
        let z_index = state.raise_z_index(current_z);

        let modal = state.require_mut(id)?;
        modal.width = Some(size.width);
        modal.height = Some(size.height);
        modal.z_index = z_index;
        Ok(())
    }
}

fn mount(state: &mut ModalsState, id: ModalId, options: &MountOptions) {
    let z_index = state.bump_z_index();
    debug!(id = %id, z_index, "mounting modal");

    // Bounds and visibility of a re-mounted modal survive
    let modal = state.modals.entry(id).or_default();
    options.apply_to(modal);
    modal.z_index = z_index;
}

fn unmount(state: &mut ModalsState, id: &ModalId) -> ModalResult<()> {
    state.require(id)?;
    state.modals.remove(id);
    debug!(id = %id, "unmounted modal");
    Ok(())
}

fn show(state: &mut ModalsState, id: &ModalId, min_position: &Bound) -> ModalResult<()> {
    let modal = state.require(id)?;
    let position = clamp_within(
        modal.position(),
        modal.clamp_size(),
        &modal.max_position,
        min_position,
        state.window_size,
    );
    let z_index = state.bump_z_index();

    let modal = state.require_mut(id)?;
    modal.set_position(position);
    modal.visible = true;
    modal.z_index = z_index;
    Ok(())
}

fn focus(state: &mut ModalsState, id: &ModalId) -> ModalResult<()> {
    state.require(id)?;
    let z_index = state.bump_z_index();
    state.require_mut(id)?.z_index = z_index;
    Ok(())
}

fn drag(
    state: &mut ModalsState,
    id: &ModalId,
    requested: Vec2,
    min_position: &Bound,
) -> ModalResult<()> {
    let modal = state.require(id)?;
    let position = clamp_within(
        requested,
        modal.clamp_size(),
        &modal.max_position,
        min_position,
        state.window_size,
    );
    let current_z = modal.z_index;
    let z_index = state.raise_z_index(current_z);

    let modal = state.require_mut(id)?;
    modal.set_position(position);
    modal.z_index = z_index;
    Ok(())
}

/// Re-clamp every visible modal against the new viewport
///
/// Hidden modals keep their stale position until they are next shown.
fn window_resize(state: &mut ModalsState, size: Viewport) {
    state.window_size = size;

    let mut reflowed = 0usize;
    for modal in state.modals.values_mut().filter(|m| m.visible) {
        let max = modal.max_position.effective_max(size);
        let position = clamp_drag(modal.position(), modal.clamp_size(), max, Vec2::ZERO);
        if position != modal.position() {
            reflowed += 1;
        }
        modal.set_position(position);
    }

    debug!(
        width = size.width,
        height = size.height,
        reflowed,
        "viewport resized"
    );
}

fn clamp_within(
    position: Vec2,
    size: Size,
    max_position: &Bound,
    min_position: &Bound,
    viewport: Viewport,
) -> Vec2 {
    clamp_drag(
        position,
        size,
        max_position.effective_max(viewport),
        min_position.or_zero(),
    )
}
