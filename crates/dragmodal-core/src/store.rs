//! State container and dispatch channel
//!
//! [`ModalStore`] owns the session's single [`ModalsState`], feeds actions
//! to the reducer one at a time in call order, and tells subscribers about
//! the result:
//!
//! - whole-state subscribers hear about every transition that changed
//!   anything;
//! - per-modal subscribers hear only when their modal's slice changed,
//!   including when it is unmounted (`None`).
//!
//! A rejected action changes nothing and notifies no one.

use tracing::{debug, warn};

use crate::action::Action;
use crate::config::StoreConfig;
use crate::error::ModalResult;
use crate::modal::{ModalState, MountOptions};
use crate::ports::{IdSource, ViewportSource};
use crate::reducer::ModalReducer;
use crate::state::ModalsState;
use crate::types::ModalId;

/// Handle returned by subscribe calls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type StateListener = Box<dyn FnMut(&ModalsState)>;
type ModalListener = Box<dyn FnMut(Option<&ModalState>)>;

enum Listener {
    State(StateListener),
    Modal { id: ModalId, callback: ModalListener },
}

/// Session-wide holder of modal state
pub struct ModalStore<V: ViewportSource> {
    state: ModalsState,
    reducer: ModalReducer,
    viewport_source: V,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<V: ViewportSource> ModalStore<V> {
    /// Create a store with default configuration
    pub fn new(viewport_source: V) -> Self {
        Self::with_config(StoreConfig::default(), viewport_source)
    }

    /// Create a store; the initial viewport comes from `config` if set,
    /// otherwise from `viewport_source`
    pub fn with_config(config: StoreConfig, viewport_source: V) -> Self {
        let viewport = config
            .viewport
            .unwrap_or_else(|| viewport_source.viewport());
        let reducer = ModalReducer::new(config.limits);
        debug!(
            width = viewport.width,
            height = viewport.height,
            min_width = reducer.limits().min_width,
            min_height = reducer.limits().min_height,
            "modal store created"
        );

        Self {
            state: ModalsState::new(viewport),
            reducer,
            viewport_source,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> &ModalsState {
        &self.state
    }

    /// Current state of one modal, or the "not mounted" default
    pub fn modal_or_initial(&self, id: &str, options: &MountOptions) -> ModalState {
        self.state.modal_or_initial(id, options)
    }

    /// Apply an action and publish the result
    pub fn dispatch(&mut self, action: Action) -> ModalResult<&ModalsState> {
        let kind = action.kind();
        let modal = action.id().cloned();
        let next = match self.reducer.reduce(&self.state, action) {
            Ok(next) => next,
            Err(e) => {
                warn!(action = kind, modal = ?modal, error = %e, "modal action rejected");
                return Err(e);
            }
        };

        let previous = std::mem::replace(&mut self.state, next);
        debug!(action = kind, "modal action dispatched");
        self.publish(&previous);
        Ok(&self.state)
    }

    /// Parse and apply a wire-level action
    pub fn dispatch_json(&mut self, json: &str) -> ModalResult<&ModalsState> {
        let action = Action::from_json(json).inspect_err(|e| {
            warn!(error = %e, "undecodable modal action");
        })?;
        self.dispatch(action)
    }

    /// Read the viewport source and reflow visible modals
    pub fn window_resized(&mut self) -> ModalResult<&ModalsState> {
        let size = self.viewport_source.viewport();
        self.dispatch(Action::WindowResize { size })
    }

    /// Mount a modal under a freshly allocated ID
    pub fn mount_new(
        &mut self,
        ids: &mut dyn IdSource,
        options: MountOptions,
    ) -> ModalResult<ModalId> {
        let id = ids.next_id();
        self.dispatch(Action::mount(id.clone(), options))?;
        Ok(id)
    }

    /// Mount a modal that the host lets the user resize
    ///
    /// Without both initial dimensions the modal has nothing to resize
    /// from. This is reported but not rejected.
    pub fn mount_resizable(
        &mut self,
        id: impl Into<ModalId>,
        options: MountOptions,
    ) -> ModalResult<&ModalsState> {
        let id = id.into();
        if !options.supports_resize() {
            warn!(id = %id, "resizable modal mounted without initial width and height");
        }
        self.dispatch(Action::mount(id, options))
    }

    /// Listen to every state change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ModalsState) + 'static,
    {
        self.add_listener(Listener::State(Box::new(callback)))
    }

    /// Listen to changes of a single modal
    pub fn subscribe_modal<F>(&mut self, id: impl Into<ModalId>, callback: F) -> SubscriptionId
    where
        F: FnMut(Option<&ModalState>) + 'static,
    {
        self.add_listener(Listener::Modal {
            id: id.into(),
            callback: Box::new(callback),
        })
    }

    /// Stop a subscription. Returns false if it was not active.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != subscription);
        self.listeners.len() != before
    }

    fn add_listener(&mut self, listener: Listener) -> SubscriptionId {
        let subscription = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, listener));
        subscription
    }

    fn publish(&mut self, previous: &ModalsState) {
        if *previous == self.state {
            return;
        }

        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            match listener {
                Listener::State(callback) => callback(state),
                Listener::Modal { id, callback } => {
                    let current = state.modal(id.as_str());
                    if previous.modal(id.as_str()) != current {
                        callback(current);
                    }
                }
            }
        }
    }
}
