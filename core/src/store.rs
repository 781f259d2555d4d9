//! The single owner of `ProductState`.
//!
//! # Design
//! State sits in a `tokio::sync::watch` channel. `dispatch` is the only way
//! to change it: the reducer runs under the channel's lock, so actions are
//! applied one at a time in the order they arrive. Subscribers are woken only
//! when the reducer produced a new state.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use crate::action::{AppAction, ProductAction};
use crate::reducer::{initial_state, product_reducer, ProductState};

/// The capability dispatchers are given to report progress.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: ProductAction);
}

#[derive(Debug)]
pub struct Store {
    tx: watch::Sender<Arc<ProductState>>,
}

impl Store {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(initial_state());
        let store = Self { tx };
        store.apply(AppAction::Init);
        store
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Arc<ProductState> {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ProductState>> {
        self.tx.subscribe()
    }

    fn apply(&self, action: AppAction) -> bool {
        debug!(action = action.kind(), "dispatch");
        self.tx.send_if_modified(|state| {
            let next = product_reducer(state, &action);
            if Arc::ptr_eq(state, &next) {
                return false;
            }
            *state = next;
            true
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: ProductAction) {
        self.apply(action.into());
    }
}

/// Keeps every dispatched action in order instead of reducing it.
#[derive(Debug, Default)]
pub struct ActionRecorder {
    actions: Mutex<Vec<ProductAction>>,
}

impl ActionRecorder {
    pub fn actions(&self) -> Vec<ProductAction> {
        self.actions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Dispatch for ActionRecorder {
    fn dispatch(&self, action: ProductAction) {
        self.actions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(action);
    }
}
