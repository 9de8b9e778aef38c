//! Session store: mirrors backend session state into [`AuthState`].
//!
//! ARCHITECTURE
//! ============
//! The backend pushes session changes over a channel; the store is their
//! single consumer and the only writer of `AuthState`. Auth operations never
//! assign identity themselves, they ask the backend and the resulting change
//! comes back through the listener. This keeps readers from seeing a stale
//! identity after a sign-in or sign-out completes.
//!
//! LIFECYCLE
//! =========
//! `subscribe` once at startup, then `initialize`, then drive `run` on a
//! local task. Dropping or unsubscribing the returned [`Subscription`] on
//! teardown closes the channel, and `run` returns.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use futures::StreamExt;
use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::backend::{BackendHandle, SessionEvents, Subscription};
use crate::state::auth::AuthState;

/// Somewhere an [`AuthState`] lives: an `RwSignal` in the app, a plain cell
/// in tests.
pub trait SessionCell {
    fn modify(&self, f: impl FnOnce(&mut AuthState));
    fn snapshot(&self) -> AuthState;
}

impl SessionCell for RwSignal<AuthState> {
    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }

    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }
}

#[derive(Clone)]
pub struct SessionStore<C> {
    cell: C,
    backend: BackendHandle,
}

impl<C: SessionCell> SessionStore<C> {
    pub fn new(cell: C, backend: BackendHandle) -> Self {
        Self { cell, backend }
    }

    /// Register the durable session-change listener.
    pub fn subscribe(&self) -> (Subscription, SessionEvents) {
        self.backend.on_session_change()
    }

    /// Resolve the session that existed before the app started.
    ///
    /// Never fails: a lookup error is logged and leaves the visitor
    /// signed out.
    pub async fn initialize(&self) {
        let mut token = 0;
        self.cell.modify(|state| token = state.begin_initial_check());

        let user = match self.backend.get_session().await {
            Ok(session) => session.map(|s| s.user),
            Err(e) => {
                log::error!("initial session check failed: {e}");
                None
            }
        };
        self.cell.modify(|state| state.finish_initial_check(token, user));
    }

    /// Apply session changes in delivery order until the subscription ends.
    pub async fn run(&self, mut events: SessionEvents) {
        while let Some(change) = events.next().await {
            log::debug!("session change: {:?}", change.event);
            self.cell.modify(|state| state.apply_change(&change));
        }
        log::debug!("session listener stopped");
    }

    pub fn current(&self) -> AuthState {
        self.cell.snapshot()
    }
}
