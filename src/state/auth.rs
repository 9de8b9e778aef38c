//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering. Only the session store
//! (`services::session`) writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{SessionChange, UserIdentity};

/// Authentication state tracking the current user and loading status.
///
/// Lives in an `RwSignal` provided via context. Starts out loading until the
/// initial session check resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
    /// Count of session changes applied; lets a slow initial check detect
    /// that a pushed change superseded it.
    generation: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, generation: 0 }
    }
}

impl AuthState {
    /// A settled state with the given identity.
    pub fn resolved(user: Option<UserIdentity>) -> Self {
        Self { user, loading: false, generation: 0 }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Mark the initial session check as in flight. Returns a token for
    /// [`AuthState::finish_initial_check`].
    pub fn begin_initial_check(&mut self) -> u64 {
        self.loading = true;
        self.generation
    }

    /// Settle the initial check.
    ///
    /// `user` is the identity the backend reported (`None` for no session or
    /// a failed lookup). It is ignored when a session change was applied
    /// after `token` was taken, since that change is newer.
    pub fn finish_initial_check(&mut self, token: u64, user: Option<UserIdentity>) {
        if self.generation == token {
            self.user = user;
        }
        self.loading = false;
    }

    /// Replace the identity with the one carried by `change`.
    pub fn apply_change(&mut self, change: &SessionChange) {
        self.user = change.user().cloned();
        self.generation += 1;
    }
}
