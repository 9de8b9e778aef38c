//! Route guard for authenticated-only views, plus the shared redirect hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route evaluates the guard on each navigation; no decision
//! is cached because identity can change between navigations. A denied
//! visitor's path is remembered so sign-in can return them to it.
//!
//! A session that ends while a guarded page is open (sign-out here or in
//! another tab) is not a denied navigation: the visitor goes home and no
//! intent is recorded.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{Effect, Get, RwSignal, Set};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::AuthState;
use crate::state::intent::NavigationIntent;

/// Outcome of evaluating the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The initial session check has not resolved; show a neutral indicator.
    Loading,
    /// Render the protected view.
    Authorized,
    /// Replace the current history entry with `redirect`.
    Denied { redirect: &'static str },
    /// The session ended on an authorized page; leave for `redirect`.
    SessionEnded { redirect: &'static str },
}

/// Decide access from auth state alone.
pub fn evaluate_guard(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Loading
    } else if state.user.is_some() {
        GuardDecision::Authorized
    } else {
        GuardDecision::Denied { redirect: routes::SIGN_IN }
    }
}

/// Evaluate the guard for a navigation to `requested`, recording it as the
/// navigation intent when access is denied.
pub fn guard_navigation(state: &AuthState, requested: &str, intent: &NavigationIntent) -> GuardDecision {
    let decision = evaluate_guard(state);
    if matches!(decision, GuardDecision::Denied { .. }) {
        intent.capture(requested);
    }
    decision
}

/// Guard state kept by one mounted guarded route across re-evaluations.
#[derive(Debug, Default)]
pub struct GuardWatch {
    last: Option<(String, GuardDecision)>,
}

impl GuardWatch {
    /// Like [`guard_navigation`], except that losing access at the path that
    /// was just authorized yields [`GuardDecision::SessionEnded`] and leaves
    /// the intent alone. Once a redirect was issued, evaluating its target
    /// is `Loading`: the guarded route is being left.
    pub fn evaluate(&mut self, state: &AuthState, requested: &str, intent: &NavigationIntent) -> GuardDecision {
        let (leaving, was_authorized_here) = match &self.last {
            Some((_, GuardDecision::Denied { redirect } | GuardDecision::SessionEnded { redirect })) => {
                (*redirect == requested, false)
            }
            Some((path, GuardDecision::Authorized)) => (false, path == requested),
            _ => (false, false),
        };
        if leaving {
            return GuardDecision::Loading;
        }
        let decision = match evaluate_guard(state) {
            GuardDecision::Denied { .. } if was_authorized_here => {
                GuardDecision::SessionEnded { redirect: routes::HOME }
            }
            _ => guard_navigation(state, requested, intent),
        };
        self.last = Some((requested.to_owned(), decision.clone()));
        decision
    }
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Where a guard decision sends the visitor, if anywhere. Redirects always
/// replace the current history entry so Back does not return to the
/// guarded page.
pub fn guard_redirect(decision: &GuardDecision) -> Option<(&'static str, NavigateOptions)> {
    match decision {
        GuardDecision::Loading | GuardDecision::Authorized => None,
        GuardDecision::Denied { redirect } | GuardDecision::SessionEnded { redirect } => {
            Some((*redirect, replace_history()))
        }
    }
}

/// Path plus query string, the way it is remembered in the intent.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let search = search.trim();
    if search.is_empty() || search == "?" {
        pathname.to_owned()
    } else if search.starts_with('?') {
        format!("{pathname}{search}")
    } else {
        format!("{pathname}?{search}")
    }
}

/// Navigate (replacing history) whenever `pending` is set, then reset it.
///
/// Async handlers write the target here instead of holding a navigate
/// closure across an await.
pub fn install_redirect(pending: RwSignal<Option<String>>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, replace_history());
        }
    });
}
