use super::*;
use crate::net::testing::{identity, session_for};

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn resolved_state_is_settled() {
    let state = AuthState::resolved(Some(identity("u-1", "a@b.co")));
    assert!(!state.loading);
    assert!(state.is_signed_in());
}

// =============================================================
// Initial check
// =============================================================

#[test]
fn initial_check_populates_identity_and_stops_loading() {
    let mut state = AuthState::default();
    let token = state.begin_initial_check();
    state.finish_initial_check(token, Some(identity("u-1", "a@b.co")));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
}

#[test]
fn failed_initial_check_leaves_identity_absent() {
    let mut state = AuthState::default();
    let token = state.begin_initial_check();
    state.finish_initial_check(token, None);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn pushed_change_during_initial_check_wins() {
    let mut state = AuthState::default();
    let token = state.begin_initial_check();
    state.apply_change(&SessionChange::signed_in(session_for(identity("u-new", "n@b.co"))));
    state.finish_initial_check(token, None);
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-new"));
}

// =============================================================
// Session changes
// =============================================================

#[test]
fn last_applied_change_determines_identity() {
    let mut state = AuthState::resolved(None);
    let changes = [
        SessionChange::signed_in(session_for(identity("u-1", "a@b.co"))),
        SessionChange::token_refreshed(session_for(identity("u-1", "a@b.co"))),
        SessionChange::signed_out(),
        SessionChange::signed_in(session_for(identity("u-2", "c@d.co"))),
    ];
    for change in &changes {
        state.apply_change(change);
        assert_eq!(state.user.as_ref(), change.user());
    }
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-2"));
}

#[test]
fn signed_out_change_clears_identity() {
    let mut state = AuthState::resolved(Some(identity("u-1", "a@b.co")));
    state.apply_change(&SessionChange::signed_out());
    assert!(state.user.is_none());
    assert!(!state.loading);
}
