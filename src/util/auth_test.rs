use super::*;
use crate::net::testing::identity;

fn anonymous() -> AuthState {
    AuthState::resolved(None)
}

// =============================================================
// evaluate_guard
// =============================================================

#[test]
fn loading_state_makes_no_decision() {
    assert_eq!(evaluate_guard(&AuthState::default()), GuardDecision::Loading);
}

#[test]
fn signed_in_state_is_authorized() {
    let state = AuthState::resolved(Some(identity("u-1", "a@b.co")));
    assert_eq!(evaluate_guard(&state), GuardDecision::Authorized);
}

#[test]
fn anonymous_state_is_denied_to_sign_in() {
    assert_eq!(evaluate_guard(&anonymous()), GuardDecision::Denied { redirect: routes::SIGN_IN });
}

// =============================================================
// guard_navigation
// =============================================================

#[test]
fn anonymous_visit_to_edit_profile_redirects_and_keeps_intent() {
    let intent = NavigationIntent::new();
    let decision = guard_navigation(&anonymous(), routes::EDIT_PROFILE, &intent);
    assert_eq!(decision, GuardDecision::Denied { redirect: "/login" });
    assert_eq!(intent.peek().as_deref(), Some("/profile/edit"));
}

#[test]
fn every_denied_guarded_path_is_recorded() {
    let guarded = [routes::EXPLORE, routes::PROFILE, routes::EDIT_PROFILE, routes::CREATE_POST, "/post/p-9"];
    for path in guarded {
        let intent = NavigationIntent::new();
        let decision = guard_navigation(&anonymous(), path, &intent);
        assert_eq!(decision, GuardDecision::Denied { redirect: routes::SIGN_IN });
        assert_eq!(intent.take().as_deref(), Some(path));
    }
}

#[test]
fn loading_navigation_does_not_capture_intent() {
    let intent = NavigationIntent::new();
    assert_eq!(guard_navigation(&AuthState::default(), routes::CREATE_POST, &intent), GuardDecision::Loading);
    assert_eq!(intent.peek(), None);
}

#[test]
fn authorized_navigation_leaves_intent_untouched() {
    let intent = NavigationIntent::new();
    intent.capture(routes::EXPLORE);
    let state = AuthState::resolved(Some(identity("u-1", "a@b.co")));
    assert_eq!(guard_navigation(&state, routes::CREATE_POST, &intent), GuardDecision::Authorized);
    assert_eq!(intent.peek().as_deref(), Some(routes::EXPLORE));
}

#[test]
fn decision_follows_identity_between_navigations() {
    let intent = NavigationIntent::new();
    let signed_in = AuthState::resolved(Some(identity("u-1", "a@b.co")));
    assert_eq!(guard_navigation(&signed_in, routes::PROFILE, &intent), GuardDecision::Authorized);
    assert!(matches!(guard_navigation(&anonymous(), routes::PROFILE, &intent), GuardDecision::Denied { .. }));
}

// =============================================================
// requested_location
// =============================================================

#[test]
fn requested_location_appends_query() {
    assert_eq!(requested_location("/explore", "?category=Art"), "/explore?category=Art");
    assert_eq!(requested_location("/explore", "category=Art"), "/explore?category=Art");
}

#[test]
fn requested_location_ignores_empty_query() {
    assert_eq!(requested_location("/profile", ""), "/profile");
    assert_eq!(requested_location("/profile", "?"), "/profile");
}

// =============================================================
// GuardWatch
// =============================================================

fn signed_in() -> AuthState {
    AuthState::resolved(Some(identity("u-1", "a@b.co")))
}

#[test]
fn watch_captures_denied_navigation() {
    let intent = NavigationIntent::new();
    let mut watch = GuardWatch::default();
    let decision = watch.evaluate(&anonymous(), routes::CREATE_POST, &intent);
    assert_eq!(decision, GuardDecision::Denied { redirect: "/login" });
    assert_eq!(intent.peek().as_deref(), Some(routes::CREATE_POST));
}

#[test]
fn watch_captures_when_initial_check_resolves_anonymous() {
    let intent = NavigationIntent::new();
    let mut watch = GuardWatch::default();
    assert_eq!(watch.evaluate(&AuthState::default(), routes::EXPLORE, &intent), GuardDecision::Loading);
    assert!(matches!(watch.evaluate(&anonymous(), routes::EXPLORE, &intent), GuardDecision::Denied { .. }));
    assert_eq!(intent.peek().as_deref(), Some(routes::EXPLORE));
}

#[test]
fn sign_out_on_open_guarded_page_leaves_no_intent() {
    let intent = NavigationIntent::new();
    let mut watch = GuardWatch::default();
    assert_eq!(watch.evaluate(&signed_in(), routes::CREATE_POST, &intent), GuardDecision::Authorized);
    assert_eq!(
        watch.evaluate(&anonymous(), routes::CREATE_POST, &intent),
        GuardDecision::SessionEnded { redirect: routes::HOME }
    );
    assert_eq!(intent.peek(), None);
}

#[test]
fn leaving_for_redirect_target_captures_nothing() {
    let intent = NavigationIntent::new();
    let mut watch = GuardWatch::default();
    watch.evaluate(&signed_in(), routes::PROFILE, &intent);
    watch.evaluate(&anonymous(), routes::PROFILE, &intent);
    assert_eq!(watch.evaluate(&anonymous(), routes::HOME, &intent), GuardDecision::Loading);
    assert_eq!(intent.peek(), None);

    let mut watch = GuardWatch::default();
    watch.evaluate(&anonymous(), routes::EXPLORE, &intent);
    assert_eq!(watch.evaluate(&anonymous(), routes::SIGN_IN, &intent), GuardDecision::Loading);
    assert_eq!(intent.peek().as_deref(), Some(routes::EXPLORE));
}

#[test]
fn navigation_after_session_ended_is_captured_again() {
    let intent = NavigationIntent::new();
    let mut watch = GuardWatch::default();
    watch.evaluate(&signed_in(), "/post/p-1", &intent);
    watch.evaluate(&anonymous(), "/post/p-1", &intent);
    assert!(matches!(watch.evaluate(&anonymous(), "/post/p-2", &intent), GuardDecision::Denied { .. }));
    assert_eq!(intent.peek().as_deref(), Some("/post/p-2"));
}

#[test]
fn denied_navigation_from_another_authorized_path_is_captured() {
    let intent = NavigationIntent::new();
    let mut watch = GuardWatch::default();
    watch.evaluate(&signed_in(), "/post/p-1", &intent);
    assert!(matches!(watch.evaluate(&anonymous(), "/post/p-2", &intent), GuardDecision::Denied { .. }));
    assert_eq!(intent.peek().as_deref(), Some("/post/p-2"));
}

// =============================================================
// guard_redirect
// =============================================================

#[test]
fn denied_redirect_replaces_history_entry() {
    let (path, options) = guard_redirect(&GuardDecision::Denied { redirect: routes::SIGN_IN }).unwrap();
    assert_eq!(path, "/login");
    assert!(options.replace);
}

#[test]
fn session_end_redirect_goes_home_replacing_entry() {
    let (path, options) = guard_redirect(&GuardDecision::SessionEnded { redirect: routes::HOME }).unwrap();
    assert_eq!(path, "/");
    assert!(options.replace);
}

#[test]
fn loading_and_authorized_stay_put() {
    assert!(guard_redirect(&GuardDecision::Loading).is_none());
    assert!(guard_redirect(&GuardDecision::Authorized).is_none());
}
