//! Guard wrapper for authenticated-only routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a page view. The decision is re-evaluated whenever auth state or
//! the location changes, so a sign-out on a guarded page sends the visitor
//! home without a reload.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::intent::NavigationIntent;
use crate::util::auth::{GuardDecision, GuardWatch, evaluate_guard, guard_redirect, requested_location};

/// Render `children` only for a signed-in visitor.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let intent = expect_context::<NavigationIntent>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| evaluate_guard(&auth.get()));

    let mut watch = GuardWatch::default();
    Effect::new(move || {
        let requested = requested_location(&location.pathname.get(), &location.search.get());
        let decision = watch.evaluate(&auth.get(), &requested, &intent);
        if let Some((target, options)) = guard_redirect(&decision) {
            log::debug!("guard on {requested}: {decision:?}, leaving for {target}");
            navigate(target, options);
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="route-loading" aria-busy="true">
                <span class="route-loading__spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Authorized => children().into_any(),
        GuardDecision::Denied { .. } | GuardDecision::SessionEnded { .. } => ().into_any(),
    }
}
