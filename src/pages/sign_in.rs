//! Sign-in page: email + password, or Google.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors bounced here by the route guard carry a navigation intent. A
//! successful password sign-in consumes it; leaving the page any other way
//! drops it so it cannot resurface after an unrelated sign-in.

use leptos::prelude::*;

use crate::components::field_message::FieldMessage;
use crate::net::backend::{BackendError, BackendHandle};
use crate::net::types::OAuthProvider;
use crate::routes;
use crate::services::auth;
use crate::state::intent::NavigationIntent;
use crate::state::toast::ToastState;
use crate::util::auth::install_redirect;
use crate::util::location;
use crate::util::validation::{FieldError, validate_sign_in};

#[component]
pub fn SignInPage() -> impl IntoView {
    let backend = expect_context::<BackendHandle>();
    let intent = expect_context::<NavigationIntent>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect);

    let cleanup_intent = intent.clone();
    on_cleanup(move || cleanup_intent.discard());

    let password_backend = backend.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);

        let backend = password_backend.clone();
        let intent = intent.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = auth::sign_in_with_password(&*backend, &intent, &input.email, &input.password).await;
            let target = toasts.try_update(|t| auth::report(t, result, "Failed to login")).flatten();
            busy.try_set(false);
            redirect.try_set(target);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, intent, input, toasts, redirect);
            busy.set(false);
        }
    };

    let on_google = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(origin) = location::origin() else {
            toasts.update(|t| {
                t.error(BackendError::Transport("page origin unavailable".to_owned()).user_message("Failed to login"));
            });
            return;
        };
        busy.set(true);
        let backend = backend.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // On success the browser is already leaving the app.
            if let Err(e) = auth::sign_in_with_oauth(&*backend, OAuthProvider::Google, &origin).await {
                toasts.try_update(|t| t.error(e.user_message("Failed to login with Google")));
                busy.try_set(false);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, origin);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue sharing skills"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="email"/>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="password"/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="auth-divider">"or"</div>
                <button class="auth-button auth-button--google" on:click=on_google disabled=move || busy.get()>
                    {format!("Continue with {}", OAuthProvider::Google.label())}
                </button>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=routes::SIGN_UP>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
