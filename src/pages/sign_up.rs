//! Sign-up page: creates the account and its profile row.

use leptos::prelude::*;

use crate::components::field_message::FieldMessage;
use crate::net::backend::BackendHandle;
use crate::routes;
use crate::services::auth;
use crate::state::toast::ToastState;
use crate::util::auth::install_redirect;
use crate::util::validation::{FieldError, validate_sign_up};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let backend = expect_context::<BackendHandle>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_sign_up(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);

        let backend = backend.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = auth::sign_up_with_email(&*backend, &input.email, &input.password, &input.name).await;
            let target = toasts.try_update(|t| auth::report(t, result, "Failed to create account")).flatten();
            busy.try_set(false);
            redirect.try_set(target);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, input, toasts, redirect);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join SkillLink"</h1>
                <p class="auth-card__subtitle">"Share what you know, learn what you don't"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Your name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="name"/>
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
                        placeholder="Password (6+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="password"/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=routes::SIGN_IN>"Login"</a>
                </p>
            </div>
        </div>
    }
}
