//! Top navigation bar.
//!
//! Shows the main links, the signed-in user's email and a sign-out button.
//! Anonymous visitors get sign-in and sign-up links instead.

use leptos::prelude::*;

use crate::net::backend::BackendHandle;
use crate::routes;
use crate::services::auth;
use crate::state::auth::AuthState;
use crate::state::intent::NavigationIntent;
use crate::state::toast::ToastState;
use crate::util::auth::install_redirect;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<BackendHandle>();
    let intent = expect_context::<NavigationIntent>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect);

    let email = move || auth_state.get().user.map(|u| u.email).unwrap_or_default();
    let signed_in = move || auth_state.get().is_signed_in();

    let on_sign_out = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let backend = backend.clone();
        let intent = intent.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = auth::sign_out(&*backend, &intent).await;
            let target = toasts.try_update(|t| auth::report(t, result, "Failed to logout")).flatten();
            busy.try_set(false);
            redirect.try_set(target);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, intent, toasts, redirect);
            busy.set(false);
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=routes::HOME>"SkillLink"</a>
            <Show
                when=signed_in
                fallback=|| view! {
                    <div class="navbar__links">
                        <a href=routes::SIGN_IN>"Login"</a>
                        <a class="navbar__cta" href=routes::SIGN_UP>"Sign up"</a>
                    </div>
                }
            >
                <div class="navbar__links">
                    <a href=routes::EXPLORE>"Explore"</a>
                    <a href=routes::CREATE_POST>"Share a skill"</a>
                    <a href=routes::PROFILE>"Profile"</a>
                </div>
                <div class="navbar__user">
                    <span class="navbar__email">{email}</span>
                    <button class="navbar__sign-out" on:click=on_sign_out.clone() disabled=move || busy.get()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
