//! Public landing page.

use leptos::prelude::*;

use crate::routes;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Trade skills with people nearby".to_owned(), |u| format!("Welcome back, {}", u.display_name()))
    };

    view! {
        <section class="hero">
            <h1 class="hero__title">"SkillLink"</h1>
            <p class="hero__subtitle">{greeting}</p>
            <div class="hero__actions">
                <Show
                    when=move || auth.get().is_signed_in()
                    fallback=|| view! {
                        <a class="hero__cta" href=routes::SIGN_UP>"Get started"</a>
                        <a class="hero__link" href=routes::SIGN_IN>"I already have an account"</a>
                    }
                >
                    <a class="hero__cta" href=routes::CREATE_POST>"Share a skill"</a>
                    <a class="hero__link" href=routes::EXPLORE>"Explore skills"</a>
                </Show>
            </div>
        </section>
    }
}
