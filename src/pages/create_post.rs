//! Guarded create-post page.

use leptos::prelude::*;

use crate::components::post_form::CreatePostForm;

#[component]
pub fn CreatePostPage() -> impl IntoView {
    view! {
        <section class="page page--narrow">
            <h1>"Share a skill"</h1>
            <p class="page__subtitle">"Your draft is kept in this browser until you post it."</p>
            <CreatePostForm/>
        </section>
    }
}
