//! Guarded single-post page (`/post/:id`).

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::net::backend::BackendHandle;
use crate::net::types::SkillPost;
use crate::pages::explore::posted_on;
use crate::routes;

#[derive(Clone, Debug, PartialEq)]
enum PostView {
    Loading,
    Found(SkillPost),
    Missing,
    Failed(String),
}

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let backend = expect_context::<BackendHandle>();
    let params = use_params_map();
    let state = RwSignal::new(PostView::Loading);

    Effect::new(move || {
        let Some(post_id) = params.get().get("id") else {
            state.set(PostView::Missing);
            return;
        };
        state.set(PostView::Loading);
        let backend = backend.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let next = match backend.fetch_post(&post_id).await {
                Ok(Some(post)) => PostView::Found(post),
                Ok(None) => PostView::Missing,
                Err(e) => PostView::Failed(e.user_message("Failed to load post")),
            };
            state.try_set(next);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, post_id);
        }
    });

    view! {
        <section class="page page--narrow post-detail">
            {move || match state.get() {
                PostView::Loading => view! { <p class="post-detail__status">"Loading post..."</p> }.into_any(),
                PostView::Missing => view! {
                    <p class="post-detail__status">
                        "This post does not exist. "
                        <a href=routes::EXPLORE>"Back to explore"</a>
                    </p>
                }
                .into_any(),
                PostView::Failed(message) => view! { <p class="post-detail__status post-detail__status--error">{message}</p> }.into_any(),
                PostView::Found(post) => {
                    let date = posted_on(post.created_at.as_deref());
                    let author = post.author_name().map(str::to_owned);
                    let author_href = routes::user_profile(&post.user_id);
                    view! {
                        <article class="post-detail__body">
                            {post.image_url.map(|src| view! { <img class="post-detail__image" src=src alt=""/> })}
                            <span class="post-detail__category">{post.category}</span>
                            <h1 class="post-detail__title">{post.title}</h1>
                            {author.map(|name| view! {
                                <p class="post-detail__author">"By " <a href=author_href>{name}</a></p>
                            })}
                            {date.map(|d| view! { <time class="post-detail__date">{d}</time> })}
                            <p class="post-detail__description">{post.description}</p>
                        </article>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
