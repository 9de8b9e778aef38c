//! Guarded explore page listing the newest skill posts.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::backend::BackendHandle;
use crate::net::types::SkillPost;
use crate::routes;

const EXCERPT_CHARS: usize = 140;

/// Shorten `text` to at most `max_chars` characters on a word boundary,
/// appending an ellipsis when cut.
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let head = cut.rsplit_once(char::is_whitespace).map_or(cut.as_str(), |(head, _)| head);
    format!("{}…", head.trim_end())
}

/// Calendar date of a backend timestamp (`2024-05-01T10:00:00+00:00`).
pub(crate) fn posted_on(created_at: Option<&str>) -> Option<String> {
    let date = created_at?.split('T').next()?.trim();
    (date.len() == 10).then(|| date.to_owned())
}

/// "By {name}" for posts whose author profile was embedded.
pub(crate) fn byline(post: &SkillPost) -> Option<String> {
    post.author_name().map(|name| format!("By {name}"))
}

#[derive(Clone, Debug, PartialEq)]
enum Listing {
    Loading,
    Loaded(Vec<SkillPost>),
    Failed(String),
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let backend = expect_context::<BackendHandle>();
    let listing = RwSignal::new(Listing::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let next = match crate::services::posts::explore(&*backend).await {
            Ok(posts) => Listing::Loaded(posts),
            Err(e) => {
                log::warn!("explore listing failed: {e}");
                Listing::Failed(e.user_message("Failed to load posts"))
            }
        };
        listing.try_set(next);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = backend;
    }

    view! {
        <section class="page explore">
            <h1>"Explore skills"</h1>
            {move || match listing.get() {
                Listing::Loading => view! { <p class="explore__status">"Loading posts..."</p> }.into_any(),
                Listing::Failed(message) => view! { <p class="explore__status explore__status--error">{message}</p> }.into_any(),
                Listing::Loaded(posts) if posts.is_empty() => view! {
                    <p class="explore__status">
                        "No skills shared yet. "
                        <a href=routes::CREATE_POST>"Be the first"</a>
                    </p>
                }
                .into_any(),
                Listing::Loaded(posts) => view! {
                    <ul class="explore__grid">
                        {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn PostCard(post: SkillPost) -> impl IntoView {
    let href = routes::post(&post.id);
    let date = posted_on(post.created_at.as_deref());
    let by = byline(&post);
    view! {
        <li class="post-card">
            <a class="post-card__link" href=href>
                {post.image_url.map(|src| view! { <img class="post-card__image" src=src alt=""/> })}
                <span class="post-card__category">{post.category}</span>
                <h2 class="post-card__title">{post.title}</h2>
                <p class="post-card__excerpt">{excerpt(&post.description, EXCERPT_CHARS)}</p>
                {by.map(|by| view! { <span class="post-card__author">{by}</span> })}
                {date.map(|d| view! { <time class="post-card__date">{d}</time> })}
            </a>
        </li>
    }
}
