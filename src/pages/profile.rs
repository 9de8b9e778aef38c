//! Profile page. `/profile` shows the signed-in user's own row (guarded);
//! `/profile/:user_id` shows anyone's and is public.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::net::backend::BackendHandle;
use crate::net::types::Profile;
use crate::routes;
use crate::services::profile::{load_profile, profile_heading, profile_target};
use crate::state::auth::AuthState;

#[derive(Clone, Debug, PartialEq)]
enum ProfileView {
    Loading,
    Found { profile: Profile, is_own: bool },
    Missing { is_own: bool },
    Failed(String),
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<BackendHandle>();
    let params = use_params_map();
    let state = RwSignal::new(ProfileView::Loading);

    let my_id = Memo::new(move |_| auth.with(|a| a.user.as_ref().map(|u| u.id.clone())));

    Effect::new(move || {
        let requested = params.with(|p| p.get("user_id"));
        let Some(target) = profile_target(requested.as_deref(), my_id.get().as_deref()) else {
            state.set(ProfileView::Missing { is_own: false });
            return;
        };
        state.set(ProfileView::Loading);
        let backend = backend.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let next = match load_profile(&*backend, &target.user_id).await {
                Ok(Some(profile)) => ProfileView::Found { profile, is_own: target.is_own },
                Ok(None) => ProfileView::Missing { is_own: target.is_own },
                Err(e) => {
                    log::warn!("profile {} failed to load: {e}", target.user_id);
                    ProfileView::Failed(e.user_message("Failed to load profile"))
                }
            };
            state.try_set(next);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, target, load_profile);
        }
    });

    view! {
        <section class="page page--narrow profile">
            {move || match state.get() {
                ProfileView::Loading => view! { <p class="profile__status">"Loading profile..."</p> }.into_any(),
                ProfileView::Failed(message) => view! { <p class="profile__status profile__status--error">{message}</p> }.into_any(),
                ProfileView::Missing { is_own } => view! {
                    <h1>"Profile Not Found"</h1>
                    <Show when=move || is_own>
                        <p>"You haven't set up your profile yet."</p>
                        <a class="profile__edit" href=routes::EDIT_PROFILE>"Create Your Profile"</a>
                    </Show>
                }
                .into_any(),
                ProfileView::Found { profile, is_own } => view! { <ProfileCard profile=profile is_own=is_own/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ProfileCard(profile: Profile, is_own: bool) -> impl IntoView {
    let heading = profile_heading(&profile, is_own);
    let initial = profile.initial().to_string();
    let avatar = match profile.avatar_url.filter(|url| !url.is_empty()) {
        Some(src) => view! { <img class="profile__avatar" src=src alt="Avatar"/> }.into_any(),
        None => view! { <div class="profile__avatar profile__avatar--initial">{initial}</div> }.into_any(),
    };
    view! {
        <header class="profile__header">
            <h1>{heading}</h1>
            <Show when=move || is_own>
                <a class="profile__edit" href=routes::EDIT_PROFILE>"Edit Profile"</a>
            </Show>
        </header>
        <div class="profile__identity">
            {avatar}
            <div>
                <h2 class="profile__name">{profile.name}</h2>
                {profile.location.map(|location| view! { <p class="profile__location">{location}</p> })}
            </div>
        </div>
        {profile.bio.map(|bio| view! {
            <div class="profile__bio">
                <h3>"Bio"</h3>
                <p>{bio}</p>
            </div>
        })}
    }
}
