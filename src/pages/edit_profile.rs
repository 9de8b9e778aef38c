//! Guarded profile editor: avatar, name, location and bio.
//!
//! Fields start from the stored row. The avatar is uploaded as soon as it is
//! picked; its URL is written with the rest on save.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::field_message::FieldMessage;
use crate::net::backend::BackendHandle;
use crate::routes;
use crate::services::profile::{PROFILE_SAVED_NOTICE, ProfileFields, load_profile, save_profile};
#[cfg(feature = "csr")]
use crate::services::uploads::{self, IMAGE_UPLOADED_NOTICE};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_redirect;
#[cfg(feature = "csr")]
use crate::util::file;
use crate::util::validation::{FieldError, validate_profile};

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<BackendHandle>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(None::<String>);
    let loaded = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect);

    let apply = move |fields: ProfileFields| {
        name.try_set(fields.name);
        location.try_set(fields.location);
        bio.try_set(fields.bio);
        avatar_url.try_set(fields.avatar_url);
        loaded.try_set(true);
    };

    if let Some(user) = auth.get_untracked().user {
        let backend = backend.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let row = match load_profile(&*backend, &user.id).await {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("profile prefill failed: {e}");
                    None
                }
            };
            apply(ProfileFields::prefill(row.as_ref(), &user));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, load_profile);
            apply(ProfileFields::prefill(None, &user));
        }
    }

    let upload_backend = backend.clone();
    let on_avatar = move |ev: leptos::ev::Event| {
        if uploading.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(picked) = file::selected_file(&ev) else {
                return;
            };
            file::reset_input(&ev);
            uploading.set(true);
            let backend = upload_backend.clone();
            let user = auth.get_untracked().user;
            leptos::task::spawn_local(async move {
                let uploaded = match file::read_image(picked).await {
                    Ok(image) => uploads::upload_avatar(&*backend, user.as_ref(), image, file::now_millis()).await,
                    Err(e) => Err(e),
                };
                match uploaded {
                    Ok(url) => {
                        avatar_url.try_set(Some(url));
                        toasts.try_update(|t| t.success(IMAGE_UPLOADED_NOTICE));
                    }
                    Err(e) => {
                        log::warn!("avatar upload failed: {e}");
                        toasts.try_update(|t| t.error(uploads::upload_failure_message(&e)));
                    }
                }
                uploading.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&ev, &upload_backend);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || uploading.get_untracked() {
            return;
        }
        let input = match validate_profile(&name.get_untracked(), &location.get_untracked(), &bio.get_untracked()) {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);

        let backend = backend.clone();
        let user = auth.get_untracked().user;
        let avatar = avatar_url.get_untracked();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match save_profile(&*backend, user.as_ref(), input, avatar).await {
                Ok(()) => {
                    toasts.try_update(|t| t.success(PROFILE_SAVED_NOTICE));
                    redirect.try_set(Some(routes::PROFILE.to_owned()));
                }
                Err(e) => {
                    toasts.try_update(|t| t.error(e.user_message("Failed to update profile")));
                }
            }
            busy.try_set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, user, input, avatar, toasts, redirect, save_profile);
            busy.set(false);
        }
    };

    view! {
        <section class="page page--narrow">
            <h1>"Edit profile"</h1>
            <Show when=move || loaded.get() fallback=|| view! { <p class="profile__status">"Loading profile..."</p> }>
                <form class="profile-form" on:submit=on_submit.clone()>
                    <div class="profile-form__avatar">
                        {move || match avatar_url.get() {
                            Some(src) => view! { <img class="profile__avatar" src=src alt="Avatar"/> }.into_any(),
                            None => view! { <div class="profile__avatar profile__avatar--initial">"?"</div> }.into_any(),
                        }}
                        <label class="profile-form__label">
                            {move || if uploading.get() { "Uploading..." } else { "Change avatar" }}
                            <input
                                class="profile-form__input"
                                type="file"
                                accept="image/jpeg,image/png,image/gif"
                                disabled=move || uploading.get()
                                on:change=on_avatar.clone()
                            />
                        </label>
                    </div>
                    <label class="profile-form__label">
                        "Name"
                        <input
                            class="profile-form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldMessage errors=errors field="name"/>
                    <label class="profile-form__label">
                        "Location"
                        <input
                            class="profile-form__input"
                            type="text"
                            placeholder="City, country"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Bio"
                        <textarea
                            class="profile-form__input profile-form__input--area"
                            rows="4"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button
                        class="profile-form__submit"
                        type="submit"
                        disabled=move || busy.get() || uploading.get()
                    >
                        {move || if busy.get() { "Saving..." } else { "Save profile" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
