//! Create-post form with locally persisted draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every edit writes the whole draft to `localStorage` so a reload restores
//! it. The draft is cleared only after the backend accepts the post, or when
//! the visitor clears it explicitly.
//!
//! A picked image is uploaded right away; the draft keeps only its public
//! URL.

use leptos::prelude::*;

use crate::components::field_message::FieldMessage;
use crate::net::backend::BackendHandle;
use crate::routes;
use crate::services::posts;
#[cfg(feature = "csr")]
use crate::services::uploads::{self, IMAGE_UPLOADED_NOTICE};
use crate::state::auth::AuthState;
use crate::state::draft::{DraftField, DraftSlot, PostDraft};
use crate::state::toast::ToastState;
use crate::util::auth::install_redirect;
#[cfg(feature = "csr")]
use crate::util::file;
use crate::util::storage::BrowserStorage;
use crate::util::validation::{FieldError, POST_CATEGORIES, validate_post};

fn slot() -> DraftSlot<BrowserStorage> {
    DraftSlot::new(BrowserStorage)
}

#[component]
pub fn CreatePostForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<BackendHandle>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let draft = RwSignal::new(slot().load());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect);

    let edit = move |field: DraftField, value: String| {
        draft.update(|d| d.set(field, value));
        slot().save(&draft.get_untracked());
    };

    // Also called after an await, when the form may be gone.
    let set_image = move |url: String| {
        if draft.try_update(|d| d.set(DraftField::ImageUrl, url)).is_some() {
            slot().save(&draft.get_untracked());
        }
    };

    let upload_backend = backend.clone();
    let on_image = move |ev: leptos::ev::Event| {
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
                    Ok(image) => uploads::upload_post_image(&*backend, user.as_ref(), image, file::now_millis()).await,
                    Err(e) => Err(e),
                };
                match uploaded {
                    Ok(url) => {
                        set_image(url);
                        toasts.try_update(|t| t.success(IMAGE_UPLOADED_NOTICE));
                    }
                    Err(e) => {
                        log::warn!("post image upload failed: {e}");
                        toasts.try_update(|t| t.error(uploads::upload_failure_message(&e)));
                    }
                }
                uploading.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&ev, &upload_backend, set_image);
        }
    };

    let on_clear = move |_| {
        draft.set(slot().clear());
        errors.set(Vec::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || uploading.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(field_errors) = validate_post(&current) {
            errors.set(field_errors);
            return;
        }
        errors.set(Vec::new());
        busy.set(true);

        let backend = backend.clone();
        let user = auth.get_untracked().user;
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match posts::submit_post(&*backend, user.as_ref(), &current).await {
                Ok(()) => {
                    draft.try_set(slot().clear());
                    toasts.try_update(|t| t.success(posts::POST_CREATED_NOTICE));
                    redirect.try_set(Some(routes::EXPLORE.to_owned()));
                }
                Err(e) => {
                    log::warn!("post submission failed: {e}");
                    toasts.try_update(|t| t.error(e.user_message("Failed to create post")));
                }
            }
            busy.try_set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, user, current, toasts, redirect);
            busy.set(false);
        }
    };

    let value = move |field: DraftField| move || draft.with(|d| d.get(field).to_owned());

    view! {
        <form class="post-form" on:submit=on_submit>
            <label class="post-form__label">
                "Title"
                <input
                    class="post-form__input"
                    type="text"
                    prop:value=value(DraftField::Title)
                    on:input=move |ev| edit(DraftField::Title, event_target_value(&ev))
                />
            </label>
            <FieldMessage errors=errors field="title"/>

            <label class="post-form__label">
                "Description"
                <textarea
                    class="post-form__input post-form__input--area"
                    rows="5"
                    prop:value=value(DraftField::Description)
                    on:input=move |ev| edit(DraftField::Description, event_target_value(&ev))
                ></textarea>
            </label>
            <FieldMessage errors=errors field="description"/>

            <label class="post-form__label">
                "Category"
                <select
                    class="post-form__input"
                    prop:value=value(DraftField::Category)
                    on:change=move |ev| edit(DraftField::Category, event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {POST_CATEGORIES
                        .iter()
                        .map(|category| view! { <option value=*category>{*category}</option> })
                        .collect_view()}
                </select>
            </label>
            <FieldMessage errors=errors field="category"/>

            <label class="post-form__label">
                "Image (optional)"
                <input
                    class="post-form__input"
                    type="file"
                    accept="image/*"
                    disabled=move || uploading.get()
                    on:change=on_image
                />
            </label>
            <Show when=move || uploading.get()>
                <span class="post-form__uploading">"Uploading..."</span>
            </Show>
            <Show when=move || draft.with(|d| !d.get(DraftField::ImageUrl).is_empty())>
                <div class="post-form__preview">
                    <img src=value(DraftField::ImageUrl) alt="Post image preview"/>
                    <button
                        class="post-form__remove-image"
                        type="button"
                        on:click=move |_| edit(DraftField::ImageUrl, String::new())
                    >
                        "Remove image"
                    </button>
                </div>
            </Show>

            <div class="post-form__actions">
                <Show when=move || draft.with(PostDraft::has_content)>
                    <span class="post-form__saved">"Draft saved"</span>
                    <button class="post-form__clear" type="button" on:click=on_clear>
                        "Clear draft"
                    </button>
                </Show>
                <button class="post-form__submit" type="submit" disabled=move || busy.get() || uploading.get()>
                    {move || if busy.get() { "Posting..." } else { "Post skill" }}
                </button>
            </div>
        </form>
    }
}
