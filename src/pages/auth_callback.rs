//! OAuth return page.
//!
//! Completes the provider sign-in from the URL fragment, then continues to
//! the home page. The session store learns about the new identity through
//! the backend's session change.

use leptos::prelude::*;

use crate::net::backend::BackendHandle;
use crate::routes;
use crate::services::auth::SIGNED_IN_NOTICE;
use crate::state::toast::ToastState;
use crate::util::auth::install_redirect;
use crate::util::location;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let backend = expect_context::<BackendHandle>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect);

    let fragment = location::hash_fragment();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = match fragment {
            Some(fragment) => backend.complete_oauth(&fragment).await.map(|_| ()),
            None => Err(crate::net::backend::BackendError::Rejected {
                status: 400,
                message: "Authentication failed".to_owned(),
            }),
        };
        let target = match result {
            Ok(()) => {
                toasts.try_update(|t| t.success(SIGNED_IN_NOTICE));
                routes::HOME
            }
            Err(e) => {
                log::warn!("oauth completion failed: {e}");
                toasts.try_update(|t| t.error(e.user_message("Authentication failed")));
                routes::SIGN_IN
            }
        };
        redirect.try_set(Some(target.to_owned()));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (backend, toasts, fragment, redirect, routes::HOME, SIGNED_IN_NOTICE);
    }

    view! {
        <div class="route-loading" aria-busy="true">
            <span class="route-loading__spinner"></span>
            <p>"Completing sign-in..."</p>
        </div>
    }
}
