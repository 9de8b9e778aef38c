//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` validates configuration, builds the backend adapter, provides the
//! shared contexts and starts the session store:
//!
//! - `RwSignal<AuthState>` written only by the session store,
//! - `BackendHandle` for pages and services,
//! - `NavigationIntent` shared by the route guard and sign-in,
//! - `RwSignal<ToastState>` rendered by the `Toaster`.
//!
//! The session listener is registered before the initial session check and
//! unregistered when the root owner is cleaned up.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::config::BackendConfig;
use crate::net::backend::BackendHandle;
use crate::net::supabase::SupabaseBackend;
use crate::pages::{
    auth_callback::AuthCallbackPage, create_post::CreatePostPage, edit_profile::EditProfilePage,
    explore::ExplorePage, home::HomePage, post_detail::PostDetailPage, profile::ProfilePage, sign_in::SignInPage,
    sign_up::SignUpPage,
};
use crate::services::session::SessionStore;
use crate::state::{auth::AuthState, intent::NavigationIntent, toast::ToastState};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match BackendConfig::from_build_env() {
        Ok(config) => view! { <SkillLink config=config/> }.into_any(),
        Err(e) => {
            log::error!("configuration error: {e}");
            view! { <ConfigErrorScreen message=e.to_string()/> }.into_any()
        }
    }
}

#[component]
fn SkillLink(config: BackendConfig) -> impl IntoView {
    let backend = BackendHandle::new(Arc::new(SupabaseBackend::new(config)));
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(backend.clone());
    provide_context(NavigationIntent::new());
    provide_context(toasts);

    let store = SessionStore::new(auth, backend);
    let (subscription, events) = store.subscribe();
    #[cfg(feature = "csr")]
    {
        let initial = store.clone();
        leptos::task::spawn_local(async move { initial.initialize().await });
        leptos::task::spawn_local(async move { store.run(events).await });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, events);
    }
    on_cleanup(move || subscription.unsubscribe());

    view! {
        <Title text="SkillLink"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=SignInPage/>
                    <Route path=StaticSegment("register") view=SignUpPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                    <Route
                        path=StaticSegment("explore")
                        view=|| view! { <ProtectedRoute><ExplorePage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("profile"), StaticSegment("edit"))
                        view=|| view! { <ProtectedRoute><EditProfilePage/></ProtectedRoute> }
                    />
                    <Route path=(StaticSegment("profile"), ParamSegment("user_id")) view=ProfilePage/>
                    <Route
                        path=StaticSegment("create-post")
                        view=|| view! { <ProtectedRoute><CreatePostPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("post"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><PostDetailPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}

#[component]
fn ConfigErrorScreen(message: String) -> impl IntoView {
    view! {
        <Title text="SkillLink - configuration error"/>
        <div class="config-error">
            <h1>"SkillLink is not configured"</h1>
            <p class="config-error__detail">{message}</p>
            <p>
                "Set " <code>{crate::config::URL_VAR}</code> " and " <code>{crate::config::ANON_KEY_VAR}</code>
                " when building the app."
            </p>
        </div>
    }
}
