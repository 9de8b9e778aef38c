//! Transient notification stack.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[cfg(feature = "csr")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(4);

/// Renders queued toasts; each dismisses itself after a few seconds.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <ToastItem toast=toast toasts=toasts/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_LIFETIME).await;
        toasts.try_update(|s| s.dismiss(id));
    });

    view! {
        <div class=format!("toast {}", toast.kind.css_modifier())>
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
