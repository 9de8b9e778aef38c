use leptos::prelude::*;

use crate::util::validation::{FieldError, message_for};

/// Inline validation message for one form field.
#[component]
pub fn FieldMessage(errors: RwSignal<Vec<FieldError>>, field: &'static str) -> impl IntoView {
    move || errors.with(|errs| message_for(errs, field)).map(|text| view! { <p class="field-error">{text}</p> })
}
