//! Files picked through `<input type="file">`, browser build only.

use wasm_bindgen::JsCast;

use crate::net::backend::BackendError;
use crate::services::uploads::ImageFile;

fn input_of(ev: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()
}

/// First file chosen in the input that fired `ev`.
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    input_of(ev)?.files()?.get(0)
}

/// Clear the input so choosing the same file again fires `change`.
pub fn reset_input(ev: &web_sys::Event) {
    if let Some(input) = input_of(ev) {
        input.set_value("");
    }
}

/// Read `file` into memory.
///
/// # Errors
///
/// [`BackendError::Transport`] when the browser refuses to read it.
pub async fn read_image(file: web_sys::File) -> Result<ImageFile, BackendError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| BackendError::Transport(format!("could not read {}: {e:?}", file.name())))?;
    Ok(ImageFile {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
