//! Read-only access to `window.location`.
//!
//! Outside the browser build every helper returns `None`.

/// Scheme, host and port of the current page.
pub fn origin() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// URL fragment without the leading `#`, if non-empty.
pub fn hash_fragment() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        let fragment = hash.trim_start_matches('#');
        (!fragment.is_empty()).then(|| fragment.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
