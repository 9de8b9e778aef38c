//! Auth operations invoked by the sign-in, sign-up and navbar views.
//!
//! DESIGN
//! ======
//! Each operation follows one pattern: call the backend, stop on failure,
//! otherwise describe the follow-up (where to navigate, what to announce) as
//! an [`AuthOutcome`]. Operations never write `AuthState`; the session store
//! picks up the backend's session change. Views own the actual navigation
//! and toast so the operations stay testable without a router.
//!
//! ERROR HANDLING
//! ==============
//! Errors are returned unchanged. [`report`] turns a result into exactly one
//! toast. Nothing is retried.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::types::{OAuthProvider, ProfileUpsert};
use crate::routes;
use crate::state::intent::NavigationIntent;
use crate::state::toast::ToastState;

pub const SIGNED_IN_NOTICE: &str = "Logged in successfully";
pub const SIGNED_UP_NOTICE: &str = "Account created successfully! Please check your email to verify your account.";
pub const SIGNED_OUT_NOTICE: &str = "Logged out successfully";

/// What the view should do after a successful operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    /// Path to navigate to, replacing the current history entry.
    pub redirect: String,
    /// Success toast text.
    pub notice: &'static str,
}

/// Sign in with email and password.
///
/// On success the pending navigation intent is consumed; without one the
/// visitor lands on the home page. On failure the intent is left in place so
/// a retry still returns to it.
///
/// # Errors
///
/// Returns the backend error (typically [`BackendError::InvalidCredentials`]).
pub async fn sign_in_with_password(
    backend: &dyn Backend,
    intent: &NavigationIntent,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, BackendError> {
    backend.sign_in_with_password(email, password).await?;
    let redirect = intent.take().unwrap_or_else(|| routes::HOME.to_owned());
    log::info!("signed in, continuing to {redirect}");
    Ok(AuthOutcome { redirect, notice: SIGNED_IN_NOTICE })
}

/// Callback URL handed to the identity provider.
pub fn oauth_redirect_target(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), routes::AUTH_CALLBACK)
}

/// Start a redirect-based sign-in. On success the browser leaves the app.
///
/// # Errors
///
/// Returns the backend error when the flow cannot be initiated.
pub async fn sign_in_with_oauth(
    backend: &dyn Backend,
    provider: OAuthProvider,
    origin: &str,
) -> Result<(), BackendError> {
    let redirect_to = oauth_redirect_target(origin);
    log::debug!("starting {} sign-in, callback {redirect_to}", provider.as_str());
    backend.sign_in_with_oauth(provider, &redirect_to).await
}

/// Create an account, then its profile row.
///
/// The identity is not rolled back if the profile write fails; the error is
/// returned and the visitor stays on the sign-up page.
///
/// # Errors
///
/// Returns the sign-up error, or the profile write error.
pub async fn sign_up_with_email(
    backend: &dyn Backend,
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<AuthOutcome, BackendError> {
    let mut metadata = serde_json::Map::new();
    metadata.insert("name".to_owned(), serde_json::Value::String(display_name.to_owned()));
    let outcome = backend.sign_up(email, password, metadata).await?;

    let profile = ProfileUpsert {
        id: outcome.user.id.clone(),
        name: display_name.to_owned(),
        location: None,
        bio: None,
        avatar_url: None,
    };
    if let Err(e) = backend.upsert_profile(&profile).await {
        log::warn!("account {} created without a profile row: {e}", outcome.user.id);
        return Err(e);
    }

    Ok(AuthOutcome { redirect: routes::EDIT_PROFILE.to_owned(), notice: SIGNED_UP_NOTICE })
}

/// Sign out and drop any pending navigation intent.
///
/// # Errors
///
/// Returns the backend error; the session is then left as it was.
pub async fn sign_out(backend: &dyn Backend, intent: &NavigationIntent) -> Result<AuthOutcome, BackendError> {
    backend.sign_out().await?;
    intent.discard();
    Ok(AuthOutcome { redirect: routes::HOME.to_owned(), notice: SIGNED_OUT_NOTICE })
}

/// Announce the result of an operation with exactly one toast.
///
/// Returns the redirect to follow, if the operation succeeded.
pub fn report(toasts: &mut ToastState, result: Result<AuthOutcome, BackendError>, fallback: &str) -> Option<String> {
    match result {
        Ok(outcome) => {
            toasts.success(outcome.notice);
            Some(outcome.redirect)
        }
        Err(e) => {
            toasts.error(e.user_message(fallback));
            None
        }
    }
}
