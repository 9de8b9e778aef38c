//! Backend-as-a-service contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every data operation in the app (sessions, profiles, posts) goes through
//! the [`Backend`] trait. The browser build uses
//! [`SupabaseBackend`](super::supabase::SupabaseBackend); tests use an
//! in-crate fake.
//!
//! Session changes are pushed to listeners over unbounded channels, one per
//! subscriber, in the order the backend emits them. [`SessionBroadcast`] is
//! the shared fan-out used by implementations.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures::channel::mpsc;

use super::types::{
    AuthSession, NewSkillPost, OAuthProvider, Profile, ProfileUpsert, SessionChange, SignUpOutcome,
    SkillPost,
};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend could not be reached or the request never completed.
    #[error("network error: {0}")]
    Transport(String),

    /// Wrong email/password combination.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Sign-up rejected because the email is registered already.
    #[error("{0}")]
    EmailTaken(String),

    /// Sign-up rejected by the backend's password policy.
    #[error("{0}")]
    WeakPassword(String),

    /// The operation needs a signed-in user.
    #[error("User not authenticated")]
    NotAuthenticated,

    /// A payload could not be encoded or decoded.
    #[error("malformed payload: {0}")]
    Serialization(String),

    /// Any other refusal (validation, row-level security, ...).
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl BackendError {
    /// Text for a transient notification. Falls back to `fallback` when the
    /// backend supplied no message.
    pub fn user_message(&self, fallback: &str) -> String {
        let text = self.to_string();
        if text.trim().is_empty() { fallback.to_owned() } else { text }
    }
}

// =============================================================================
// SESSION BROADCAST
// =============================================================================

/// Receiving end of a session-change subscription.
pub type SessionEvents = mpsc::UnboundedReceiver<SessionChange>;

#[derive(Default)]
struct BroadcastInner {
    next_id: u64,
    listeners: Vec<(u64, mpsc::UnboundedSender<SessionChange>)>,
}

/// Ordered fan-out of session changes to registered listeners.
#[derive(Clone, Default)]
pub struct SessionBroadcast {
    inner: Arc<Mutex<BroadcastInner>>,
}

impl SessionBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BroadcastInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener. Events emitted afterwards are delivered in order.
    pub fn subscribe(&self) -> (Subscription, SessionEvents) {
        let (tx, rx) = mpsc::unbounded();
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, tx));
        (Subscription { id, broadcast: Some(self.clone()) }, rx)
    }

    /// Deliver `change` to every live listener. Listeners whose receiver was
    /// dropped are pruned.
    pub fn emit(&self, change: &SessionChange) {
        self.lock()
            .listeners
            .retain(|(_, tx)| tx.unbounded_send(change.clone()).is_ok());
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn remove(&self, id: u64) {
        self.lock().listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Handle for a registered session listener.
///
/// Unsubscribing (explicitly or on drop) closes the listener's channel, which
/// ends any task draining it.
pub struct Subscription {
    id: u64,
    broadcast: Option<SessionBroadcast>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(broadcast) = self.broadcast.take() {
            broadcast.remove(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// BACKEND
// =============================================================================

/// Contract of the hosted backend.
///
/// Futures are `?Send` because browser HTTP futures are not `Send`; the
/// implementations themselves are shareable so they can live in Leptos
/// context.
#[async_trait(?Send)]
pub trait Backend: Send + Sync {
    /// Look up an existing session (e.g. persisted by a previous visit).
    async fn get_session(&self) -> Result<Option<AuthSession>, BackendError>;

    /// Register a durable session-change listener.
    fn on_session_change(&self) -> (Subscription, SessionEvents);

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError>;

    /// Start a redirect-based sign-in. On success control leaves the app.
    async fn sign_in_with_oauth(&self, provider: OAuthProvider, redirect_to: &str) -> Result<(), BackendError>;

    /// Finish an OAuth sign-in from the callback URL fragment.
    async fn complete_oauth(&self, fragment: &str) -> Result<AuthSession, BackendError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Result<SignUpOutcome, BackendError>;

    async fn sign_out(&self) -> Result<(), BackendError>;

    async fn upsert_profile(&self, profile: &ProfileUpsert) -> Result<(), BackendError>;

    async fn profile_exists(&self, user_id: &str) -> Result<bool, BackendError>;

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError>;

    async fn insert_post(&self, post: &NewSkillPost) -> Result<(), BackendError>;

    /// Newest posts first.
    async fn list_posts(&self, limit: usize) -> Result<Vec<SkillPost>, BackendError>;

    async fn fetch_post(&self, post_id: &str) -> Result<Option<SkillPost>, BackendError>;

    /// Store `bytes` at `bucket/path` and return the object's public URL.
    ///
    /// With `upsert` unset an existing object at `path` is a rejection.
    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
        upsert: bool,
    ) -> Result<String, BackendError>;
}

/// Cloneable backend handle provided through Leptos context.
#[derive(Clone)]
pub struct BackendHandle(Arc<dyn Backend>);

impl BackendHandle {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self(backend)
    }
}

impl std::ops::Deref for BackendHandle {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
