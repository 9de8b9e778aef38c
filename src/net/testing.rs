//! In-memory [`Backend`] used by unit tests.
//!
//! Mirrors the adapter's observable behavior: successful sign-in, OAuth
//! completion and sign-out push session changes through a
//! [`SessionBroadcast`] instead of writing app state directly.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::backend::{Backend, BackendError, SessionBroadcast, SessionEvents, Subscription};
use super::types::{
    AuthSession, NewSkillPost, OAuthProvider, PostAuthor, Profile, ProfileUpsert, SessionChange,
    SignUpOutcome, SkillPost, UserIdentity,
};

/// Object recorded by the fake storage bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub path: String,
    pub content_type: String,
    pub size: usize,
}

#[derive(Default)]
struct FakeState {
    accounts: Vec<(String, String, UserIdentity)>,
    session: Option<AuthSession>,
    profiles: Vec<ProfileUpsert>,
    posts: Vec<SkillPost>,
    oauth_redirects: Vec<(OAuthProvider, String)>,
    objects: Vec<StoredObject>,
    fail_get_session: Option<BackendError>,
    fail_sign_out: Option<BackendError>,
    fail_oauth: Option<BackendError>,
    fail_profile_write: Option<BackendError>,
    fail_insert_post: Option<BackendError>,
    fail_upload: Option<BackendError>,
}

impl FakeState {
    fn author_of(&self, user_id: &str) -> Option<PostAuthor> {
        self.profiles
            .iter()
            .find(|p| p.id == user_id)
            .map(|p| PostAuthor { name: p.name.clone(), avatar_url: p.avatar_url.clone() })
    }

    fn with_author(&self, post: &SkillPost) -> SkillPost {
        SkillPost { author: self.author_of(&post.user_id), ..post.clone() }
    }
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
    broadcast: SessionBroadcast,
}

pub fn identity(id: &str, email: &str) -> UserIdentity {
    UserIdentity { id: id.to_owned(), email: email.to_owned(), metadata: serde_json::Map::new() }
}

pub fn session_for(user: UserIdentity) -> AuthSession {
    AuthSession {
        access_token: format!("access-{}", user.id),
        refresh_token: Some(format!("refresh-{}", user.id)),
        expires_at: None,
        user,
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_account(self, id: &str, email: &str, password: &str) -> Self {
        self.lock()
            .accounts
            .push((email.to_owned(), password.to_owned(), identity(id, email)));
        self
    }

    /// Pretend a previous visit left a persisted session behind.
    pub fn with_persisted_session(self, user: UserIdentity) -> Self {
        self.lock().session = Some(session_for(user));
        self
    }

    pub fn fail_get_session(&self, err: BackendError) {
        self.lock().fail_get_session = Some(err);
    }

    pub fn fail_sign_out(&self, err: BackendError) {
        self.lock().fail_sign_out = Some(err);
    }

    pub fn fail_oauth(&self, err: BackendError) {
        self.lock().fail_oauth = Some(err);
    }

    pub fn fail_profile_write(&self, err: BackendError) {
        self.lock().fail_profile_write = Some(err);
    }

    pub fn fail_insert_post(&self, err: BackendError) {
        self.lock().fail_insert_post = Some(err);
    }

    pub fn fail_upload(&self, err: BackendError) {
        self.lock().fail_upload = Some(err);
    }

    /// Emit a change as if pushed by the backend (e.g. another tab).
    pub fn emit(&self, change: &SessionChange) {
        self.broadcast.emit(change);
    }

    pub fn listener_count(&self) -> usize {
        self.broadcast.listener_count()
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.lock().accounts.iter().any(|(e, _, _)| e == email)
    }

    pub fn profiles(&self) -> Vec<ProfileUpsert> {
        self.lock().profiles.clone()
    }

    pub fn posts(&self) -> Vec<SkillPost> {
        self.lock().posts.clone()
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.lock().objects.clone()
    }

    pub fn oauth_redirects(&self) -> Vec<(OAuthProvider, String)> {
        self.lock().oauth_redirects.clone()
    }

    pub fn current_session(&self) -> Option<AuthSession> {
        self.lock().session.clone()
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn get_session(&self) -> Result<Option<AuthSession>, BackendError> {
        let state = self.lock();
        if let Some(err) = state.fail_get_session.clone() {
            return Err(err);
        }
        Ok(state.session.clone())
    }

    fn on_session_change(&self) -> (Subscription, SessionEvents) {
        self.broadcast.subscribe()
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        let session = {
            let mut state = self.lock();
            let user = state
                .accounts
                .iter()
                .find(|(e, p, _)| e == email && p == password)
                .map(|(_, _, user)| user.clone())
                .ok_or_else(|| BackendError::InvalidCredentials("Invalid login credentials".to_owned()))?;
            let session = session_for(user);
            state.session = Some(session.clone());
            session
        };
        self.broadcast.emit(&SessionChange::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_in_with_oauth(&self, provider: OAuthProvider, redirect_to: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        if let Some(err) = state.fail_oauth.clone() {
            return Err(err);
        }
        state.oauth_redirects.push((provider, redirect_to.to_owned()));
        Ok(())
    }

    async fn complete_oauth(&self, fragment: &str) -> Result<AuthSession, BackendError> {
        let user_id = fragment
            .strip_prefix("access_token=")
            .ok_or_else(|| BackendError::Rejected { status: 400, message: "missing access token".to_owned() })?;
        let session = session_for(identity(user_id, &format!("{user_id}@oauth.test")));
        self.lock().session = Some(session.clone());
        self.broadcast.emit(&SessionChange::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Result<SignUpOutcome, BackendError> {
        let mut state = self.lock();
        if state.accounts.iter().any(|(e, _, _)| e == email) {
            return Err(BackendError::EmailTaken("User already registered".to_owned()));
        }
        if password.len() < 6 {
            return Err(BackendError::WeakPassword("Password should be at least 6 characters".to_owned()));
        }
        let user = UserIdentity {
            id: format!("u-{}", state.accounts.len() + 1),
            email: email.to_owned(),
            metadata,
        };
        state.accounts.push((email.to_owned(), password.to_owned(), user.clone()));
        Ok(SignUpOutcome { user, session: None })
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        {
            let mut state = self.lock();
            if let Some(err) = state.fail_sign_out.clone() {
                return Err(err);
            }
            state.session = None;
        }
        self.broadcast.emit(&SessionChange::signed_out());
        Ok(())
    }

    async fn upsert_profile(&self, profile: &ProfileUpsert) -> Result<(), BackendError> {
        let mut state = self.lock();
        if let Some(err) = state.fail_profile_write.clone() {
            return Err(err);
        }
        state.profiles.retain(|p| p.id != profile.id);
        state.profiles.push(profile.clone());
        Ok(())
    }

    async fn profile_exists(&self, user_id: &str) -> Result<bool, BackendError> {
        Ok(self.lock().profiles.iter().any(|p| p.id == user_id))
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        Ok(self.lock().profiles.iter().find(|p| p.id == user_id).cloned().map(Profile::from))
    }

    async fn insert_post(&self, post: &NewSkillPost) -> Result<(), BackendError> {
        let mut state = self.lock();
        if let Some(err) = state.fail_insert_post.clone() {
            return Err(err);
        }
        let id = format!("p-{}", state.posts.len() + 1);
        state.posts.push(SkillPost {
            id,
            user_id: post.user_id.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            category: post.category.clone(),
            image_url: Some(post.image_url.clone()).filter(|url| !url.is_empty()),
            created_at: None,
            author: None,
        });
        Ok(())
    }

    async fn list_posts(&self, limit: usize) -> Result<Vec<SkillPost>, BackendError> {
        let state = self.lock();
        Ok(state.posts.iter().rev().take(limit).map(|p| state.with_author(p)).collect())
    }

    async fn fetch_post(&self, post_id: &str) -> Result<Option<SkillPost>, BackendError> {
        let state = self.lock();
        Ok(state.posts.iter().find(|p| p.id == post_id).map(|p| state.with_author(p)))
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
        upsert: bool,
    ) -> Result<String, BackendError> {
        let mut state = self.lock();
        if let Some(err) = state.fail_upload.clone() {
            return Err(err);
        }
        let existing = state.objects.iter().position(|o| o.bucket == bucket && o.path == path);
        match (existing, upsert) {
            (Some(_), false) => {
                return Err(BackendError::Rejected { status: 409, message: "The resource already exists".to_owned() });
            }
            (Some(index), true) => {
                state.objects.remove(index);
            }
            (None, _) => {}
        }
        state.objects.push(StoredObject {
            bucket: bucket.to_owned(),
            path: path.to_owned(),
            content_type: content_type.to_owned(),
            size: bytes.len(),
        });
        Ok(format!("https://storage.test/{bucket}/{path}"))
    }
}
