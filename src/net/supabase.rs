//! Hosted backend adapter (Supabase auth + REST gateway).
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, session persisted in
//! `localStorage` and refreshed before any request once it nears expiry.
//! Other builds: stubs that report the backend as
//! unreachable, so the crate still compiles and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified from the body's `error_code`/`error`
//! fields into [`BackendError`]. The local session is only changed after
//! the backend confirmed the change, and every change is pushed through the
//! [`SessionBroadcast`] so the session store remains the single writer of
//! app state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use async_trait::async_trait;
#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

use super::backend::{Backend, BackendError, SessionBroadcast, SessionEvents, Subscription};
#[cfg(any(test, feature = "csr"))]
use super::types::UserIdentity;
use super::types::{AuthSession, NewSkillPost, OAuthProvider, Profile, ProfileUpsert, SignUpOutcome, SkillPost};
#[cfg(feature = "csr")]
use super::types::SessionChange;
use crate::config::BackendConfig;

/// `localStorage` key holding the persisted [`AuthSession`].
pub const SESSION_STORAGE_KEY: &str = "skilllink_auth_session";

pub const PROFILES_TABLE: &str = "profiles";
pub const POSTS_TABLE: &str = "skill_posts";

/// Post columns plus the author's profile, embedded through the foreign key.
pub const POST_SELECT: &str = "*,profiles(name,avatar_url)";

/// A stored token this close to expiry is refreshed before use.
#[cfg(any(test, feature = "csr"))]
const REFRESH_MARGIN_SECS: i64 = 30;

// =============================================================================
// PURE HELPERS
// =============================================================================

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str, query: &[(&str, &str)]) -> Result<String, BackendError> {
    let mut url = url::Url::parse(&format!("{base}{path}"))
        .map_err(|e| BackendError::Transport(format!("invalid backend url: {e}")))?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter().copied());
    }
    Ok(url.into())
}

#[cfg(any(test, feature = "csr"))]
fn token_url(base: &str, grant_type: &str) -> Result<String, BackendError> {
    endpoint(base, "/auth/v1/token", &[("grant_type", grant_type)])
}

#[cfg(any(test, feature = "csr"))]
fn signup_url(base: &str, redirect_to: &str) -> Result<String, BackendError> {
    endpoint(base, "/auth/v1/signup", &[("redirect_to", redirect_to)])
}

#[cfg(any(test, feature = "csr"))]
fn authorize_url(base: &str, provider: OAuthProvider, redirect_to: &str) -> Result<String, BackendError> {
    endpoint(
        base,
        "/auth/v1/authorize",
        &[
            ("provider", provider.as_str()),
            ("redirect_to", redirect_to),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
}

#[cfg(any(test, feature = "csr"))]
fn rest_url(base: &str, table: &str, query: &[(&str, &str)]) -> Result<String, BackendError> {
    endpoint(base, &format!("/rest/v1/{table}"), query)
}

#[cfg(any(test, feature = "csr"))]
fn posts_url(base: &str, limit: usize) -> Result<String, BackendError> {
    let limit = limit.to_string();
    rest_url(base, POSTS_TABLE, &[("select", POST_SELECT), ("order", "created_at.desc"), ("limit", limit.as_str())])
}

#[cfg(any(test, feature = "csr"))]
fn post_url(base: &str, post_id: &str) -> Result<String, BackendError> {
    let filter = format!("eq.{post_id}");
    rest_url(base, POSTS_TABLE, &[("id", filter.as_str()), ("select", POST_SELECT), ("limit", "1")])
}

#[cfg(any(test, feature = "csr"))]
fn profile_url(base: &str, user_id: &str) -> Result<String, BackendError> {
    let filter = format!("eq.{user_id}");
    rest_url(base, PROFILES_TABLE, &[("id", filter.as_str()), ("select", "*"), ("limit", "1")])
}

/// Storage object endpoint. `public` selects the unauthenticated download
/// path; `path` may contain `/` separated folders.
#[cfg(any(test, feature = "csr"))]
fn storage_url(base: &str, public: bool, bucket: &str, path: &str) -> Result<String, BackendError> {
    let mut url = url::Url::parse(base).map_err(|e| BackendError::Transport(format!("invalid backend url: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| BackendError::Transport("invalid backend url".to_owned()))?;
        segments.pop_if_empty().extend(["storage", "v1", "object"]);
        if public {
            segments.push("public");
        }
        segments.push(bucket).extend(path.split('/'));
    }
    Ok(url.into())
}

/// What to do with the session found in storage.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, PartialEq)]
enum StoredSession {
    Valid(AuthSession),
    Refresh(String),
    Stale,
}

#[cfg(any(test, feature = "csr"))]
fn assess_stored(session: AuthSession, now_secs: i64) -> StoredSession {
    if !session.is_expired(now_secs + REFRESH_MARGIN_SECS) {
        return StoredSession::Valid(session);
    }
    match session.refresh_token.clone().filter(|t| !t.is_empty()) {
        Some(token) => StoredSession::Refresh(token),
        None if session.is_expired(now_secs) => StoredSession::Stale,
        None => StoredSession::Valid(session),
    }
}

/// Map a failed response to a [`BackendError`].
#[cfg(any(test, feature = "csr"))]
fn classify_error(status: u16, body: &str) -> BackendError {
    let json: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
    let field = |name: &str| json.get(name).and_then(serde_json::Value::as_str).map(str::to_owned);

    let code = field("error_code").or_else(|| field("error")).unwrap_or_default();
    let message = field("msg")
        .or_else(|| field("error_description"))
        .or_else(|| field("message"))
        .or_else(|| field("error"))
        .unwrap_or_else(|| format!("request failed with status {status}"));

    match code.as_str() {
        "invalid_credentials" | "invalid_grant" => BackendError::InvalidCredentials(message),
        "user_already_exists" | "email_exists" => BackendError::EmailTaken(message),
        "weak_password" => BackendError::WeakPassword(message),
        _ if message.contains("already registered") => BackendError::EmailTaken(message),
        _ => BackendError::Rejected { status, message },
    }
}

/// Token grant response from `/auth/v1/token`.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: UserIdentity,
}

#[cfg(any(test, feature = "csr"))]
impl TokenResponse {
    fn into_session(self, now_secs: i64) -> AuthSession {
        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: self.expires_at.or(self.expires_in.map(|secs| now_secs + secs)),
            user: self.user,
        }
    }
}

/// Sign-up returns a full session when email confirmation is disabled, and
/// a bare user (top level or under `user`) when it is pending.
#[cfg(any(test, feature = "csr"))]
fn parse_signup_response(body: &str, now_secs: i64) -> Result<SignUpOutcome, BackendError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| BackendError::Serialization(e.to_string()))?;
    let decode_err = |e: serde_json::Error| BackendError::Serialization(e.to_string());

    if value.get("access_token").is_some() {
        let token: TokenResponse = serde_json::from_value(value).map_err(decode_err)?;
        let session = token.into_session(now_secs);
        return Ok(SignUpOutcome { user: session.user.clone(), session: Some(session) });
    }
    let user_value = match value.get("user") {
        Some(user) if user.is_object() => user.clone(),
        _ => value,
    };
    let user: UserIdentity = serde_json::from_value(user_value).map_err(decode_err)?;
    Ok(SignUpOutcome { user, session: None })
}

/// Tokens carried in the OAuth callback URL fragment.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, PartialEq, Eq)]
struct FragmentTokens {
    access_token: String,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
}

#[cfg(any(test, feature = "csr"))]
fn parse_oauth_fragment(fragment: &str, now_secs: i64) -> Result<FragmentTokens, BackendError> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_at = None;
    let mut expires_in = None;
    let mut error = None;
    let mut error_description = None;

    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        let value = value.into_owned();
        match key.as_ref() {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "error" => error = Some(value),
            "error_description" => error_description = Some(value),
            _ => {}
        }
    }

    if let Some(err) = error {
        return Err(BackendError::Rejected { status: 400, message: error_description.unwrap_or(err) });
    }
    let access_token = access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| BackendError::Rejected { status: 400, message: "Missing access token in callback".to_owned() })?;
    Ok(FragmentTokens {
        access_token,
        refresh_token,
        expires_at: expires_at.or(expires_in.map(|secs| now_secs + secs)),
    })
}

/// Profile upsert payload with the server-side `updated_at` column.
#[cfg(any(test, feature = "csr"))]
fn profile_payload(profile: &ProfileUpsert, updated_at: &str) -> Result<serde_json::Value, BackendError> {
    let mut value = serde_json::to_value(profile).map_err(|e| BackendError::Serialization(e.to_string()))?;
    if let Some(map) = value.as_object_mut() {
        map.insert("updated_at".to_owned(), serde_json::Value::String(updated_at.to_owned()));
    }
    Ok(value)
}

// =============================================================================
// ADAPTER
// =============================================================================

/// [`Backend`] implementation over the hosted REST API.
pub struct SupabaseBackend {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    config: BackendConfig,
    broadcast: SessionBroadcast,
}

impl SupabaseBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config, broadcast: SessionBroadcast::new() }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{RequestBuilder, Response};

    use super::*;
    use crate::util::storage::{BrowserStorage, KeyValueStorage, load_json, save_json};

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn now_secs() -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }

    pub(super) fn now_iso() -> String {
        String::from(js_sys::Date::new_0().to_iso_string())
    }

    pub(super) fn transport(e: gloo_net::Error) -> BackendError {
        log::warn!("backend request failed: {e}");
        BackendError::Transport(e.to_string())
    }

    pub(super) fn encode(e: gloo_net::Error) -> BackendError {
        BackendError::Serialization(e.to_string())
    }

    /// Body text of a 2xx response, or the classified error.
    pub(super) async fn read_body(resp: Response) -> Result<String, BackendError> {
        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;
        if (200..300).contains(&status) { Ok(body) } else { Err(classify_error(status, &body)) }
    }

    pub(super) fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, BackendError> {
        serde_json::from_str(body).map_err(|e| BackendError::Serialization(e.to_string()))
    }

    impl SupabaseBackend {
        pub(super) fn stored_session(&self) -> Option<AuthSession> {
            match load_json::<AuthSession>(&BrowserStorage, SESSION_STORAGE_KEY) {
                Ok(session) => session,
                Err(e) => {
                    log::debug!("discarding unreadable stored session: {e}");
                    BrowserStorage.remove_item(SESSION_STORAGE_KEY);
                    None
                }
            }
        }

        pub(super) fn persist(&self, session: &AuthSession) {
            save_json(&BrowserStorage, SESSION_STORAGE_KEY, session);
        }

        pub(super) fn forget(&self) {
            BrowserStorage.remove_item(SESSION_STORAGE_KEY);
        }

        pub(super) fn emit(&self, change: &SessionChange) {
            self.broadcast.emit(change);
        }

        /// Session cleared locally; listeners see a sign-out.
        pub(super) fn end_session(&self) {
            self.forget();
            self.emit(&SessionChange::signed_out());
        }

        /// The stored session, refreshed first when its token is (nearly)
        /// expired. A refused refresh ends the session.
        pub(super) async fn fresh_session(&self) -> Result<Option<AuthSession>, BackendError> {
            let Some(stored) = self.stored_session() else {
                return Ok(None);
            };
            let refresh_token = match assess_stored(stored, now_secs()) {
                StoredSession::Valid(session) => return Ok(Some(session)),
                StoredSession::Stale => {
                    self.end_session();
                    return Ok(None);
                }
                StoredSession::Refresh(token) => token,
            };
            match self
                .grant("refresh_token", &serde_json::json!({ "refresh_token": refresh_token }))
                .await
            {
                Ok(session) => {
                    self.persist(&session);
                    self.emit(&SessionChange::token_refreshed(session.clone()));
                    Ok(Some(session))
                }
                Err(BackendError::Transport(e)) => Err(BackendError::Transport(e)),
                Err(e) => {
                    // Another request may have rotated the token meanwhile.
                    if let Some(StoredSession::Valid(current)) =
                        self.stored_session().map(|s| assess_stored(s, now_secs()))
                    {
                        return Ok(Some(current));
                    }
                    log::debug!("stored session could not be refreshed: {e}");
                    self.end_session();
                    Ok(None)
                }
            }
        }

        /// Attach `apikey` and a bearer token (fresh user session, else anon key).
        pub(super) async fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, BackendError> {
            let bearer = self
                .fresh_session()
                .await?
                .map_or_else(|| self.config.anon_key.clone(), |s| s.access_token);
            Ok(builder
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {bearer}")))
        }

        pub(super) async fn grant(&self, grant_type: &str, body: &serde_json::Value) -> Result<AuthSession, BackendError> {
            let url = token_url(&self.config.url, grant_type)?;
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.anon_key)
                .json(body)
                .map_err(encode)?
                .send()
                .await
                .map_err(transport)?;
            let token: TokenResponse = decode(&read_body(resp).await?)?;
            Ok(token.into_session(now_secs()))
        }

        pub(super) async fn fetch_user(&self, access_token: &str) -> Result<UserIdentity, BackendError> {
            let url = endpoint(&self.config.url, "/auth/v1/user", &[])?;
            let resp = gloo_net::http::Request::get(&url)
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await
                .map_err(transport)?;
            decode(&read_body(resp).await?)
        }

        pub(super) fn origin() -> Result<String, BackendError> {
            web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .ok_or_else(|| BackendError::Transport("no browser window".to_owned()))
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> BackendError {
    BackendError::Transport("backend not available outside the browser".to_owned())
}

#[async_trait(?Send)]
impl Backend for SupabaseBackend {
    async fn get_session(&self) -> Result<Option<AuthSession>, BackendError> {
        #[cfg(feature = "csr")]
        {
            self.fresh_session().await
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn on_session_change(&self) -> (Subscription, SessionEvents) {
        self.broadcast.subscribe()
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        #[cfg(feature = "csr")]
        {
            let session = self
                .grant("password", &serde_json::json!({ "email": email, "password": password }))
                .await?;
            self.persist(&session);
            self.emit(&SessionChange::signed_in(session.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(unavailable())
        }
    }

    async fn sign_in_with_oauth(&self, provider: OAuthProvider, redirect_to: &str) -> Result<(), BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = authorize_url(&self.config.url, provider, redirect_to)?;
            let window = web_sys::window().ok_or_else(|| BackendError::Transport("no browser window".to_owned()))?;
            window
                .location()
                .set_href(&url)
                .map_err(|_| BackendError::Transport("could not start the sign-in redirect".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (provider, redirect_to);
            Err(unavailable())
        }
    }

    async fn complete_oauth(&self, fragment: &str) -> Result<AuthSession, BackendError> {
        #[cfg(feature = "csr")]
        {
            let tokens = parse_oauth_fragment(fragment, browser::now_secs())?;
            let user = self.fetch_user(&tokens.access_token).await?;
            let session = AuthSession {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                expires_at: tokens.expires_at,
                user,
            };
            self.persist(&session);
            self.emit(&SessionChange::signed_in(session.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = fragment;
            Err(unavailable())
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Result<SignUpOutcome, BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_url(&self.config.url, &Self::origin()?)?;
            let payload = serde_json::json!({ "email": email, "password": password, "data": metadata });
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.anon_key)
                .json(&payload)
                .map_err(browser::encode)?
                .send()
                .await
                .map_err(browser::transport)?;
            let outcome = parse_signup_response(&browser::read_body(resp).await?, browser::now_secs())?;
            if let Some(session) = &outcome.session {
                self.persist(session);
                self.emit(&SessionChange::signed_in(session.clone()));
            }
            Ok(outcome)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password, metadata);
            Err(unavailable())
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        #[cfg(feature = "csr")]
        {
            if let Some(session) = self.stored_session() {
                let url = endpoint(&self.config.url, "/auth/v1/logout", &[])?;
                let resp = gloo_net::http::Request::post(&url)
                    .header("apikey", &self.config.anon_key)
                    .header("Authorization", &format!("Bearer {}", session.access_token))
                    .send()
                    .await
                    .map_err(browser::transport)?;
                // 401: the token is already invalid, which is what we want.
                if resp.status() != 401 {
                    browser::read_body(resp).await?;
                }
            }
            self.forget();
            self.emit(&SessionChange::signed_out());
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn upsert_profile(&self, profile: &ProfileUpsert) -> Result<(), BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = rest_url(&self.config.url, PROFILES_TABLE, &[])?;
            let payload = profile_payload(profile, &browser::now_iso())?;
            let resp = self
                .authorize(gloo_net::http::Request::post(&url))
                .await?
                .header("Prefer", "resolution=merge-duplicates,return=minimal")
                .json(&payload)
                .map_err(browser::encode)?
                .send()
                .await
                .map_err(browser::transport)?;
            browser::read_body(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = profile;
            Err(unavailable())
        }
    }

    async fn profile_exists(&self, user_id: &str) -> Result<bool, BackendError> {
        #[cfg(feature = "csr")]
        {
            let filter = format!("eq.{user_id}");
            let url = rest_url(&self.config.url, PROFILES_TABLE, &[("id", filter.as_str()), ("select", "id")])?;
            let resp = self
                .authorize(gloo_net::http::Request::get(&url))
                .await?
                .send()
                .await
                .map_err(browser::transport)?;
            let rows: Vec<serde_json::Value> = browser::decode(&browser::read_body(resp).await?)?;
            Ok(!rows.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user_id;
            Err(unavailable())
        }
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = profile_url(&self.config.url, user_id)?;
            let resp = self
                .authorize(gloo_net::http::Request::get(&url))
                .await?
                .send()
                .await
                .map_err(browser::transport)?;
            let rows: Vec<Profile> = browser::decode(&browser::read_body(resp).await?)?;
            Ok(rows.into_iter().next())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user_id;
            Err(unavailable())
        }
    }

    async fn insert_post(&self, post: &NewSkillPost) -> Result<(), BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = rest_url(&self.config.url, POSTS_TABLE, &[])?;
            let resp = self
                .authorize(gloo_net::http::Request::post(&url))
                .await?
                .header("Prefer", "return=minimal")
                .json(post)
                .map_err(browser::encode)?
                .send()
                .await
                .map_err(browser::transport)?;
            browser::read_body(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = post;
            Err(unavailable())
        }
    }

    async fn list_posts(&self, limit: usize) -> Result<Vec<SkillPost>, BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = posts_url(&self.config.url, limit)?;
            let resp = self
                .authorize(gloo_net::http::Request::get(&url))
                .await?
                .send()
                .await
                .map_err(browser::transport)?;
            browser::decode(&browser::read_body(resp).await?)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = limit;
            Err(unavailable())
        }
    }

    async fn fetch_post(&self, post_id: &str) -> Result<Option<SkillPost>, BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = post_url(&self.config.url, post_id)?;
            let resp = self
                .authorize(gloo_net::http::Request::get(&url))
                .await?
                .send()
                .await
                .map_err(browser::transport)?;
            let rows: Vec<SkillPost> = browser::decode(&browser::read_body(resp).await?)?;
            Ok(rows.into_iter().next())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = post_id;
            Err(unavailable())
        }
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
        upsert: bool,
    ) -> Result<String, BackendError> {
        #[cfg(feature = "csr")]
        {
            let url = storage_url(&self.config.url, false, bucket, path)?;
            let body = js_sys::Uint8Array::from(bytes.as_slice());
            let resp = self
                .authorize(gloo_net::http::Request::post(&url))
                .await?
                .header("Content-Type", content_type)
                .header("cache-control", "max-age=3600")
                .header("x-upsert", if upsert { "true" } else { "false" })
                .body(body)
                .map_err(browser::encode)?
                .send()
                .await
                .map_err(browser::transport)?;
            browser::read_body(resp).await?;
            storage_url(&self.config.url, true, bucket, path)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bucket, path, content_type, bytes, upsert);
            Err(unavailable())
        }
    }
}
