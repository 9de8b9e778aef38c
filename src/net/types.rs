//! Shared DTOs for the backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the hosted backend's JSON (`user_metadata`,
//! `access_token`, snake_case table columns) so the adapter can deserialize
//! responses directly. Identity snapshots are replaced wholesale on every
//! session change, never patched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated identity as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Opaque backend user id.
    pub id: String,
    /// Account email. Empty for providers that do not expose one.
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub email: String,
    /// Open key-value metadata attached at sign-up (e.g. `name`).
    #[serde(default, alias = "user_metadata")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl UserIdentity {
    /// Name to show in the UI: `metadata.name`, else the email local part.
    pub fn display_name(&self) -> String {
        if let Some(name) = self
            .metadata
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            return name.to_owned();
        }
        email_local_part(&self.email).unwrap_or("New User").to_owned()
    }
}

/// Return the part of `email` before `@`, if non-empty.
pub fn email_local_part(email: &str) -> Option<&str> {
    email.split('@').next().map(str::trim).filter(|s| !s.is_empty())
}

fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A backend session: tokens plus the identity they belong to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry in seconds since the Unix epoch, when known.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserIdentity,
}

impl AuthSession {
    /// Whether the access token is expired at `now_secs`.
    ///
    /// Sessions without an expiry never expire locally.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_secs)
    }
}

/// Kind of session change pushed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A single backend-pushed session change.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionChange {
    pub event: SessionEvent,
    pub session: Option<AuthSession>,
}

impl SessionChange {
    pub fn signed_in(session: AuthSession) -> Self {
        Self { event: SessionEvent::SignedIn, session: Some(session) }
    }

    pub fn signed_out() -> Self {
        Self { event: SessionEvent::SignedOut, session: None }
    }

    pub fn token_refreshed(session: AuthSession) -> Self {
        Self { event: SessionEvent::TokenRefreshed, session: Some(session) }
    }

    /// Identity carried by this change, if any.
    pub fn user(&self) -> Option<&UserIdentity> {
        self.session.as_ref().map(|s| &s.user)
    }
}

/// External identity providers offered on the sign-in page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
        }
    }
}

/// Result of a sign-up call.
///
/// `session` is `None` when the backend requires email confirmation first.
#[derive(Clone, Debug, PartialEq)]
pub struct SignUpOutcome {
    pub user: UserIdentity,
    pub session: Option<AuthSession>,
}

/// Row written to the `profiles` table.
///
/// Every column is serialized, so `None` clears the stored value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpsert {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Row read from the `profiles` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Letter shown in place of a missing avatar.
    pub fn initial(&self) -> char {
        self.name.trim().chars().next().map_or('U', |c| c.to_ascii_uppercase())
    }
}

impl From<ProfileUpsert> for Profile {
    fn from(row: ProfileUpsert) -> Self {
        Self { id: row.id, name: row.name, location: row.location, bio: row.bio, avatar_url: row.avatar_url }
    }
}

/// Author columns embedded into a post through the `profiles` relation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Row read from the `skill_posts` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPost {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Present when the query embeds `profiles(name,avatar_url)`.
    #[serde(default, rename = "profiles")]
    pub author: Option<PostAuthor>,
}

impl SkillPost {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.trim()).filter(|n| !n.is_empty())
    }
}

/// Row inserted into the `skill_posts` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSkillPost {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
}
