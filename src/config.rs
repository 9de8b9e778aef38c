//! Backend configuration.
//!
//! A WASM bundle has no process environment, so values are baked in at build
//! time with `option_env!`:
//!
//! - `SKILLLINK_SUPABASE_URL`: project base URL, e.g. `https://xyz.supabase.co`
//! - `SKILLLINK_SUPABASE_ANON_KEY`: public anon key sent as `apikey`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const URL_VAR: &str = "SKILLLINK_SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SKILLLINK_SUPABASE_ANON_KEY";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration: {var} not set")]
    Missing { var: &'static str },

    #[error("invalid {var} '{value}': {reason}")]
    InvalidUrl { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Build config from a variable lookup. Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is missing or the URL is not an
    /// absolute `http(s)` URL.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let raw_url = read(URL_VAR)?;
        let parsed = url::Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            var: URL_VAR,
            value: raw_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                var: URL_VAR,
                value: raw_url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let anon_key = read(ANON_KEY_VAR)?;
        Ok(Self { url: raw_url.trim_end_matches('/').to_owned(), anon_key })
    }

    /// Config baked into this build.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::from_vars`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| match var {
            URL_VAR => option_env!("SKILLLINK_SUPABASE_URL").map(str::to_owned),
            ANON_KEY_VAR => option_env!("SKILLLINK_SUPABASE_ANON_KEY").map(str::to_owned),
            _ => None,
        })
    }
}
