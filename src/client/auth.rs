//! API-key credential handling for the remote recipe API.
//!
//! The recipe API authenticates every request with an `apiKey` query
//! parameter rather than an `Authorization` header, so the credential is
//! applied when request URLs are built.

use anyhow::Result;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// Holds the API key used for all remote calls.
///
/// The key is a static secret supplied by configuration, never by the user
/// at runtime. It must not appear in logs; use [`ApiCredentials::key_preview`]
/// for diagnostics.
pub struct ApiCredentials {
    api_key: String,
}

impl ApiCredentials {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Reads the API key from the environment.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            Ok(_) => anyhow::bail!("{} is set but empty", API_KEY_ENV),
            Err(_) => anyhow::bail!(
                "{} is not set - export your recipe API key before starting",
                API_KEY_ENV
            ),
        }
    }

    pub fn key(&self) -> &str {
        &self.api_key
    }

    /// Redacted form of the key, safe for logging.
    pub fn key_preview(&self) -> String {
        format!("{}...", &self.api_key[..self.api_key.len().min(6)])
    }
}
