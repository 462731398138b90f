//! API credentials.
//!
//! The REST API authenticates every call with a static token and secret
//! passed as query parameters, so there is no handshake to perform here.
//! Secrets are kept out of `Debug` output and logs.

use std::fmt;

use crate::error::{Result, SurveyGizmoError};

/// Environment variable holding the API token
pub const ENV_API_TOKEN: &str = "SURVEYGIZMO_API_TOKEN";

/// Environment variable holding the API token secret
pub const ENV_API_TOKEN_SECRET: &str = "SURVEYGIZMO_API_TOKEN_SECRET";

/// An API token / secret pair
#[derive(Clone)]
pub struct TokenAuth {
    api_token: String,
    api_token_secret: String,
}

impl TokenAuth {
    pub fn new(api_token: impl Into<String>, api_token_secret: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_token_secret: api_token_secret.into(),
        }
    }

    /// Read credentials from `SURVEYGIZMO_API_TOKEN` and
    /// `SURVEYGIZMO_API_TOKEN_SECRET`.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var(ENV_API_TOKEN)
            .map_err(|_| SurveyGizmoError::Config(format!("{ENV_API_TOKEN} is not set")))?;
        let api_token_secret = std::env::var(ENV_API_TOKEN_SECRET)
            .map_err(|_| SurveyGizmoError::Config(format!("{ENV_API_TOKEN_SECRET} is not set")))?;
        Ok(Self::new(api_token, api_token_secret))
    }

    /// Query pairs appended to every request URL
    pub(crate) fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("api_token", &self.api_token),
            ("api_token_secret", &self.api_token_secret),
        ]
    }
}

impl fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuth")
            .field("api_token", &"<redacted>")
            .field("api_token_secret", &"<redacted>")
            .finish()
    }
}

// Tests that touch the credential environment variables must hold this
// lock; the harness runs tests on parallel threads.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
