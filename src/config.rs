//! Client configuration.
//!
//! Covers the knobs the REST API exposes per request: the versioned path
//! prefix, the endpoint to talk to (US or EU data center), an optional
//! response serialization suffix, and transport settings.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{Result, SurveyGizmoError};

/// User-Agent header sent with every request
pub const USER_AGENT: &str = concat!("surveygizmo-rs/", env!("CARGO_PKG_VERSION"));

/// Default REST endpoint (US data center)
pub const DEFAULT_BASE_URL: &str = "https://restapi.surveygizmo.com/";

/// Environment variable overriding the REST endpoint
pub const ENV_BASE_URL: &str = "SURVEYGIZMO_BASE_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// REST API version, used as the first path segment of every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    V3,
    V4,
    #[default]
    V5,
    /// Track whatever version the platform currently serves as latest
    Head,
}

impl ApiVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V3 => "v3",
            ApiVersion::V4 => "v4",
            ApiVersion::V5 => "v5",
            ApiVersion::Head => "head",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialization format appended to the request path (`.json`, `.xml`, ...).
///
/// When set, the client returns the response body verbatim instead of
/// decoding it, since only the default JSON shape is known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Json,
    Pson,
    Xml,
    Debug,
}

impl ResponseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Json => "json",
            ResponseType::Pson => "pson",
            ResponseType::Xml => "xml",
            ResponseType::Debug => "debug",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings shared by every call a client issues
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_version: ApiVersion,
    pub(crate) base_url: Url,
    pub(crate) response_type: Option<ResponseType>,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Config {
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn response_type(&self) -> Option<ResponseType> {
        self.response_type
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Parse an endpoint URL, ensuring it can serve as a join base.
    ///
    /// A trailing slash is appended when missing so that versioned paths
    /// join under the endpoint instead of replacing its last segment.
    pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        let url = Url::parse(&normalized)
            .map_err(|e| SurveyGizmoError::InvalidUrl(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(SurveyGizmoError::InvalidUrl(format!(
                "{raw}: not a usable base URL"
            )));
        }
        Ok(url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            response_type: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
