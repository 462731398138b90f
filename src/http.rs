//! HTTP transport for REST API calls.

use reqwest::{Client, Method, StatusCode};
use url::Url;

use crate::config::Config;
use crate::error::{Result, SurveyGizmoError};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging.
/// Truncates long responses and strips non-printable characters.
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper shared by every resource handler
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: Client,
}

impl Transport {
    /// Build a client from the configured timeout and user agent
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap a caller-supplied client (custom TLS, proxies, middlewares)
    pub(crate) fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Execute one request and return the body of a successful response.
    ///
    /// The URL is expected to carry the full query string, credentials
    /// included; nothing is added here.
    pub(crate) async fn request(&self, method: Method, url: Url) -> Result<String> {
        tracing::debug!("{} {}", method, url.path());

        let response = self.client.request(method.clone(), url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("{} failed: {} - {}", method, status, sanitize_for_log(&body));
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    SurveyGizmoError::AuthenticationFailed
                }
                _ => SurveyGizmoError::Api {
                    status: status.as_u16(),
                    message: sanitize_for_log(&body),
                },
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(sanitize_for_log("plain error"), "plain error");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("[truncated, 500 bytes total]"));
        assert!(sanitized.len() < body.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 199 ascii bytes followed by a multi-byte char straddling the cut
        let body = format!("{}{}", "a".repeat(199), "\u{00e9}".repeat(50));
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated"));
    }

    #[test]
    fn control_characters_are_stripped() {
        assert_eq!(sanitize_for_log("line\r\nbreak\ttab"), "linebreaktab");
    }
}
