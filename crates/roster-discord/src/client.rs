//! Discord REST client.
//!
//! Thin wrapper around a [`reqwest::Client`] that adds the bot credential,
//! resolves endpoint paths against the API base and maps HTTP failures onto
//! [`SourceError`].
//!
//! # Example
//!
//! ```no_run
//! use roster_discord::DiscordClient;
//! use std::time::Duration;
//!
//! let client = DiscordClient::new("https://discord.com/api/v10", "bot-token", Duration::from_secs(10))?;
//! # Ok::<(), roster_core::SourceError>(())
//! ```

use std::time::Duration;

use reqwest::{header, Client, Response, StatusCode};
use roster_common::DiscordConfig;
use roster_core::{SourceError, SourceResult};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Default Discord API root
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Page size requested from the member list endpoint
pub const MEMBER_PAGE_LIMIT: u32 = 100;

const USER_AGENT: &str = concat!("discord-roster/", env!("CARGO_PKG_VERSION"));

/// Discord REST API client
#[derive(Clone)]
pub struct DiscordClient {
    http: Client,
    api_base: String,
    auth_header: String,
}

impl std::fmt::Debug for DiscordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl DiscordClient {
    /// Create a client with its own connection pool and per-request timeout.
    ///
    /// # Errors
    /// Returns [`SourceError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(
        api_base: impl Into<String>,
        bot_token: &str,
        timeout: Duration,
    ) -> SourceResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, api_base, bot_token))
    }

    /// Create from the `DISCORD_*` configuration
    ///
    /// # Errors
    /// Same as [`DiscordClient::new`]
    pub fn from_config(config: &DiscordConfig) -> SourceResult<Self> {
        Self::new(
            config.api_base.clone(),
            &config.bot_token,
            config.request_timeout(),
        )
    }

    /// Create with a custom reqwest [`Client`] (for proxies, custom TLS, etc.)
    pub fn with_client(http: Client, api_base: impl Into<String>, bot_token: &str) -> Self {
        let api_base = api_base.into();
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            auth_header: format!("Bot {bot_token}"),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `GET {api_base}{path}` and decode the JSON body.
    ///
    /// `path` starts with `/` and may carry a query string.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SourceResult<T> {
        let url = format!("{}{}", self.api_base, path);
        debug!(%url, "Discord API request");

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, path, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Decode(format!("{path}: {e}")))
    }
}

fn map_transport_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Transport("request timed out".to_string())
    } else {
        SourceError::Transport(err.to_string())
    }
}

async fn status_error(status: StatusCode, path: &str, response: Response) -> SourceError {
    match status {
        StatusCode::UNAUTHORIZED => SourceError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after_ms = retry_after_ms(&response);
            warn!(endpoint = path, ?retry_after_ms, "Discord API rate limit hit");
            SourceError::RateLimited { retry_after_ms }
        }
        _ => SourceError::Status {
            status: status.as_u16(),
            endpoint: path.to_string(),
        },
    }
}

/// `Retry-After` is in (possibly fractional) seconds
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn retry_after_ms(response: &Response) -> Option<u64> {
    let seconds: f64 = response
        .headers()
        .get(header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()?;
    (seconds.is_finite() && seconds >= 0.0).then(|| (seconds * 1000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Ping {
        ok: bool,
    }

    fn client(server: &MockServer) -> DiscordClient {
        DiscordClient::new(server.base_url(), "test-token", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_sends_bot_authorization() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ping")
                .header("authorization", "Bot test-token");
            then.status(200).json_body(serde_json::json!({"ok": true}));
        });

        let ping: Ping = client(&server).get_json("/ping").await.unwrap();
        assert!(ping.ok);
        mock.assert();
    }

    #[tokio::test]
    async fn test_401_is_unauthorized() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ping");
            then.status(401).body(r#"{"message": "401: Unauthorized", "code": 0}"#);
        });

        let err = client(&server).get_json::<Ping>("/ping").await.unwrap_err();
        assert_eq!(err, SourceError::Unauthorized);
    }

    #[tokio::test]
    async fn test_429_reads_retry_after() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ping");
            then.status(429)
                .header("retry-after", "1.25")
                .body(r#"{"message": "You are being rate limited.", "retry_after": 1.25}"#);
        });

        let err = client(&server).get_json::<Ping>("/ping").await.unwrap_err();
        assert_eq!(
            err,
            SourceError::RateLimited {
                retry_after_ms: Some(1250)
            }
        );
    }

    #[tokio::test]
    async fn test_other_status_keeps_endpoint() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/1");
            then.status(404).body(r#"{"message": "Unknown User", "code": 10013}"#);
        });

        let err = client(&server).get_json::<Ping>("/users/1").await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404 from /users/1");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ping");
            then.status(200).body("not json");
        });

        let err = client(&server).get_json::<Ping>("/ping").await.unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on port 9 locally
        let client =
            DiscordClient::new("http://127.0.0.1:9", "t", Duration::from_secs(2)).unwrap();
        let err = client.get_json::<Ping>("/ping").await.unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client =
            DiscordClient::new("https://discord.com/api/v10/", "t", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.api_base(), DEFAULT_API_BASE);
    }
}
