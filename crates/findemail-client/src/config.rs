//! Client configuration types.

use crate::retry::RetryPolicy;
use findemail_core::{ApiKey, FindEmailError, Result};
use std::time::Duration;
use url::Url;

/// The findemail API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.findemail.io";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "FINDEMAIL_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "FINDEMAIL_URL";

/// Library version, baked in at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent with every request
pub const USER_AGENT: &str = concat!("findemail-", env!("CARGO_PKG_VERSION"));

/// Validated, immutable client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) api_key: ApiKey,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) download_timeout: Option<Duration>,
    pub(crate) retry: RetryPolicy,
}

impl ClientConfig {
    /// The API key sent as `X-API-KEY`
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to each JSON request attempt
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Timeout applied to each download attempt, `None` for unbounded
    #[must_use]
    pub const fn download_timeout(&self) -> Option<Duration> {
        self.download_timeout
    }

    /// Retry policy wrapped around every network operation
    #[must_use]
    pub const fn retry(&self) -> RetryPolicy {
        self.retry
    }
}

/// Check that `raw` is an absolute http(s) URL and strip any trailing slash.
///
/// Endpoint paths are appended verbatim so a path prefix on the base URL is
/// preserved.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed =
        Url::parse(raw).map_err(|e| FindEmailError::Config(format!("invalid URL {raw:?}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FindEmailError::Config(format!(
            "unsupported URL scheme {:?}",
            parsed.scheme()
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
