use crate::{FindEmailError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static API_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-F]{8}-[0-9A-F]{4}-4[0-9A-F]{3}-[89AB][0-9A-F]{3}-[0-9A-F]{12}$")
        .expect("api key regex is valid")
});

/// A findemail API key.
///
/// Keys are UUID-v4 shaped and written in upper-case hex, e.g.
/// `9F2C4B1A-3D5E-4F60-8A7B-1C2D3E4F5A6B`. The key grants full access to the
/// account, so `Debug` only shows the first block.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and wrap a raw key
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if API_KEY_PATTERN.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(FindEmailError::ApiKey)
        }
    }

    /// The key as sent in the `X-API-KEY` header
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.0.split('-').next().unwrap_or_default();
        write!(f, "ApiKey({prefix}-****)")
    }
}

impl std::str::FromStr for ApiKey {
    type Err = FindEmailError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
