use crate::FindEmailError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INVALID_SEARCH_TYPE: &str = "invalid search type!";

/// What a leak search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeakSearchType {
    Domain,
    Username,
    Email,
    PhoneNumber,
    Ip,
}

impl LeakSearchType {
    /// Every accepted leak search type
    pub const ALL: [Self; 5] = [
        Self::Domain,
        Self::Username,
        Self::Email,
        Self::PhoneNumber,
        Self::Ip,
    ];

    /// Wire name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Username => "username",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Ip => "ip",
        }
    }
}

impl fmt::Display for LeakSearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeakSearchType {
    type Err = FindEmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FindEmailError::InvalidType(INVALID_SEARCH_TYPE.to_string()))
    }
}

/// What a stealer-log search matches against
///
/// The service accepts both `sub_domain` and `subdomain`; they are kept as
/// separate variants so the caller's spelling is forwarded unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogsSearchType {
    Domain,
    Username,
    Port,
    Tech,
    Keyword,
    SubDomain,
    #[serde(rename = "subdomain")]
    Subdomain,
}

impl LogsSearchType {
    /// Every accepted logs search type
    pub const ALL: [Self; 7] = [
        Self::Domain,
        Self::Username,
        Self::Port,
        Self::Tech,
        Self::Keyword,
        Self::SubDomain,
        Self::Subdomain,
    ];

    /// Wire name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Username => "username",
            Self::Port => "port",
            Self::Tech => "tech",
            Self::Keyword => "keyword",
            Self::SubDomain => "sub_domain",
            Self::Subdomain => "subdomain",
        }
    }
}

impl fmt::Display for LogsSearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogsSearchType {
    type Err = FindEmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FindEmailError::InvalidType(INVALID_SEARCH_TYPE.to_string()))
    }
}
