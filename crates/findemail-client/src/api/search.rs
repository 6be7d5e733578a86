//! Search API endpoints.

use crate::FindEmailClient;
use findemail_core::{
    DomainSearchRequest, LeakSearchType, LogsSearchType, Result, TypedSearchRequest,
};
use serde_json::Value;

const DOMAIN_PATH: &str = "/v1/search/domain";
const LEAK_PATH: &str = "/v1/search/leak";
const LOGS_PATH: &str = "/v1/search/logs";

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a FindEmailClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a FindEmailClient) -> Self {
        Self { client }
    }

    /// Find email addresses published for a domain
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let emails = client.search().domain("example.com")?;
    /// ```
    pub fn domain(&self, domain: &str) -> Result<Value> {
        self.client
            .post(DOMAIN_PATH, &DomainSearchRequest { domain })?
            .into_data()
    }

    /// Search leaked databases.
    ///
    /// `kind` is one of `domain`, `username`, `email`, `phone_number`, `ip`;
    /// anything else fails with `InvalidType` before a request is sent.
    pub fn leak(&self, data: &str, kind: &str) -> Result<Value> {
        let kind: LeakSearchType = kind.parse()?;
        self.leak_by(data, kind)
    }

    /// Search leaked databases with an already validated type
    pub fn leak_by(&self, data: &str, kind: LeakSearchType) -> Result<Value> {
        self.typed(LEAK_PATH, kind.as_str(), data)
    }

    /// Search stealer logs.
    ///
    /// `kind` is one of `domain`, `username`, `port`, `tech`, `keyword`,
    /// `sub_domain`, `subdomain`; anything else fails with `InvalidType`
    /// before a request is sent.
    pub fn logs(&self, data: &str, kind: &str) -> Result<Value> {
        let kind: LogsSearchType = kind.parse()?;
        self.logs_by(data, kind)
    }

    /// Search stealer logs with an already validated type
    pub fn logs_by(&self, data: &str, kind: LogsSearchType) -> Result<Value> {
        self.typed(LOGS_PATH, kind.as_str(), data)
    }

    fn typed(&self, path: &str, kind: &str, data: &str) -> Result<Value> {
        self.client
            .post(path, &TypedSearchRequest { kind, data })?
            .into_data()
    }
}
