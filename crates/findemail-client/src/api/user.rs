//! Account API endpoints.

use crate::FindEmailClient;
use findemail_core::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) const USER_INFO_PATH: &str = "/v1/user/info";

/// Account API endpoints
pub struct UserApi<'a> {
    client: &'a FindEmailClient,
}

impl<'a> UserApi<'a> {
    pub(crate) const fn new(client: &'a FindEmailClient) -> Self {
        Self { client }
    }

    /// Get account information (plan, remaining credit, ...)
    pub fn info(&self) -> Result<Value> {
        self.client.get(USER_INFO_PATH)?.into_data()
    }

    /// Get account information deserialized into `T`
    pub fn info_as<T: DeserializeOwned>(&self) -> Result<T> {
        self.client.get(USER_INFO_PATH)?.into_typed()
    }
}
