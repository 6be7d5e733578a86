use crate::{FindEmailError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform `{ok, data, message}` shape every JSON endpoint answers with.
///
/// `ok: false` is a logical failure even when the HTTP status was 200 or 400.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the service considers the request successful
    pub ok: bool,

    /// Endpoint-specific payload
    #[serde(default)]
    pub data: Value,

    /// Human-readable explanation, mostly set when `ok` is false
    #[serde(default)]
    pub message: Option<String>,
}

impl ResponseEnvelope {
    /// Unwrap the payload, turning `ok: false` into [`FindEmailError::Validation`]
    pub fn into_data(self) -> Result<Value> {
        if self.ok {
            Ok(self.data)
        } else {
            Err(FindEmailError::Validation(self.message.unwrap_or_default()))
        }
    }

    /// Unwrap the payload and deserialize it into a concrete type
    pub fn into_typed<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        let data = self.into_data()?;
        serde_json::from_value(data).map_err(FindEmailError::Json)
    }
}
