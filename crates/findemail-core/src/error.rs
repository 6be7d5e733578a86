use thiserror::Error;

/// Result type alias for findemail operations
pub type Result<T> = std::result::Result<T, FindEmailError>;

/// How the retry policy treats a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The service gave a final answer; retrying cannot change it
    Definitive,
    /// Transport-level hiccup that may succeed on another attempt
    Transient,
}

/// Errors that can occur when using the findemail API
#[derive(Error, Debug)]
pub enum FindEmailError {
    /// The API key is malformed or was rejected by the service (401)
    #[error("the entered api_key is invalid")]
    ApiKey,

    /// The account is not allowed to perform this operation (403)
    #[error("access forbidden: {0}")]
    AccessForbidden(String),

    /// The endpoint or resource does not exist (404)
    #[error("not found")]
    NotFound,

    /// The endpoint does not accept this HTTP method (405)
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Usage quota exhausted (429)
    #[error("flood wait: {0}")]
    FloodWait(String),

    /// Any status code outside the documented set
    #[error("invalid status code ~> {0}")]
    Unknown(u16),

    /// The request values were rejected (422)
    #[error("the entered values are invalid")]
    InvalidInput,

    /// Unsupported search or download type
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// The response envelope carried `ok: false`
    #[error("request rejected: {0}")]
    Validation(String),

    /// Every attempt failed with a transient error
    #[error("failed after {attempts} retries: {source}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// The failure of the last attempt
        source: Box<FindEmailError>,
    },

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FindEmailError {
    /// Classify the failure for the retry policy
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Http(_) | Self::Timeout(_) | Self::Connection(_) | Self::Json(_) | Self::Io(_) => {
                ErrorClass::Transient
            }
            _ => ErrorClass::Definitive,
        }
    }

    /// Returns true if the error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.class(), ErrorClass::Transient)
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiKey)
    }

    /// Returns the HTTP status code this error was mapped from, if any
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiKey => Some(401),
            Self::AccessForbidden(_) => Some(403),
            Self::NotFound => Some(404),
            Self::MethodNotAllowed(_) => Some(405),
            Self::InvalidInput => Some(422),
            Self::FloodWait(_) => Some(429),
            Self::Unknown(code) => Some(*code),
            _ => None,
        }
    }

    /// Service-provided message, for the kinds that carry one
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::AccessForbidden(m)
            | Self::MethodNotAllowed(m)
            | Self::FloodWait(m)
            | Self::InvalidType(m)
            | Self::Validation(m) => Some(m.as_str()),
            _ => None,
        }
    }
}
