//! Main findemail API client implementation.

use crate::api::{DownloadRequestBuilder, SearchApi, UserApi, USER_INFO_PATH};
use crate::config::{
    normalize_base_url, ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT, USER_AGENT,
};
use crate::retry::RetryPolicy;
use findemail_core::{ApiKey, DownloadRequest, FindEmailError, ResponseEnvelope, Result};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const DOWNLOAD_PATH: &str = "/v1/download";

/// Main findemail API client.
///
/// Every call blocks the current thread until the response is complete. The
/// client is cheap to clone and holds no mutable state, so clones may be used
/// from several threads.
#[derive(Clone)]
pub struct FindEmailClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    config: ClientConfig,
}

impl FindEmailClient {
    /// Create a new client with the given API key using default settings.
    ///
    /// Validates the key format and checks it against the service.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        FindEmailClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> FindEmailClientBuilder {
        FindEmailClientBuilder::new(api_key)
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Access account endpoints
    #[must_use]
    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Access search endpoints
    #[must_use]
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Download the full result set of a previous search.
    ///
    /// Saved as `<id>.txt` in the working directory unless a file name is set
    /// on the returned builder.
    #[must_use]
    pub fn download(
        &self,
        id: impl Into<String>,
        kind: impl Into<String>,
    ) -> DownloadRequestBuilder<'_> {
        DownloadRequestBuilder::new(self, id.into(), kind.into())
    }

    /// Check whether the service accepts the configured API key.
    ///
    /// Returns the envelope's `ok` flag; HTTP-level rejections surface as errors.
    pub fn is_valid(&self) -> Result<bool> {
        Ok(self.get(USER_INFO_PATH)?.ok)
    }

    /// Send one JSON request through the retry policy and classify the reply.
    ///
    /// 200 and 400 both yield the parsed envelope; callers must inspect `ok`.
    pub fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ResponseEnvelope>
    where
        B: Serialize + ?Sized,
    {
        self.inner
            .config
            .retry
            .run(|| self.execute_once(method.clone(), path, body))
    }

    /// Perform a GET request
    pub(crate) fn get(&self, path: &str) -> Result<ResponseEnvelope> {
        self.execute::<()>(Method::GET, path, None)
    }

    /// Perform a POST request with JSON body
    pub(crate) fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseEnvelope> {
        self.execute(Method::POST, path, Some(body))
    }

    /// Stream the download body for `id` into `target`, with retries
    pub(crate) fn download_to(&self, id: &str, kind: &str, target: &Path) -> Result<u64> {
        self.inner
            .config
            .retry
            .run(|| self.download_once(id, kind, target))
    }

    fn execute_once<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ResponseEnvelope>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path);
        debug!(method = %method, url = %url, "request");

        let mut request = self
            .inner
            .http
            .request(method, &url)
            .timeout(self.inner.config.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(transport_error)?;
        Self::handle_response(response)
    }

    fn download_once(&self, id: &str, kind: &str, target: &Path) -> Result<u64> {
        let url = self.build_url(DOWNLOAD_PATH);
        debug!(url = %url, id, kind, "download request");

        let mut request = self.inner.http.post(&url).json(&DownloadRequest { id, kind });
        if let Some(timeout) = self.inner.config.download_timeout {
            request = request.timeout(timeout);
        }

        let mut response = request.send().map_err(transport_error)?;
        match response.status().as_u16() {
            200 => {
                let mut file = BufWriter::new(File::create(target)?);
                let written = io::copy(&mut response, &mut file)?;
                file.flush()?;
                debug!(path = %target.display(), bytes = written, "download complete");
                Ok(written)
            }
            400 => Err(FindEmailError::InvalidType(read_message(response))),
            status => Err(Self::handle_error(status, response)),
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.config.base_url, path)
    }

    /// Handle a JSON endpoint response
    fn handle_response(response: Response) -> Result<ResponseEnvelope> {
        match response.status().as_u16() {
            200 | 400 => {
                let body = response.text().map_err(transport_error)?;
                serde_json::from_str(&body).map_err(FindEmailError::Json)
            }
            status => Err(Self::handle_error(status, response)),
        }
    }

    /// Convert a non-success status to its taxonomy kind
    fn handle_error(status: u16, response: Response) -> FindEmailError {
        match status {
            401 => FindEmailError::ApiKey,
            403 => FindEmailError::AccessForbidden(read_message(response)),
            404 => FindEmailError::NotFound,
            405 => FindEmailError::MethodNotAllowed(read_message(response)),
            422 => FindEmailError::InvalidInput,
            429 => {
                let message = read_message(response);
                warn!(message = %message, "flood wait from findemail API");
                FindEmailError::FloodWait(message)
            }
            other => FindEmailError::Unknown(other),
        }
    }
}

impl std::fmt::Debug for FindEmailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindEmailClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Read the `message` field of an error body, falling back to the raw text
fn read_message(response: Response) -> String {
    let body = response.text().unwrap_or_default();

    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body)
}

/// Map a transport failure to a transient error kind
fn transport_error(err: reqwest::Error) -> FindEmailError {
    if err.is_timeout() {
        FindEmailError::Timeout(err.to_string())
    } else if err.is_connect() {
        FindEmailError::Connection(err.to_string())
    } else {
        FindEmailError::Http(err.to_string())
    }
}

/// Builder for configuring a [`FindEmailClient`]
#[derive(Debug, Clone)]
pub struct FindEmailClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    download_timeout: Option<Duration>,
    retry: RetryPolicy,
    verify: bool,
}

impl FindEmailClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            download_timeout: None,
            retry: RetryPolicy::default(),
            verify: true,
        }
    }

    /// Create a builder from `FINDEMAIL_API_KEY` and, if set, `FINDEMAIL_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| FindEmailError::ApiKey)?;
        let mut builder = Self::new(api_key);

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                builder = builder.base_url(url);
            }
        }

        Ok(builder)
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-attempt timeout for JSON requests
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bound each download attempt; downloads are unbounded by default
    #[must_use]
    pub const fn download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = Some(timeout);
        self
    }

    /// Set how many attempts each operation gets
    #[must_use]
    pub const fn request_retries(mut self, retries: u32) -> Self {
        self.retry = self.retry.max_attempts(retries);
        self
    }

    /// Set the pause between attempts
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry = self.retry.delay(delay);
        self
    }

    /// Replace the whole retry policy
    #[must_use]
    pub const fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Whether `build` checks the key against the service (default: true)
    #[must_use]
    pub const fn verify_on_build(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`FindEmailError::ApiKey`] for a malformed key and with
    /// [`FindEmailError::Config`] for an unusable retry policy or URL. Unless
    /// disabled, performs the account status check and propagates its errors.
    pub fn build(self) -> Result<FindEmailClient> {
        let api_key = ApiKey::parse(self.api_key)?;
        self.retry.validate()?;
        let base_url = normalize_base_url(&self.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json,*/*"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key_header = HeaderValue::from_str(api_key.as_str())
            .map_err(|e| FindEmailError::Config(e.to_string()))?;
        key_header.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), key_header);

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .connect_timeout(self.timeout)
            .timeout(None::<Duration>)
            .gzip(true)
            .build()
            .map_err(|e| FindEmailError::Config(format!("failed to build HTTP client: {e}")))?;

        let client = FindEmailClient {
            inner: Arc::new(ClientInner {
                http,
                config: ClientConfig {
                    api_key,
                    base_url,
                    timeout: self.timeout,
                    download_timeout: self.download_timeout,
                    retry: self.retry,
                },
            }),
        };

        if self.verify {
            let ok = client.is_valid()?;
            debug!(ok, "api key status check");
        }

        Ok(client)
    }
}
