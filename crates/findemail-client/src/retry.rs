//! Fixed-delay retry policy shared by every network operation.

use findemail_core::{ErrorClass, FindEmailError, Result};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Default number of attempts per operation
pub const DEFAULT_REQUEST_RETRIES: u32 = 5;

/// Default pause between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Retry policy for failed requests.
///
/// Only [`ErrorClass::Transient`] failures are retried. Anything the service
/// answered definitively (401, 403, 404, ...) is returned on the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,

    /// Sleep between two attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryPolicy {
    /// Create a policy with the default attempts and delay
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_REQUEST_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Set maximum attempts
    #[must_use]
    pub const fn max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the delay between attempts
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Reject policies that could never run an operation or would spin
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts < 1 {
            return Err(FindEmailError::Config(
                "request_retries must be at least 1".to_string(),
            ));
        }
        if self.delay.is_zero() {
            return Err(FindEmailError::Config(
                "retry_delay must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Run `op` until it succeeds, fails definitively, or attempts run out.
    ///
    /// Blocks the calling thread for `delay` between attempts. When the last
    /// attempt fails transiently the error is wrapped in
    /// [`FindEmailError::RetriesExhausted`].
    pub fn run<T, F>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Result<T>,
    {
        self.validate()?;

        let mut attempt = 1;
        loop {
            let err = match op() {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            match err.class() {
                ErrorClass::Definitive => return Err(err),
                ErrorClass::Transient if attempt >= self.max_attempts => {
                    return Err(FindEmailError::RetriesExhausted {
                        attempts: self.max_attempts,
                        source: Box::new(err),
                    });
                }
                ErrorClass::Transient => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "request failed, retrying"
                    );
                    thread::sleep(self.delay);
                    attempt += 1;
                }
            }
        }
    }
}
