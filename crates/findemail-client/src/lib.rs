//! Blocking HTTP client for the findemail API.
//!
//! This crate provides the main [`FindEmailClient`] for interacting with the
//! findemail API. Every network operation goes through a fixed-delay
//! [`RetryPolicy`]; only transport failures are retried.

#![doc(html_root_url = "https://docs.rs/findemail-client/1.0.0")]

mod client;
mod config;
mod retry;
pub mod api;

pub use client::{FindEmailClient, FindEmailClientBuilder};
pub use config::*;
pub use findemail_core::{FindEmailError, Result};
pub use reqwest::Method;
pub use retry::{RetryPolicy, DEFAULT_REQUEST_RETRIES, DEFAULT_RETRY_DELAY};
