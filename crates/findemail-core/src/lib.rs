//! Core types and error taxonomy for the findemail API client.
//!
//! This crate provides the foundational types used across the findemail library:
//!
//! - **Types**: the `{ok, data, message}` response envelope, request bodies,
//!   search type sets and the validated [`ApiKey`]
//! - **Errors**: the status-code driven taxonomy in [`FindEmailError`]
//!
//! # Example
//!
//! ```rust
//! use findemail_core::{LeakSearchType, FindEmailError};
//!
//! let kind: LeakSearchType = "phone_number".parse().unwrap();
//! assert_eq!(kind.as_str(), "phone_number");
//!
//! let err = "fax".parse::<LeakSearchType>().unwrap_err();
//! assert!(matches!(err, FindEmailError::InvalidType(_)));
//! ```

#![doc(html_root_url = "https://docs.rs/findemail-core/1.0.0")]

mod error;
pub mod types;

pub use error::{ErrorClass, FindEmailError, Result};
pub use types::*;
