//! Rust client for the findemail.io email and leak intelligence API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use findemail::FindEmailClient;
//!
//! fn main() -> findemail::Result<()> {
//!     let client = FindEmailClient::new("9F2C4B1A-3D5E-4F60-8A7B-1C2D3E4F5A6B")?;
//!
//!     // Account information
//!     let me = client.user().info()?;
//!     println!("Account: {me}");
//!
//!     // Leak search, type checked before anything is sent
//!     let hits = client.search().leak("someone@example.com", "email")?;
//!     println!("Leaks: {hits}");
//!
//!     // Save a full result set to <id>.txt
//!     let path = client.download("search-id", "full").send()?;
//!     println!("Saved to {}", path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/findemail/1.0.0")]

// Re-export core types
pub use findemail_core::*;

// Re-export client
pub use findemail_client::{
    api, FindEmailClient, FindEmailClientBuilder, Method, RetryPolicy, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT, USER_AGENT, VERSION,
};

pub use serde_json;
