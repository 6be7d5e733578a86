//! Basic example demonstrating findemail API usage.
//!
//! Run with: cargo run -p findemail --example basic_search -- example.com
//!
//! Set the FINDEMAIL_API_KEY environment variable before running.

use findemail::{FindEmailClientBuilder, Result};
use std::time::Duration;

fn main() -> Result<()> {
    let domain = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example.com".to_string());

    let client = FindEmailClientBuilder::from_env()?
        .timeout(Duration::from_secs(20))
        .request_retries(3)
        .build()?;

    println!("=== Account ===");
    let me = client.user().info()?;
    println!("{}", findemail::serde_json::to_string_pretty(&me)?);
    println!();

    println!("=== Emails for {domain} ===");
    let emails = client.search().domain(&domain)?;
    println!("{}", findemail::serde_json::to_string_pretty(&emails)?);
    println!();

    println!("=== Stealer logs for {domain} ===");
    let logs = client.search().logs(&domain, "domain")?;
    println!("{}", findemail::serde_json::to_string_pretty(&logs)?);

    Ok(())
}
