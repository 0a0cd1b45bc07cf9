//! Configuration module
//!
//! Connection settings shared by every command.

use anyhow::{Result, anyhow};
use sinter_client::SinterClient;

/// CLI configuration
#[derive(Clone)]
pub struct Config {
    /// Sinter API token
    pub token: Option<String>,

    /// Sinter account id
    pub account_id: Option<u64>,

    /// Base URL of the Sinter API
    pub api_base: String,
}

impl Config {
    /// Builds a client, requiring both token and account id
    pub fn client(&self) -> Result<SinterClient> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("No valid Sinter token was supplied (--token or SINTER_TOKEN)"))?;
        let account_id = self.account_id.ok_or_else(|| {
            anyhow!("No valid account id was supplied (--account-id or SINTER_ACCOUNT_ID)")
        })?;

        Ok(SinterClient::with_base_url(&self.api_base, account_id, token))
    }
}
