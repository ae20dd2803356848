//! # Client Configuration Module
//!
//! Loads the settings needed to talk to the vDrive pricing API.
//!
//! ## Environment Variables
//!
//! - `VDRIVE_API_BASE_URL`: Base URL of the admin API (required)
//! - `VDRIVE_API_TOKEN`: Bearer token sent with every request
//! - `VDRIVE_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `LOG_LEVEL`: Logging level (default: "info")

use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

/// Settings for [`HttpPricingRuleApi`](crate::api::HttpPricingRuleApi).
///
/// # Example
///
/// ```no_run
/// use vdrive_client::config::ClientConfig;
///
/// let config = ClientConfig::from_env()?;
/// println!("Using pricing API at {}", config.pricing_rules_url());
/// # Ok::<(), eyre::Report>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the admin API, e.g. "https://admin.vdrive.example/api"
    pub api_base_url: String,

    /// Bearer token for authenticated requests
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `VDRIVE_API_BASE_URL` is not set or empty
    /// - `VDRIVE_REQUEST_TIMEOUT_SECONDS` is set but not a whole number
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("VDRIVE_API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| eyre!("VDRIVE_API_BASE_URL environment variable must be set"))?;

        let api_token = lookup("VDRIVE_API_TOKEN").filter(|token| !token.trim().is_empty());

        let request_timeout = match lookup("VDRIVE_REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .wrap_err("Invalid VDRIVE_REQUEST_TIMEOUT_SECONDS value")?,
            None => 30,
        };

        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            api_base_url,
            api_token,
            request_timeout,
            log_level,
        })
    }

    /// Collection endpoint, used for creating rules.
    pub fn pricing_rules_url(&self) -> String {
        format!("{}/pricing-rules", self.api_base_url.trim_end_matches('/'))
    }

    /// Endpoint of a single rule.
    pub fn pricing_rule_url(&self, id: i64) -> String {
        format!("{}/{}", self.pricing_rules_url(), id)
    }
}
