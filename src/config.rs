use crate::error::{PitraderError, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORTFOLIO_FILE: &str = "portfolio.json";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_API_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Process configuration, sourced from the environment (`.env` honored).
///
/// `API_KEY` is the only required variable; everything else has a default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base_url: String,
    pub portfolio_path: PathBuf,
    pub poll_interval: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(PitraderError::MissingCredential)?;

        let api_base_url = std::env::var("QUOTE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let portfolio_path = std::env::var("PORTFOLIO_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PORTFOLIO_FILE));

        let poll_interval_secs = std::env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Ok(Self {
            api_key,
            api_base_url,
            portfolio_path,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }
}
