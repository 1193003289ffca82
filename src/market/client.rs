use super::Quote;
use crate::error::{PitraderError, Result};
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Subset of the provider's quote payload.
/// https://finnhub.io/docs/api/quote
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "c", default)]
    current: f64,
    #[serde(rename = "pc", default)]
    previous_close: f64,
}

/// Blocking HTTP client issuing one quote request per symbol.
///
/// No retries: each poll cycle is a fresh independent attempt.
#[derive(Clone)]
pub struct QuoteClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl QuoteClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    pub fn fetch(&self, symbol: &str) -> Result<Quote> {
        let url = format!("{}/quote", self.base_url.trim_end_matches('/'));

        let response: QuoteResponse = self
            .http
            .get(url)
            .query(&[("symbol", symbol), ("token", &self.token)])
            .send()?
            .error_for_status()?
            .json()?;

        let quote = Quote::new(symbol, response.current, response.previous_close);
        if !quote.is_valid() {
            return Err(PitraderError::InvalidQuote {
                symbol: symbol.to_string(),
            });
        }

        Ok(quote)
    }
}
