pub mod coingecko;

use crate::{Asset, QuoteCurrency};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AdapterError {
    #[error("{0}")]
    FetchError(String),
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Rate limited by the price API")]
    RateLimited,
    #[error("Parsing error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for AdapterError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AdapterError::FetchError(format!("Request timed out: {error}"))
        } else if error.is_decode() {
            AdapterError::ParseError(error.to_string())
        } else {
            AdapterError::FetchError(error.to_string())
        }
    }
}

/// What a single poll asks the price API for.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub assets: Vec<Asset>,
    pub currency: QuoteCurrency,
    pub include_24h_change: bool,
}

impl Default for FetchRequest {
    fn default() -> Self {
        FetchRequest {
            assets: Asset::ALL.to_vec(),
            currency: QuoteCurrency::Usd,
            include_24h_change: true,
        }
    }
}
