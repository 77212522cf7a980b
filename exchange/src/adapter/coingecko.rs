use super::{AdapterError, FetchRequest};
use crate::{PriceQuote, QuoteSet};

use reqwest::StatusCode;
use rustc_hash::FxHashMap;

use std::{sync::LazyLock, time::Duration};

const API_DOMAIN: &str = "https://api.coingecko.com";
const SIMPLE_PRICE_PATH: &str = "/api/v3/simple/price";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("cryptoscope/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build configured HTTP client, using defaults: {e}");
            reqwest::Client::new()
        })
});

/// `{ "<coingecko id>": { "<ccy>": price, "<ccy>_24h_change": pct } }`
type SimplePriceResponse = FxHashMap<String, FxHashMap<String, Option<f64>>>;

pub fn simple_price_url(request: &FetchRequest) -> String {
    let ids = request
        .assets
        .iter()
        .map(|asset| asset.coingecko_id())
        .collect::<Vec<_>>()
        .join(",");

    let mut url = format!(
        "{API_DOMAIN}{SIMPLE_PRICE_PATH}?ids={ids}&vs_currencies={}",
        request.currency.code()
    );

    if request.include_24h_change {
        url.push_str("&include_24hr_change=true");
    }

    url
}

pub async fn fetch_quotes(request: FetchRequest) -> Result<QuoteSet, AdapterError> {
    let url = simple_price_url(&request);

    let response = HTTP_CLIENT.get(&url).send().await?;

    check_status(response.status())?;

    let body = response.text().await?;

    parse_simple_price(&body, &request)
}

fn check_status(status: StatusCode) -> Result<(), AdapterError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AdapterError::RateLimited);
    }
    if !status.is_success() {
        return Err(AdapterError::Status(status.as_u16()));
    }
    Ok(())
}

/// Builds a complete set for `request.assets` or fails as a whole.
pub fn parse_simple_price(body: &str, request: &FetchRequest) -> Result<QuoteSet, AdapterError> {
    let parsed: SimplePriceResponse = serde_json::from_str(body)
        .map_err(|e| AdapterError::ParseError(format!("Failed to parse simple price: {e}")))?;

    let price_key = request.currency.code();
    let change_key = format!("{price_key}_24h_change");

    let mut quotes = Vec::with_capacity(request.assets.len());

    for &asset in &request.assets {
        let fields = parsed.get(asset.coingecko_id()).ok_or_else(|| {
            AdapterError::ParseError(format!("Missing asset in response: {}", asset.coingecko_id()))
        })?;

        let price = fields
            .get(price_key)
            .copied()
            .flatten()
            .ok_or_else(|| AdapterError::ParseError(format!("{price_key} price not found for {asset}")))?;

        if !price.is_finite() || price < 0.0 {
            return Err(AdapterError::ParseError(format!(
                "Invalid {price_key} price for {asset}: {price}"
            )));
        }

        let change_24h = if request.include_24h_change {
            fields
                .get(&change_key)
                .copied()
                .flatten()
                .filter(|change| change.is_finite())
        } else {
            None
        };

        quotes.push(PriceQuote {
            asset,
            price,
            change_24h,
        });
    }

    Ok(quotes.into_iter().collect())
}
