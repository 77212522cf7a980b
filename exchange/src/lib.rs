pub mod adapter;

pub use adapter::{AdapterError, FetchRequest};

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Deserialize, Serialize)]
pub enum Asset {
    #[serde(rename = "BTC", alias = "bitcoin")]
    Bitcoin,
    #[serde(rename = "ETH", alias = "ethereum")]
    Ethereum,
    #[serde(rename = "SOL", alias = "solana")]
    Solana,
}

impl Asset {
    pub const ALL: [Asset; 3] = [Asset::Bitcoin, Asset::Ethereum, Asset::Solana];

    pub fn symbol(self) -> &'static str {
        match self {
            Asset::Bitcoin => "BTC",
            Asset::Ethereum => "ETH",
            Asset::Solana => "SOL",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Asset::Bitcoin => "Bitcoin",
            Asset::Ethereum => "Ethereum",
            Asset::Solana => "Solana",
        }
    }

    /// Identifier used by CoinGecko's `ids` query parameter and response keys
    pub fn coingecko_id(self) -> &'static str {
        match self {
            Asset::Bitcoin => "bitcoin",
            Asset::Ethereum => "ethereum",
            Asset::Solana => "solana",
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCurrency {
    #[default]
    Usd,
}

impl QuoteCurrency {
    pub fn code(self) -> &'static str {
        match self {
            QuoteCurrency::Usd => "usd",
        }
    }
}

impl std::fmt::Display for QuoteCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code().to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub asset: Asset,
    pub price: f64,
    /// 24h change in percent, signed
    pub change_24h: Option<f64>,
}

/// Quotes from a single response, replaced as a whole on every successful poll.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteSet {
    quotes: EnumMap<Asset, Option<PriceQuote>>,
}

impl QuoteSet {
    pub fn get(&self, asset: Asset) -> Option<&PriceQuote> {
        self.quotes[asset].as_ref()
    }

    pub fn contains(&self, asset: Asset) -> bool {
        self.quotes[asset].is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceQuote> {
        self.quotes.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<PriceQuote> for QuoteSet {
    fn from_iter<I: IntoIterator<Item = PriceQuote>>(iter: I) -> Self {
        let mut quotes = EnumMap::default();
        for quote in iter {
            quotes[quote.asset] = Some(quote);
        }
        QuoteSet { quotes }
    }
}
