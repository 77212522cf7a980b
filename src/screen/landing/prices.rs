use crate::poller::Prices;
use crate::style;
use data::{Trend, format_change, format_usd};
use exchange::Asset;

use iced::widget::{column, container, row, space, text};
use iced::{Alignment, Element, Fill};

use std::time::Duration;

pub const LOADING_PLACEHOLDER: &str = "Memuat…";

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub asset: Asset,
    pub cell: Cell,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Loading,
    Quote {
        price: String,
        change: Option<Change>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub text: String,
    pub trend: Trend,
}

/// One row per configured asset, in configured order.
pub fn rows(assets: &[Asset], prices: &Prices) -> Vec<PriceRow> {
    assets
        .iter()
        .map(|&asset| {
            let cell = match prices.quotes().and_then(|quotes| quotes.get(asset)) {
                Some(quote) => Cell::Quote {
                    price: format_usd(quote.price),
                    change: quote.change_24h.map(|change| Change {
                        text: format_change(change),
                        trend: Trend::of(change),
                    }),
                },
                None => Cell::Loading,
            };

            PriceRow { asset, cell }
        })
        .collect()
}

pub fn view<'a, Message: 'a>(
    assets: &[Asset],
    prices: &Prices,
    interval: Duration,
) -> Element<'a, Message> {
    let header = row![
        text("Harga Live").size(18),
        space::horizontal(),
        container(text("USD").size(11)).padding([2, 8]).style(style::badge),
    ]
    .align_y(Alignment::Center);

    let mut list = column![].spacing(8);
    for price_row in rows(assets, prices) {
        list = list.push(row_view(price_row));
    }

    let footnote = text(format!(
        "Sumber: CoinGecko · diperbarui tiap {} detik",
        interval.as_secs()
    ))
    .size(11)
    .style(style::muted_text);

    container(column![header, list, footnote].spacing(12))
        .padding(16)
        .width(Fill)
        .style(style::card)
        .into()
}

fn row_view<'a, Message: 'a>(price_row: PriceRow) -> Element<'a, Message> {
    let PriceRow { asset, cell } = price_row;

    let label = column![
        text(asset.symbol()).size(16),
        text(asset.name()).size(12).style(style::muted_text),
    ]
    .spacing(2);

    let value: Element<'a, Message> = match cell {
        Cell::Loading => text(LOADING_PLACEHOLDER)
            .size(14)
            .style(style::muted_text)
            .into(),
        Cell::Quote { price, change } => {
            let mut value = column![text(price).size(18)]
                .spacing(2)
                .align_x(Alignment::End);

            if let Some(Change { text: pct, trend }) = change {
                value = value.push(
                    text(pct)
                        .size(12)
                        .style(move |theme: &iced::Theme| style::trend_text(theme, trend)),
                );
            }

            value.into()
        }
    };

    container(row![label, space::horizontal(), value].align_y(Alignment::Center))
        .padding([10, 14])
        .width(Fill)
        .style(style::price_row)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exchange::{FetchRequest, adapter::coingecko};

    const SAMPLE: &str = r#"{
        "bitcoin": {"usd": 65000, "usd_24h_change": 2.5},
        "ethereum": {"usd": 3200, "usd_24h_change": -1.1},
        "solana": {"usd": 150, "usd_24h_change": 0.0}
    }"#;

    #[test]
    fn every_asset_loading_before_first_fetch() {
        let rows = rows(&Asset::ALL, &Prices::Loading);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.cell == Cell::Loading));
    }

    #[test]
    fn sample_payload_renders_prices_and_trends() {
        let quotes = coingecko::parse_simple_price(SAMPLE, &FetchRequest::default()).unwrap();
        let rows = rows(&Asset::ALL, &Prices::Loaded(quotes));

        let expected = [
            (Asset::Bitcoin, "$65,000", "+2.50%", Trend::Up),
            (Asset::Ethereum, "$3,200", "-1.10%", Trend::Down),
            (Asset::Solana, "$150", "+0.00%", Trend::Up),
        ];

        for (row, (asset, price, pct, trend)) in rows.iter().zip(expected) {
            assert_eq!(row.asset, asset);
            assert_eq!(
                row.cell,
                Cell::Quote {
                    price: price.to_string(),
                    change: Some(Change {
                        text: pct.to_string(),
                        trend,
                    }),
                }
            );
        }
    }

    #[test]
    fn rows_follow_configured_order() {
        let order = [Asset::Solana, Asset::Bitcoin];
        let rows = rows(&order, &Prices::Loading);

        assert_eq!(
            rows.iter().map(|row| row.asset).collect::<Vec<_>>(),
            order.to_vec()
        );
    }

    #[test]
    fn missing_change_shows_price_only() {
        let quotes = [exchange::PriceQuote {
            asset: Asset::Ethereum,
            price: 3200.5,
            change_24h: None,
        }]
        .into_iter()
        .collect();

        let rows = rows(&[Asset::Ethereum], &Prices::Loaded(quotes));
        assert_eq!(
            rows[0].cell,
            Cell::Quote {
                price: "$3,200.50".to_string(),
                change: None,
            }
        );
    }
}
