pub mod prices;
mod sections;

use crate::poller::{Poller, Prices, Seq, Tick, Ticket};
use crate::style;
use crate::widget::Sparkline;
use data::{Config, ThemeMode};
use exchange::{AdapterError, Asset, QuoteSet, adapter::coingecko};

use iced::widget::{column, container, scrollable};
use iced::{Element, Fill, Subscription, Task};

const CONTENT_MAX_WIDTH: f32 = 1180.0;

#[derive(Debug, Clone)]
pub enum Message {
    Tick(Tick),
    PricesFetched(Seq, Result<QuoteSet, AdapterError>),
    ToggleTheme,
    EmailChanged(String),
}

/// What the page shows; everything else on it is static.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub prices: Prices,
    pub theme: ThemeMode,
}

pub struct Landing {
    state: DisplayState,
    poller: Poller,
    assets: Vec<Asset>,
    email: String,
    trend: Sparkline,
}

impl Landing {
    /// Builds the view and kicks off the first price fetch.
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let mut landing = Self {
            state: DisplayState {
                prices: Prices::Loading,
                theme: config.theme,
            },
            poller: Poller::new(config.fetch_request(), config.poll_interval()),
            assets: config.assets.clone(),
            email: String::new(),
            trend: Sparkline::new(sections::TREND_PLACEHOLDER.to_vec()),
        };

        let task = landing.fetch_prices();
        (landing, task)
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.state.theme
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(_) => {
                return self.fetch_prices();
            }
            Message::PricesFetched(seq, result) => {
                self.poller.resolve(seq, result, &mut self.state.prices);
            }
            Message::ToggleTheme => {
                self.state.theme = self.state.theme.toggle();
                self.trend.invalidate();
            }
            Message::EmailChanged(email) => {
                self.email = email;
            }
        }

        Task::none()
    }

    pub fn teardown(&mut self) {
        self.poller.teardown();
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.poller.subscription().map(Message::Tick)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let price_panel = prices::view(&self.assets, &self.state.prices, self.poller.interval());

        let body = column![
            sections::hero(price_panel),
            sections::features(),
            sections::market(&self.trend),
            sections::article(),
            sections::newsletter(&self.email),
            sections::footer(),
        ]
        .spacing(56)
        .padding([32, 24])
        .max_width(CONTENT_MAX_WIDTH);

        let content = column![
            sections::nav(self.state.theme),
            container(body).center_x(Fill),
        ];

        container(scrollable(content).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(style::page)
            .into()
    }

    fn fetch_prices(&mut self) -> Task<Message> {
        let Some(Ticket { seq, request }) = self.poller.issue() else {
            return Task::none();
        };

        Task::perform(coingecko::fetch_quotes(request), move |result| {
            Message::PricesFetched(seq, result)
        })
    }
}
