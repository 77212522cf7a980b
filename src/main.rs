mod logger;
mod poller;
mod screen;
mod style;
mod widget;

use data::Config;
use screen::landing::{self, Landing};

use iced::{Element, Size, Subscription, Task, window};

fn main() -> iced::Result {
    let loaded = data::config::load();

    let level = loaded
        .as_ref()
        .map(Config::log_level)
        .unwrap_or(log::LevelFilter::Info);

    if let Err(e) = logger::setup(level) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let config = loaded.unwrap_or_else(|e| {
        log::error!("{e}, falling back to defaults");
        Config::default()
    });

    log::info!(
        "Starting CryptoScope: assets={:?}, interval={}s, theme={}",
        config.assets,
        config.poll_interval_secs,
        config.theme
    );

    iced::application(
        move || CryptoScope::new(&config),
        CryptoScope::update,
        CryptoScope::view,
    )
    .title("CryptoScope")
    .theme(CryptoScope::theme)
    .subscription(CryptoScope::subscription)
    .window(window::Settings {
        size: Size::new(1280.0, 900.0),
        min_size: Some(Size::new(800.0, 600.0)),
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()
}

struct CryptoScope {
    landing: Landing,
}

#[derive(Debug, Clone)]
enum Message {
    Landing(landing::Message),
    WindowCloseRequested(window::Id),
}

impl CryptoScope {
    fn new(config: &Config) -> (Self, Task<Message>) {
        let (landing, task) = Landing::new(config);

        (Self { landing }, task.map(Message::Landing))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Landing(message) => self.landing.update(message).map(Message::Landing),
            Message::WindowCloseRequested(id) => {
                log::info!("Close requested for window {id:?}");
                self.landing.teardown();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.landing.view().map(Message::Landing)
    }

    fn theme(&self) -> iced::Theme {
        data::Theme::from(self.landing.theme_mode()).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.landing.subscription().map(Message::Landing),
            window::close_requests().map(Message::WindowCloseRequested),
        ])
    }
}
