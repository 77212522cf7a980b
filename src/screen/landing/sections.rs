use super::Message;
use crate::style;
use crate::widget::Sparkline;
use data::ThemeMode;

use chrono::Datelike;
use iced::widget::{Column, button, canvas, column, container, row, space, text, text_input};
use iced::{Alignment, Element, Fill, Length};

pub const BRAND: &str = "CryptoScope";

struct Feature {
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Regulasi & Keamanan",
        desc: "Pantau perkembangan regulasi dan praktik keamanan terkini di dunia kripto.",
    },
    Feature {
        title: "Analisa On-Chain & Teknis",
        desc: "Chart interaktif, indikator tren, serta insight siklus pasar.",
    },
    Feature {
        title: "Berita & Edukasi",
        desc: "Rangkuman berita, glossary, dan artikel edukatif untuk semua level.",
    },
];

const ARTICLE_POINTS: [&str; 3] = [
    "Supply shock pasca halving memperketat pasokan.",
    "ETF spot menambah likuiditas & akses institusi.",
    "Makro: inflasi & diversifikasi aset mendorong permintaan.",
];

const FOOTER_LINKS: [(&str, &[&str]); 3] = [
    ("Menu", &["Fitur", "Market", "Artikel"]),
    ("Sosial", &["Twitter", "Telegram", "Discord"]),
    ("Legal", &["Ketentuan", "Privasi"]),
];

/// Indexed BTC closes used by the trend placeholder
pub const TREND_PLACEHOLDER: [f32; 24] = [
    100.0, 102.4, 101.1, 103.8, 106.2, 105.0, 107.9, 110.3, 108.6, 111.2, 114.5, 113.1, 116.8,
    115.4, 118.9, 121.7, 119.8, 123.5, 126.0, 124.2, 127.6, 131.0, 129.4, 133.2,
];

fn brand_mark<'a>() -> Element<'a, Message> {
    container(text("CS").size(14))
        .padding([4, 10])
        .style(style::brand_mark)
        .into()
}

fn section_title<'a>(label: &'a str, title: &'a str) -> Column<'a, Message> {
    column![
        text(label).size(12).style(style::accent_text),
        text(title).size(26),
    ]
    .spacing(4)
}

pub fn nav<'a>(theme: ThemeMode) -> Element<'a, Message> {
    let links = row![
        text("Fitur").size(14),
        text("Market").size(14),
        text("Artikel").size(14),
    ]
    .spacing(24);

    let toggle_label = if theme.is_dark() {
        "Mode Terang"
    } else {
        "Mode Gelap"
    };

    let toggle = button(text(toggle_label).size(13))
        .padding([6, 12])
        .style(move |theme, status| style::button::transparent(theme, status, false))
        .on_press(Message::ToggleTheme);

    container(
        row![
            brand_mark(),
            text(BRAND).size(18),
            space::horizontal(),
            links,
            space::horizontal().width(32),
            toggle,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([12, 24])
    .width(Fill)
    .style(style::nav_bar)
    .into()
}

pub fn hero<'a>(price_panel: Element<'a, Message>) -> Element<'a, Message> {
    let badge = container(text("Insight pasar kripto, setiap hari").size(12))
        .padding([4, 10])
        .style(style::badge);

    let copy = column![
        badge,
        text("Pahami Pasar Kripto dengan Data, Bukan Spekulasi").size(40),
        text(
            "Harga terkini, analisa tren, dan edukasi yang ringkas untuk membantu \
             kamu mengambil keputusan dengan lebih tenang."
        )
        .size(16)
        .style(style::muted_text),
        row![
            button(text("Mulai Belajar").size(14))
                .padding([10, 18])
                .style(style::button::cta),
            button(text("Lihat Market").size(14))
                .padding([10, 18])
                .style(style::button::outline),
        ]
        .spacing(12),
    ]
    .spacing(18)
    .width(Length::FillPortion(3));

    container(
        row![copy, container(price_panel).width(Length::FillPortion(2))]
            .spacing(32)
            .align_y(Alignment::Center),
    )
    .padding(32)
    .width(Fill)
    .style(style::hero)
    .into()
}

pub fn features<'a>() -> Element<'a, Message> {
    let cards = FEATURES.iter().map(|feature| -> Element<'a, Message> {
        container(
            column![
                text(feature.title).size(18),
                text(feature.desc).size(14).style(style::muted_text),
            ]
            .spacing(8),
        )
        .padding(20)
        .width(Length::FillPortion(1))
        .style(style::card)
        .into()
    });

    column![
        section_title("FITUR", "Semua yang kamu butuhkan untuk memahami pasar"),
        row(cards).spacing(16),
    ]
    .spacing(20)
    .into()
}

pub fn market<'a>(trend: &'a Sparkline) -> Element<'a, Message> {
    let panel = container(
        column![
            row![
                text("BTC / USD · 24 jam").size(14),
                space::horizontal(),
                container(text("Segera hadir").size(11))
                    .padding([2, 8])
                    .style(style::badge_outline),
            ]
            .align_y(Alignment::Center),
            canvas(trend).width(Fill).height(180),
            text("Chart interaktif sedang disiapkan. Data di atas hanya ilustrasi.")
                .size(12)
                .style(style::muted_text),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Fill)
    .style(style::card);

    column![section_title("MARKET", "Tren pasar"), panel]
        .spacing(20)
        .into()
}

pub fn article<'a>() -> Element<'a, Message> {
    let badges = row![
        container(text("Analisa").size(11))
            .padding([2, 8])
            .style(style::badge),
        container(text("BTC").size(11))
            .padding([2, 8])
            .style(style::badge_outline),
    ]
    .spacing(8);

    let points = ARTICLE_POINTS
        .iter()
        .fold(column![].spacing(4), |col, point| {
            col.push(text(format!("• {point}")).size(14).style(style::muted_text))
        });

    let card = container(
        column![
            badges,
            text("Potensi Bitcoin Menuju $130.000: Katalis, Risiko, & Skenario Harga").size(22),
            text(
                "Bitcoin tetap memimpin pasar kripto. Dengan katalis seperti ETF spot, \
                 halving, dan adopsi institusional, target psikologis $100k menjadi \
                 pintu menuju $120k–$130k."
            )
            .size(14),
            points,
            text("Disclaimer: Bukan nasihat keuangan. Lakukan riset dan manajemen risiko.")
                .size(12)
                .style(style::muted_text),
            button(text("Baca Artikel Lengkap →").size(13))
                .padding([8, 14])
                .style(style::button::cta),
        ]
        .spacing(14),
    )
    .padding(24)
    .width(Fill)
    .style(style::card);

    column![section_title("ARTIKEL", "Bacaan pilihan"), card]
        .spacing(20)
        .into()
}

/// Signup form without a submit handler
pub fn newsletter<'a>(email: &'a str) -> Element<'a, Message> {
    let form = row![
        text_input("email@contoh.com", email)
            .on_input(Message::EmailChanged)
            .padding(10)
            .width(Length::FillPortion(3)),
        button(text("Berlangganan").size(14))
            .padding([10, 18])
            .style(style::button::cta),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(
        column![
            text("Dapatkan ringkasan pasar mingguan").size(22),
            text("Satu email tiap pekan, berisi rangkuman harga, berita, dan edukasi.")
                .size(14)
                .style(style::muted_text),
            form,
        ]
        .spacing(12),
    )
    .padding(24)
    .width(Fill)
    .style(style::hero)
    .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    let brand = column![
        row![brand_mark(), text(BRAND).size(16)]
            .spacing(8)
            .align_y(Alignment::Center),
        text("Konten bersifat informatif & edukatif. Bukan nasihat investasi. DYOR.")
            .size(12)
            .style(style::muted_text),
    ]
    .spacing(8)
    .width(Length::FillPortion(2));

    let groups = FOOTER_LINKS.iter().map(|(heading, links)| -> Element<'a, Message> {
        links
            .iter()
            .fold(
                column![text(*heading).size(14)].spacing(6),
                |col, link| col.push(text(*link).size(13).style(style::muted_text)),
            )
            .width(Length::FillPortion(1))
            .into()
    });

    let copyright = text(format!(
        "© {} {BRAND}. All rights reserved.",
        chrono::Local::now().year()
    ))
    .size(11)
    .style(style::muted_text);

    column![
        row![brand, row(groups).spacing(24).width(Length::FillPortion(3))].spacing(24),
        container(copyright).center_x(Fill),
    ]
    .spacing(24)
    .padding([24, 0])
    .into()
}
