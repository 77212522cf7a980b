use data::Trend;
use data::config::theme::{brighten, elevate};

use iced::widget::{container, text};
use iced::{Border, Color, Theme};

pub const CARD_RADIUS: f32 = 16.0;

pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

pub fn nav_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.scale_alpha(0.9).into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color.scale_alpha(0.5),
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(elevate(palette.background.base.color, 0.04).into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color.scale_alpha(0.4),
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Hero panel, tinted with the accent color
pub fn hero(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = elevate(palette.background.base.color, 0.02);

    container::Style {
        background: Some(base.into()),
        border: Border {
            width: 1.0,
            color: palette.primary.base.color.scale_alpha(0.35),
            radius: (CARD_RADIUS * 1.5).into(),
        },
        ..Default::default()
    }
}

pub fn price_row(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(elevate(palette.background.base.color, 0.07).into()),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.primary.base.color.scale_alpha(0.2).into()),
        text_color: Some(brighten(palette.primary.base.color, 0.1)),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn badge_outline(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        text_color: Some(palette.background.base.text.scale_alpha(0.8)),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn brand_mark(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.primary.base.color.scale_alpha(0.12).into()),
        text_color: Some(palette.primary.base.color),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn trend_color(theme: &Theme, trend: Trend) -> Color {
    let palette = theme.extended_palette();

    match trend {
        Trend::Up => palette.success.base.color,
        Trend::Down => palette.danger.base.color,
    }
}

pub fn trend_text(theme: &Theme, trend: Trend) -> text::Style {
    text::Style {
        color: Some(trend_color(theme, trend)),
    }
}

pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.base.text.scale_alpha(0.65)),
    }
}

pub fn accent_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(brighten(theme.extended_palette().primary.base.color, 0.1)),
    }
}

pub mod button {
    use iced::widget::button::{Status, Style};
    use iced::{Border, Theme};

    pub fn transparent(theme: &Theme, status: Status, is_active: bool) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: palette.background.base.text,
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: if is_active {
                    palette.primary.base.color.scale_alpha(0.5)
                } else {
                    palette.background.strong.color.scale_alpha(0.5)
                },
            },
            background: match status {
                Status::Hovered | Status::Pressed => {
                    Some(palette.background.weak.color.into())
                }
                Status::Active | Status::Disabled => None,
            },
            ..Default::default()
        }
    }

    /// Same look with or without a press handler
    pub fn cta(theme: &Theme, _status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            background: Some(palette.primary.base.color.into()),
            text_color: palette.primary.base.text,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn outline(theme: &Theme, _status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border {
                radius: 10.0.into(),
                width: 1.0,
                color: palette.background.strong.color,
            },
            ..Default::default()
        }
    }
}
