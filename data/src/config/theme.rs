use iced_core::{
    Color,
    theme::{Custom, Palette},
};
use palette::{
    FromColor, Hsla, Hsva,
    rgb::{Rgb, Rgba},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme(pub iced_core::Theme);

impl Default for Theme {
    fn default() -> Self {
        Theme::from(ThemeMode::default())
    }
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        let custom = match mode {
            ThemeMode::Dark => scope_dark_theme(),
            ThemeMode::Light => scope_light_theme(),
        };
        Self(iced_core::Theme::Custom(custom.into()))
    }
}

impl From<Theme> for iced_core::Theme {
    fn from(val: Theme) -> Self {
        val.0
    }
}

/// Slate background with emerald accents
pub fn scope_dark_theme() -> Custom {
    Custom::new(
        "Scope Dark".to_string(),
        Palette {
            background: Color::from_rgb8(2, 6, 23),
            text: Color::from_rgb8(241, 245, 249),
            primary: Color::from_rgb8(16, 185, 129),
            success: Color::from_rgb8(52, 211, 153),
            danger: Color::from_rgb8(248, 113, 113),
            warning: Color::from_rgb8(251, 191, 36),
        },
    )
}

pub fn scope_light_theme() -> Custom {
    Custom::new(
        "Scope Light".to_string(),
        Palette {
            background: Color::from_rgb8(248, 250, 252),
            text: Color::from_rgb8(30, 41, 59),
            primary: Color::from_rgb8(5, 150, 105),
            success: Color::from_rgb8(5, 150, 105),
            danger: Color::from_rgb8(220, 38, 38),
            warning: Color::from_rgb8(217, 119, 6),
        },
    )
}

/// Raises value and a bit of saturation in HSV space
pub fn brighten(color: Color, amount: f32) -> Color {
    let mut hsva = to_hsva(color);
    hsva.value = (hsva.value + amount).min(1.0);
    hsva.saturation = (hsva.saturation + amount * 0.2).min(1.0);
    from_hsva(hsva)
}

pub fn from_hsva(color: Hsva) -> Color {
    to_color(palette::Srgba::from_color(color))
}

fn to_color(rgba: Rgba) -> Color {
    Color {
        r: rgba.color.red,
        g: rgba.color.green,
        b: rgba.color.blue,
        a: rgba.alpha,
    }
}

pub fn to_hsva(color: Color) -> Hsva {
    Hsva::from_color(to_rgba(color))
}

fn to_rgb(color: Color) -> Rgb {
    Rgb {
        red: color.r,
        green: color.g,
        blue: color.b,
        ..Rgb::default()
    }
}

fn to_rgba(color: Color) -> Rgba {
    Rgba {
        alpha: color.a,
        color: to_rgb(color),
    }
}

pub fn darken(color: Color, amount: f32) -> Color {
    let mut hsla = to_hsla(color);
    hsla.lightness = (hsla.lightness - amount).max(0.0);
    from_hsla(hsla)
}

pub fn lighten(color: Color, amount: f32) -> Color {
    let mut hsla = to_hsla(color);
    hsla.lightness = (hsla.lightness + amount).min(1.0);
    from_hsla(hsla)
}

/// Shifts a surface color away from the background: lighter on dark themes,
/// darker on light ones.
pub fn elevate(color: Color, amount: f32) -> Color {
    if is_dark(color) {
        lighten(color, amount)
    } else {
        darken(color, amount)
    }
}

fn to_hsla(color: Color) -> Hsla {
    Hsla::from_color(to_rgba(color))
}

fn from_hsla(color: Hsla) -> Color {
    to_color(palette::Srgba::from_color(color))
}

/// Perceived brightness below the midpoint
pub fn is_dark(color: Color) -> bool {
    let brightness = (color.r * 299.0 + color.g * 587.0 + color.b * 114.0) / 1000.0;
    brightness < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_ne!(mode.toggle(), mode);
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn default_is_dark() {
        assert!(ThemeMode::default().is_dark());

        let theme: iced_core::Theme = Theme::default().into();
        assert!(is_dark(theme.palette().background));
    }

    #[test]
    fn light_theme_has_light_background() {
        let theme: iced_core::Theme = Theme::from(ThemeMode::Light).into();
        assert!(!is_dark(theme.palette().background));
    }

    #[test]
    fn elevate_moves_away_from_background() {
        let dark = Color::from_rgb8(2, 6, 23);
        let light = Color::from_rgb8(248, 250, 252);

        assert!(elevate(dark, 0.05).r > dark.r);
        assert!(elevate(light, 0.05).r < light.r);
    }

    #[test]
    fn mode_serde() {
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }
}
